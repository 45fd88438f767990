//! Outgoing email: generated passwords and debt notices.
//!
//! The roster engine only sees the `CredentialNotifier` trait and the debt service
//! only `DebtNotifier`; `SmtpNotifier` implements both, sending plain-text mail
//! through an authenticated STARTTLS relay.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::SmtpConfig,
    error::{config::ConfigError, notify::NotifyError},
};

const PASSWORD_SUBJECT: &str = "Your account password";

/// Sends a newly generated password to its owner.
#[async_trait]
pub trait CredentialNotifier: Send + Sync {
    /// Delivers `password` to `email`.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the transport
    /// - `Err(NotifyError::InvalidAddress)` - Address cannot receive mail
    /// - `Err(NotifyError::Transport)` - Delivery failed
    async fn send_password(&self, email: &str, password: &str) -> Result<(), NotifyError>;
}

/// Student's request to settle a debt, mailed to the teacher it is owed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtNotice {
    pub student_name: String,
    pub student_email: String,
    pub group: String,
    pub exam: String,
}

impl DebtNotice {
    fn subject(&self) -> String {
        format!("Exam debt: {}", self.exam)
    }

    fn body(&self) -> String {
        format!(
            "{name} ({group}) would like to settle the exam \"{exam}\".\n\n\
             Please schedule a date and place in the debt board or reply to {email}.\n",
            name = self.student_name,
            group = self.group,
            exam = self.exam,
            email = self.student_email,
        )
    }
}

/// Tells a teacher that a student wants to settle a debt.
#[async_trait]
pub trait DebtNotifier: Send + Sync {
    /// Delivers `notice` to `teacher_email`.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the transport
    /// - `Err(NotifyError::InvalidAddress)` - Address cannot receive mail
    /// - `Err(NotifyError::Transport)` - Delivery failed
    async fn send_debt_notice(
        &self,
        teacher_email: &str,
        notice: &DebtNotice,
    ) -> Result<(), NotifyError>;
}

/// Parses `email` into a mailbox, rejecting addresses without an `@`.
pub fn parse_address(email: &str) -> Result<Mailbox, NotifyError> {
    if !email.contains('@') {
        return Err(NotifyError::InvalidAddress(email.to_string()));
    }

    email
        .parse::<Mailbox>()
        .map_err(|_| NotifyError::InvalidAddress(email.to_string()))
}

/// SMTP implementation of `CredentialNotifier` and `DebtNotifier`.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Builds the notifier from SMTP settings.
    ///
    /// No connection is opened here; the relay is contacted on first send.
    ///
    /// # Arguments
    /// - `config` - Relay host, port, credentials and sender address
    ///
    /// # Returns
    /// - `Ok(SmtpNotifier)` - Notifier ready to send
    /// - `Err(ConfigError::InvalidEnvVar)` - Sender address or relay host is invalid
    pub fn new(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "SMTP_FROM".to_string(),
                value: config.from.clone(),
            })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "SMTP_HOST".to_string(),
                value: config.host.clone(),
            })?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    async fn send_text(&self, to: &str, subject: String, body: String) -> Result<(), NotifyError> {
        let to = parse_address(to)?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CredentialNotifier for SmtpNotifier {
    async fn send_password(&self, email: &str, password: &str) -> Result<(), NotifyError> {
        self.send_text(
            email,
            PASSWORD_SUBJECT.to_string(),
            format!("An account was created for you.\n\nLogin: {email}\nPassword: {password}\n"),
        )
        .await
    }
}

#[async_trait]
impl DebtNotifier for SmtpNotifier {
    async fn send_debt_notice(
        &self,
        teacher_email: &str,
        notice: &DebtNotice,
    ) -> Result<(), NotifyError> {
        self.send_text(teacher_email, notice.subject(), notice.body())
            .await
    }
}

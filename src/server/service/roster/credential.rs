//! Credential issuing for people created by a roster import.
//!
//! Issuing is split in two. `prepare` picks the plaintext and hashes it while the
//! candidate's transaction is open; `deliver` mails the plaintext once that
//! transaction has committed. A credential whose row never committed is dropped
//! without being sent.

use std::fmt;

use crate::server::{
    config::BootstrapAccount,
    error::credential::CredentialError,
    mail::CredentialNotifier,
    model::roster::{PersonKind, PersonOutcome, ProvisionOutcome},
    util::{
        hasher::PasswordHasher,
        password::{generate_password, GENERATED_PASSWORD_LENGTH},
    },
};

/// A hashed credential waiting for its account row to commit.
pub struct PendingCredential {
    pub email: String,
    pub kind: PersonKind,
    pub password_hash: String,
    /// `None` for the bootstrap account, whose password is never sent.
    plaintext: Option<String>,
}

impl PendingCredential {
    pub fn is_bootstrap(&self) -> bool {
        self.plaintext.is_none()
    }
}

impl fmt::Debug for PendingCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCredential")
            .field("email", &self.email)
            .field("kind", &self.kind)
            .field("bootstrap", &self.is_bootstrap())
            .finish_non_exhaustive()
    }
}

pub struct CredentialProvisioner<'a> {
    hasher: &'a dyn PasswordHasher,
    notifier: &'a dyn CredentialNotifier,
    bootstrap: Option<&'a BootstrapAccount>,
}

impl<'a> CredentialProvisioner<'a> {
    pub fn new(
        hasher: &'a dyn PasswordHasher,
        notifier: &'a dyn CredentialNotifier,
        bootstrap: Option<&'a BootstrapAccount>,
    ) -> Self {
        Self {
            hasher,
            notifier,
            bootstrap,
        }
    }

    /// Chooses and hashes the password for a new account.
    ///
    /// The bootstrap email gets its configured password, everyone else a freshly
    /// generated one.
    ///
    /// # Arguments
    /// - `email` - Email of the account being created
    /// - `kind` - Whether the account is a student or a teacher
    ///
    /// # Returns
    /// - `Ok(PendingCredential)` - Hash ready for the create call
    /// - `Err(CredentialError::HashingFailed)` - The hasher failed
    pub fn prepare(&self, email: &str, kind: PersonKind) -> Result<PendingCredential, CredentialError> {
        let (plaintext, send) = match self.bootstrap {
            Some(bootstrap) if bootstrap.email == email => (bootstrap.password.clone(), false),
            _ => (generate_password(GENERATED_PASSWORD_LENGTH), true),
        };

        let password_hash = self.hasher.hash(&plaintext)?;

        Ok(PendingCredential {
            email: email.to_string(),
            kind,
            password_hash,
            plaintext: send.then_some(plaintext),
        })
    }

    /// Sends the plaintext of a committed account to its owner.
    ///
    /// Delivery failures are logged and reported, never returned as errors.
    pub async fn deliver(&self, pending: PendingCredential) -> PersonOutcome {
        let outcome = match &pending.plaintext {
            None => {
                tracing::info!(email = %pending.email, "Bootstrap account created with configured password");
                ProvisionOutcome::Bootstrapped
            }
            Some(plaintext) => match self.notifier.send_password(&pending.email, plaintext).await {
                Ok(()) => ProvisionOutcome::Created,
                Err(err) => {
                    tracing::warn!(email = %pending.email, error = %err, "Failed to deliver generated password");
                    ProvisionOutcome::CreatedNotificationFailed
                }
            },
        };

        PersonOutcome {
            email: pending.email,
            kind: pending.kind,
            outcome,
        }
    }
}

use thiserror::Error;

/// Failures delivering an email.
///
/// Password deliveries during a roster import never surface as an `AppError`: they
/// are logged and reported per person and the account is kept. A debt notice
/// requested by a student fails the request as `AppError::NotifyErr`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The address cannot receive mail, e.g. it has no `@`.
    #[error("Invalid email address '{0}'")]
    InvalidAddress(String),

    /// The message was built but the transport failed to deliver it.
    #[error("Failed to deliver mail: {0}")]
    Transport(String),
}

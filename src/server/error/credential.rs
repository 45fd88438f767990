use thiserror::Error;

/// Failures while preparing account credentials.
///
/// A person cannot be persisted without a password hash, so these always abort
/// the operation that needed the credential.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Hashing parameters were rejected or the hash could not be computed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

//! Type-safe session management wrappers.
//!
//! `AuthSession` owns every session key used for authentication so handlers and
//! the auth guard never touch raw keys.

use tower_sessions::Session;

use crate::server::{error::AppError, model::account::SessionAccount};

const SESSION_AUTH_ACCOUNT: &str = "auth:account";

/// Authentication session management.
///
/// Stores which account is logged in: its table and UUID.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in account in the session.
    ///
    /// The session ID is cycled first so a session fixed before login cannot be
    /// reused after it.
    ///
    /// # Arguments
    /// - `account` - Account that just authenticated
    ///
    /// # Returns
    /// - `Ok(())` - Account stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_account(&self, account: SessionAccount) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ACCOUNT, account).await?;
        Ok(())
    }

    /// Retrieves the logged-in account from the session.
    ///
    /// # Returns
    /// - `Ok(Some(account))` - An account is logged in
    /// - `Ok(None)` - Nobody is logged in
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_account(&self) -> Result<Option<SessionAccount>, AppError> {
        Ok(self.session.get(SESSION_AUTH_ACCOUNT).await?)
    }

    /// Checks if an account is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_account().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

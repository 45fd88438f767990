use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account is stored in the session.
    ///
    /// The request was made without logging in first, or the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find account in session")]
    UserNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// Results in a 401 Unauthorized response and should be followed by a logout.
    #[error("Account {0} stored in session was not found in the database")]
    UserNotInDatabase(String),

    /// Email or password did not match any account.
    ///
    /// The same response is returned for unknown emails and wrong passwords so
    /// the endpoint cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account is logged in but lacks the role required for the operation.
    ///
    /// # Fields
    /// - Account UUID
    /// - Description of the denied operation, logged server-side only
    #[error("Access denied for account {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; clients only receive a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

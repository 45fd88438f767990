//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into every handler
//! through Axum's state extraction. Every field is cheap to clone: the database
//! connection is a pool handle and the hasher and notifiers sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{BootstrapAccount, RosterConfig},
    mail::{CredentialNotifier, DebtNotifier},
    util::hasher::PasswordHasher,
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the SQLite database.
    pub db: DatabaseConnection,

    /// Hasher used for login checks and for passwords issued by roster imports.
    pub hasher: Arc<dyn PasswordHasher>,

    /// Mailer delivering generated passwords.
    pub notifier: Arc<dyn CredentialNotifier>,

    /// Mailer delivering students' debt notices to teachers.
    pub debt_notifier: Arc<dyn DebtNotifier>,

    /// Account whose password is fixed by configuration rather than generated.
    pub bootstrap: Option<BootstrapAccount>,

    /// Worksheet name and time limit for roster imports.
    pub roster: RosterConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        hasher: Arc<dyn PasswordHasher>,
        notifier: Arc<dyn CredentialNotifier>,
        debt_notifier: Arc<dyn DebtNotifier>,
        bootstrap: Option<BootstrapAccount>,
        roster: RosterConfig,
    ) -> Self {
        Self {
            db,
            hasher,
            notifier,
            debt_notifier,
            bootstrap,
            roster,
        }
    }
}

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{student::StudentRepository, teacher::TeacherRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::{Account, AccountKind, Role},
};

pub enum Permission {
    /// Teacher with the admin flag.
    Admin,
    /// Any teacher, admins included.
    Teacher,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in account and checks it holds every permission.
    ///
    /// # Returns
    /// - `Ok(Account)` - Logged in and permitted
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's account was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let Some(session_account) = AuthSession::new(self.session).get_account().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let account = match session_account.kind {
            AccountKind::Teacher => TeacherRepository::new(self.db)
                .get_by_uuid(&session_account.uuid)
                .await?
                .map(Account::from_teacher),
            AccountKind::Student => StudentRepository::new(self.db)
                .get_by_uuid(&session_account.uuid)
                .await?
                .map(Account::from_student),
        };

        let Some(account) = account else {
            return Err(AuthError::UserNotInDatabase(session_account.uuid).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if account.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            account.uuid,
                            "Account attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Teacher => {
                    if account.role == Role::Student {
                        return Err(AuthError::AccessDenied(
                            account.uuid,
                            "Student attempted a teacher operation".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}

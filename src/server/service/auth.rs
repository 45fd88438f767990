//! Email and password login and password changes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{student::StudentRepository, teacher::TeacherRepository},
    error::{auth::AuthError, AppError},
    model::account::{Account, Role},
    util::hasher::PasswordHasher,
};

/// Shortest password accepted when an account changes its password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a dyn PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: &'a dyn PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Authenticates an account by email and password.
    ///
    /// Teachers are checked before students. An email registered as both only
    /// logs in as the teacher.
    ///
    /// # Arguments
    /// - `email` - Login email
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(Account)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, AppError> {
        if let Some(teacher) = TeacherRepository::new(self.db).find_by_email(email).await? {
            if self.hasher.verify(password, &teacher.password_hash) {
                return Ok(Account::from_teacher(teacher));
            }
            return Err(AuthError::InvalidCredentials.into());
        }

        if let Some(student) = StudentRepository::new(self.db).find_by_email(email).await? {
            if self.hasher.verify(password, &student.password_hash) {
                return Ok(Account::from_student(student));
            }
        }

        Err(AuthError::InvalidCredentials.into())
    }

    /// Replaces the password of a logged-in account.
    ///
    /// # Arguments
    /// - `account` - Account changing its password
    /// - `current_password` - Plaintext of the password stored now
    /// - `new_password` - Plaintext to store, at least `MIN_PASSWORD_LENGTH` characters
    ///
    /// # Returns
    /// - `Ok(())` - New hash stored
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AuthError::InvalidCredentials)` - Current password does not match
    /// - `Err(AuthError::UserNotInDatabase)` - Account no longer exists
    /// - `Err(AppError::CredentialErr)` - New password could not be hashed
    pub async fn change_password(
        &self,
        account: &Account,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let stored_hash = match account.role {
            Role::Student => StudentRepository::new(self.db)
                .get_by_uuid(&account.uuid)
                .await?
                .map(|s| s.password_hash),
            Role::Teacher | Role::Admin => TeacherRepository::new(self.db)
                .get_by_uuid(&account.uuid)
                .await?
                .map(|t| t.password_hash),
        };
        let Some(stored_hash) = stored_hash else {
            return Err(AuthError::UserNotInDatabase(account.uuid.clone()).into());
        };

        if !self.hasher.verify(current_password, &stored_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let new_hash = self.hasher.hash(new_password)?;

        match account.role {
            Role::Student => {
                StudentRepository::new(self.db)
                    .set_password(&account.uuid, new_hash)
                    .await?;
            }
            Role::Teacher | Role::Admin => {
                TeacherRepository::new(self.db)
                    .set_password(&account.uuid, new_hash)
                    .await?;
            }
        }

        tracing::info!(account = %account.uuid, "Password changed");

        Ok(())
    }
}

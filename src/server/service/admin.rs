//! Admin account seeding.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::teacher::TeacherRepository, error::AppError, model::teacher::CreateTeacherParams,
    util::hasher::PasswordHasher,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a dyn PasswordHasher,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: &'a dyn PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Makes sure at least one admin teacher exists.
    ///
    /// Does nothing when an admin exists. Otherwise promotes the teacher with
    /// `email`, or creates one with `password` when there is none. The password of
    /// an existing teacher is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - An admin was promoted or created
    /// - `Ok(false)` - An admin already existed
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let repo = TeacherRepository::new(self.db);

        if repo.admin_exists().await? {
            tracing::debug!("Admin account present, skipping seed");
            return Ok(false);
        }

        if let Some(teacher) = repo.find_by_email(email).await? {
            repo.set_admin(&teacher.uuid).await?;
            tracing::info!(email = %email, "Promoted existing teacher to admin");
            return Ok(true);
        }

        let password_hash = self.hasher.hash(password)?;
        repo.create(CreateTeacherParams {
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            middle_name: String::new(),
            email: email.to_string(),
            password_hash,
            admin: true,
        })
        .await?;

        tracing::info!(email = %email, "Created admin account");

        Ok(true)
    }
}

//! Teacher data repository for database operations.
//!
//! This module provides the `TeacherRepository` for looking up teachers by email,
//! creating them during roster imports or startup, and managing the admin flag.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{CreateTeacherParams, Teacher};

/// Repository providing database operations for teachers.
pub struct TeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    /// Creates a new TeacherRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `TeacherRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds teachers whose email is one of `emails`.
    ///
    /// # Arguments
    /// - `emails` - Emails to match exactly
    ///
    /// # Returns
    /// - `Ok(Vec<Teacher>)` - Matching teachers ordered by UUID
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, emails: &[String]) -> Result<Vec<Teacher>, DbErr> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Email.is_in(emails.iter().cloned()))
            .order_by_asc(entity::teacher::Column::Uuid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Teacher::from_entity).collect())
    }

    /// Inserts a teacher, assigning a fresh UUID v4.
    ///
    /// # Arguments
    /// - `params` - Names, email, password hash and admin flag
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, DbErr> {
        let entity = entity::teacher::ActiveModel {
            uuid: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            admin: ActiveValue::Set(params.admin),
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    /// Finds a teacher by email.
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - Teacher found
    /// - `Ok(None)` - No teacher with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Finds a teacher by UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(uuid.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Checks if any admin teacher exists.
    ///
    /// Used at startup to decide whether the configured admin account must be seeded.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one teacher has the admin flag
    /// - `Ok(false)` - No admin exists
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Grants admin privileges to an existing teacher.
    ///
    /// # Arguments
    /// - `uuid` - UUID of the teacher to promote
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(DbErr::RecordNotFound)` - No teacher with that UUID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_admin(&self, uuid: &str) -> Result<Teacher, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(uuid.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Teacher with uuid {} not found",
                uuid
            )))?;

        let mut active_model: entity::teacher::ActiveModel = teacher.into();
        active_model.admin = ActiveValue::Set(true);

        let updated = active_model.update(self.db).await?;

        Ok(Teacher::from_entity(updated))
    }

    /// Replaces a teacher's password hash.
    ///
    /// # Arguments
    /// - `uuid` - UUID of the teacher
    /// - `password_hash` - New Argon2 PHC string
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(DbErr::RecordNotFound)` - No teacher with that UUID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_password(&self, uuid: &str, password_hash: String) -> Result<Teacher, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(uuid.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Teacher with uuid {} not found",
                uuid
            )))?;

        let mut active_model: entity::teacher::ActiveModel = teacher.into();
        active_model.password = ActiveValue::Set(password_hash);

        let updated = active_model.update(self.db).await?;

        Ok(Teacher::from_entity(updated))
    }
}

//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for looking up students by email,
//! creating them during roster imports and loading them for login and session checks.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student};

/// Repository providing database operations for students.
///
/// Generic over the connection so lookups and inserts can share a transaction with
/// the rest of a reconciliation cascade.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds students whose email is one of `emails`.
    ///
    /// # Arguments
    /// - `emails` - Emails to match exactly
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Matching students ordered by UUID
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, emails: &[String]) -> Result<Vec<Student>, DbErr> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.is_in(emails.iter().cloned()))
            .order_by_asc(entity::student::Column::Uuid)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Inserts a student, assigning a fresh UUID v4.
    ///
    /// # Arguments
    /// - `params` - Names, email, group and password hash of the student
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            uuid: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            group_id: ActiveValue::Set(params.group_id),
            password: ActiveValue::Set(params.password_hash),
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by email.
    ///
    /// # Arguments
    /// - `email` - Email to look up
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by UUID.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(uuid.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Replaces a student's password hash.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student with that UUID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_password(&self, uuid: &str, password_hash: String) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(uuid.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with uuid {} not found",
                uuid
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.password = ActiveValue::Set(password_hash);

        let updated = active_model.update(self.db).await?;

        Ok(Student::from_entity(updated))
    }
}

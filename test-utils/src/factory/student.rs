//! Student factory for creating test student entities.
//!
//! Students always belong to a group, so the group ID is a required argument.

use crate::factory::helpers::{next_id, DEFAULT_PASSWORD_HASH};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db, group.id)
///     .email("ivanov@uni.example")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: String,
    first_name: String,
    last_name: String,
    middle_name: String,
    email: String,
    group_id: i32,
    password: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - uuid: random v4
    /// - names: `"First {id}"`, `"Last {id}"`, `"Middle {id}"`
    /// - email: `"student{id}@uni.example"`
    /// - password: `DEFAULT_PASSWORD_HASH`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `group_id` - ID of an existing group
    pub fn new(db: &'a DatabaseConnection, group_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uuid: uuid::Uuid::new_v4().to_string(),
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            middle_name: format!("Middle {}", id),
            email: format!("student{}@uni.example", id),
            group_id,
            password: DEFAULT_PASSWORD_HASH.to_string(),
        }
    }

    /// Sets the student's email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the student's last, first and middle names.
    pub fn names(
        mut self,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
    ) -> Self {
        self.last_name = last_name.into();
        self.first_name = first_name.into();
        self.middle_name = middle_name.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            middle_name: ActiveValue::Set(self.middle_name),
            email: ActiveValue::Set(self.email),
            group_id: ActiveValue::Set(self.group_id),
            password: ActiveValue::Set(self.password),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given group.
pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, group_id).build().await
}

/// Creates a student with a specific email in the given group.
pub async fn create_student_with_email(
    db: &DatabaseConnection,
    group_id: i32,
    email: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, group_id).email(email).build().await
}

//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::{next_id, DEFAULT_PASSWORD_HASH};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: String,
    first_name: String,
    last_name: String,
    middle_name: String,
    email: String,
    password: String,
    admin: bool,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - email: `"teacher{id}@uni.example"`
    /// - password: `DEFAULT_PASSWORD_HASH`
    /// - admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uuid: uuid::Uuid::new_v4().to_string(),
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            middle_name: format!("Middle {}", id),
            email: format!("teacher{}@uni.example", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            admin: false,
        }
    }

    /// Sets the teacher's email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets whether the teacher may administer the system.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            middle_name: ActiveValue::Set(self.middle_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            admin: ActiveValue::Set(self.admin),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}

/// Creates an admin teacher.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).admin(true).build().await
}

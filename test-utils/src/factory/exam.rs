//! Exam factory for creating test exam entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test exams.
pub struct ExamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> ExamFactory<'a> {
    /// Creates a new ExamFactory with default name `"Exam {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Exam {}", next_id()),
        }
    }

    /// Sets the exam name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the exam entity into the database.
    pub async fn build(self) -> Result<entity::exam::Model, DbErr> {
        entity::exam::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exam with default values.
pub async fn create_exam(db: &DatabaseConnection) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db).build().await
}

/// Creates an exam with a specific name.
pub async fn create_exam_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db).name(name).build().await
}

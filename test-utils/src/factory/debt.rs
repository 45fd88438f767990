//! Debt factory for creating test debt entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test debts linking an existing exam, student and teacher.
pub struct DebtFactory<'a> {
    db: &'a DatabaseConnection,
    exam_id: i32,
    student_uuid: String,
    teacher_uuid: String,
    date: Option<DateTime<Utc>>,
    address: Option<String>,
}

impl<'a> DebtFactory<'a> {
    /// Creates a new DebtFactory; date and address default to `None`.
    pub fn new(
        db: &'a DatabaseConnection,
        exam_id: i32,
        student_uuid: impl Into<String>,
        teacher_uuid: impl Into<String>,
    ) -> Self {
        Self {
            db,
            exam_id,
            student_uuid: student_uuid.into(),
            teacher_uuid: teacher_uuid.into(),
            date: None,
            address: None,
        }
    }

    /// Sets the scheduled date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the scheduled address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builds and inserts the debt entity into the database.
    pub async fn build(self) -> Result<entity::debt::Model, DbErr> {
        entity::debt::ActiveModel {
            exam_id: ActiveValue::Set(self.exam_id),
            student_uuid: ActiveValue::Set(self.student_uuid),
            teacher_uuid: ActiveValue::Set(self.teacher_uuid),
            date: ActiveValue::Set(self.date),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unscheduled debt.
pub async fn create_debt(
    db: &DatabaseConnection,
    exam_id: i32,
    student_uuid: &str,
    teacher_uuid: &str,
) -> Result<entity::debt::Model, DbErr> {
    DebtFactory::new(db, exam_id, student_uuid, teacher_uuid)
        .build()
        .await
}

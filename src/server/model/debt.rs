//! Debt domain models and parameters.
//!
//! A debt records that a student owes an exam to a teacher. Debts are deduplicated
//! by the triple (exam name, student email, teacher email) and may later be
//! scheduled with a date and an address.

use chrono::{DateTime, Utc};

use crate::model::debt::{DebtDto, DebtPersonDto, PaginatedDebtsDto};

/// Debt as stored, referencing its exam, student and teacher by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub id: i32,
    pub exam_id: i32,
    pub student_uuid: String,
    pub teacher_uuid: String,
    /// When the make-up exam takes place; set to the creation time by roster imports.
    pub date: Option<DateTime<Utc>>,
    /// Where the make-up exam takes place.
    pub address: Option<String>,
}

impl Debt {
    /// Converts an entity model to a debt domain model at the repository boundary.
    pub fn from_entity(entity: entity::debt::Model) -> Self {
        Self {
            id: entity.id,
            exam_id: entity.exam_id,
            student_uuid: entity.student_uuid,
            teacher_uuid: entity.teacher_uuid,
            date: entity.date,
            address: entity.address,
        }
    }
}

/// Parameters for creating a debt.
#[derive(Debug, Clone)]
pub struct CreateDebtParams {
    pub exam_id: i32,
    pub student_uuid: String,
    pub teacher_uuid: String,
    pub date: Option<DateTime<Utc>>,
}

/// Parameters for setting when and where a debt is settled.
#[derive(Debug, Clone)]
pub struct ScheduleDebtParams {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub address: String,
}

/// Restricts a debt listing to the debts visible to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtFilter {
    /// Every debt; used for admins.
    All,
    /// Debts owed to the teacher with this UUID.
    Teacher(String),
    /// Debts owed by the student with this UUID.
    Student(String),
}

/// Debt entity together with the rows it references, as fetched by the repository.
///
/// Related rows are optional only because they are loaded in separate batch queries;
/// foreign keys guarantee they exist.
#[derive(Debug, Clone)]
pub struct DebtWithRelations {
    pub debt: entity::debt::Model,
    pub exam: Option<entity::exam::Model>,
    pub student: Option<entity::student::Model>,
    pub group: Option<entity::group::Model>,
    pub teacher: Option<entity::teacher::Model>,
}

/// Student or teacher as shown next to a debt.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtPerson {
    pub uuid: String,
    pub name: String,
    pub email: String,
}

impl DebtPerson {
    fn into_dto(self) -> DebtPersonDto {
        DebtPersonDto {
            uuid: self.uuid,
            name: self.name,
            email: self.email,
        }
    }
}

/// Debt enriched with exam, group and people for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtView {
    pub id: i32,
    pub exam: String,
    pub group: String,
    pub student: DebtPerson,
    pub teacher: DebtPerson,
    pub date: Option<DateTime<Utc>>,
    pub address: Option<String>,
}

impl DebtView {
    /// Builds the display model from repository data.
    ///
    /// Missing related rows fall back to the raw keys held by the debt so a listing
    /// never fails on a single inconsistent row.
    ///
    /// # Arguments
    /// - `data` - Debt with its related entities
    ///
    /// # Returns
    /// - `DebtView` - Display model
    pub fn from_with_relations(data: DebtWithRelations) -> Self {
        let DebtWithRelations {
            debt,
            exam,
            student,
            group,
            teacher,
        } = data;

        let student = match student {
            Some(s) => DebtPerson {
                name: format!("{} {} {}", s.last_name, s.first_name, s.middle_name),
                uuid: s.uuid,
                email: s.email,
            },
            None => DebtPerson {
                uuid: debt.student_uuid.clone(),
                name: String::new(),
                email: String::new(),
            },
        };

        let teacher = match teacher {
            Some(t) => DebtPerson {
                name: format!("{} {} {}", t.last_name, t.first_name, t.middle_name),
                uuid: t.uuid,
                email: t.email,
            },
            None => DebtPerson {
                uuid: debt.teacher_uuid.clone(),
                name: String::new(),
                email: String::new(),
            },
        };

        Self {
            id: debt.id,
            exam: exam.map(|e| e.name).unwrap_or_default(),
            group: group.map(|g| g.name).unwrap_or_default(),
            student,
            teacher,
            date: debt.date,
            address: debt.address,
        }
    }

    pub fn into_dto(self) -> DebtDto {
        DebtDto {
            id: self.id,
            exam: self.exam,
            group: self.group,
            student: self.student.into_dto(),
            teacher: self.teacher.into_dto(),
            date: self.date,
            address: self.address,
        }
    }
}

/// One page of debts visible to an account.
#[derive(Debug, Clone)]
pub struct PaginatedDebts {
    pub debts: Vec<DebtView>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedDebts {
    pub fn into_dto(self) -> PaginatedDebtsDto {
        PaginatedDebtsDto {
            debts: self.debts.into_iter().map(DebtView::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

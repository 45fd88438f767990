//! Exam domain models.

use crate::model::catalog::{ExamDto, PaginatedExamsDto};

/// Exam a student may owe, identified for reconciliation by its unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: i32,
    pub name: String,
}

impl Exam {
    /// Converts an entity model to an exam domain model at the repository boundary.
    pub fn from_entity(entity: entity::exam::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ExamDto {
        ExamDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedExams {
    pub exams: Vec<Exam>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedExams {
    pub fn into_dto(self) -> PaginatedExamsDto {
        PaginatedExamsDto {
            exams: self.exams.into_iter().map(Exam::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

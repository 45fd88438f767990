//! Read-only listings of groups and exams.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exam::ExamRepository, group::GroupRepository},
    error::AppError,
    model::{exam::PaginatedExams, group::PaginatedGroups, total_pages},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of groups ordered by name.
    pub async fn get_groups(&self, page: u64, per_page: u64) -> Result<PaginatedGroups, AppError> {
        let (groups, total) = GroupRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedGroups {
            groups,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets a page of exams ordered by name.
    pub async fn get_exams(&self, page: u64, per_page: u64) -> Result<PaginatedExams, AppError> {
        let (exams, total) = ExamRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedExams {
            exams,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}

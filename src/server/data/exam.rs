use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::exam::Exam;

pub struct ExamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds exams whose name is one of `names`, oldest first
    pub async fn search(&self, names: &[String]) -> Result<Vec<Exam>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Exam::find()
            .filter(entity::exam::Column::Name.is_in(names.iter().cloned()))
            .order_by_asc(entity::exam::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Exam::from_entity).collect())
    }

    /// Inserts an exam; fails with a unique violation if the name is taken
    pub async fn create(&self, name: String) -> Result<Exam, DbErr> {
        let entity = entity::exam::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Exam::from_entity(entity))
    }

    /// Gets a page of exams ordered by name along with the total count
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Exam>, u64), DbErr> {
        let paginator = entity::prelude::Exam::find()
            .order_by_asc(entity::exam::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let exams = paginator.fetch_page(page).await?;

        Ok((exams.into_iter().map(Exam::from_entity).collect(), total))
    }
}

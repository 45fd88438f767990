//! Debt data repository for database operations.
//!
//! This module provides the `DebtRepository` for matching debts by their natural
//! key triple, creating them during roster imports, listing them per account and
//! scheduling when and where they are settled.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::debt::{
    CreateDebtParams, Debt, DebtFilter, DebtWithRelations, ScheduleDebtParams,
};

/// Repository providing database operations for debts.
pub struct DebtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DebtRepository<'a, C> {
    /// Creates a new DebtRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `DebtRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds debts by exam name, student email and teacher email.
    ///
    /// A debt matches when its exam name is in `exam_names`, its student's email is in
    /// `student_emails` and its teacher's email is in `teacher_emails`. Passing one value
    /// per slice looks up a single natural key triple. Any empty slice matches nothing.
    ///
    /// # Arguments
    /// - `exam_names` - Exam names to match
    /// - `student_emails` - Student emails to match
    /// - `teacher_emails` - Teacher emails to match
    ///
    /// # Returns
    /// - `Ok(Vec<Debt>)` - Matching debts ordered by ID ascending
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        exam_names: &[String],
        student_emails: &[String],
        teacher_emails: &[String],
    ) -> Result<Vec<Debt>, DbErr> {
        if exam_names.is_empty() || student_emails.is_empty() || teacher_emails.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Debt::find()
            .join(JoinType::InnerJoin, entity::debt::Relation::Exam.def())
            .join(JoinType::InnerJoin, entity::debt::Relation::Student.def())
            .join(JoinType::InnerJoin, entity::debt::Relation::Teacher.def())
            .filter(entity::exam::Column::Name.is_in(exam_names.iter().cloned()))
            .filter(entity::student::Column::Email.is_in(student_emails.iter().cloned()))
            .filter(entity::teacher::Column::Email.is_in(teacher_emails.iter().cloned()))
            .order_by_asc(entity::debt::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Debt::from_entity).collect())
    }

    /// Inserts a debt linking an exam, a student and a teacher.
    ///
    /// # Arguments
    /// - `params` - Referenced keys and optional date
    ///
    /// # Returns
    /// - `Ok(Debt)` - The created debt, address unset
    /// - `Err(DbErr)` - Database error, including a unique violation when the triple exists
    pub async fn create(&self, params: CreateDebtParams) -> Result<Debt, DbErr> {
        let entity = entity::debt::ActiveModel {
            exam_id: ActiveValue::Set(params.exam_id),
            student_uuid: ActiveValue::Set(params.student_uuid),
            teacher_uuid: ActiveValue::Set(params.teacher_uuid),
            date: ActiveValue::Set(params.date),
            address: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Debt::from_entity(entity))
    }

    /// Gets a debt by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Debt>, DbErr> {
        let entity = entity::prelude::Debt::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Debt::from_entity))
    }

    /// Gets one debt with its exam, student, group and teacher.
    pub async fn get_with_relations(&self, id: i32) -> Result<Option<DebtWithRelations>, DbErr> {
        let Some(debt) = entity::prelude::Debt::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let exam = debt.find_related(entity::prelude::Exam).one(self.db).await?;
        let student = debt.find_related(entity::prelude::Student).one(self.db).await?;
        let group = match &student {
            Some(student) => {
                student
                    .find_related(entity::prelude::Group)
                    .one(self.db)
                    .await?
            }
            None => None,
        };
        let teacher = debt.find_related(entity::prelude::Teacher).one(self.db).await?;

        Ok(Some(DebtWithRelations {
            debt,
            exam,
            student,
            group,
            teacher,
        }))
    }

    /// Gets a page of debts with their exam, student, group and teacher.
    ///
    /// Related rows are fetched in one query per table for the whole page rather than
    /// per debt.
    ///
    /// # Arguments
    /// - `filter` - Which debts the caller may see
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of debts per page
    ///
    /// # Returns
    /// - `Ok((debts, total))` - Debts on the page ordered by ID and total matching count
    /// - `Err(DbErr)` - Database error during any query
    pub async fn get_paginated(
        &self,
        filter: &DebtFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<DebtWithRelations>, u64), DbErr> {
        let mut query = entity::prelude::Debt::find();
        match filter {
            DebtFilter::All => {}
            DebtFilter::Teacher(uuid) => {
                query = query.filter(entity::debt::Column::TeacherUuid.eq(uuid.as_str()));
            }
            DebtFilter::Student(uuid) => {
                query = query.filter(entity::debt::Column::StudentUuid.eq(uuid.as_str()));
            }
        }

        let paginator = query
            .order_by_asc(entity::debt::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let debts = paginator.fetch_page(page).await?;

        if debts.is_empty() {
            return Ok((Vec::new(), total));
        }

        let exam_ids: Vec<i32> = debts.iter().map(|d| d.exam_id).collect();
        let student_uuids: Vec<String> = debts.iter().map(|d| d.student_uuid.clone()).collect();
        let teacher_uuids: Vec<String> = debts.iter().map(|d| d.teacher_uuid.clone()).collect();

        let exams: HashMap<i32, entity::exam::Model> = entity::prelude::Exam::find()
            .filter(entity::exam::Column::Id.is_in(exam_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        let students: HashMap<String, entity::student::Model> = entity::prelude::Student::find()
            .filter(entity::student::Column::Uuid.is_in(student_uuids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.uuid.clone(), s))
            .collect();

        let group_ids: Vec<i32> = students.values().map(|s| s.group_id).collect();
        let groups: HashMap<i32, entity::group::Model> = entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let teachers: HashMap<String, entity::teacher::Model> = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Uuid.is_in(teacher_uuids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.uuid.clone(), t))
            .collect();

        let results = debts
            .into_iter()
            .map(|debt| {
                let student = students.get(&debt.student_uuid).cloned();
                let group = student
                    .as_ref()
                    .and_then(|s| groups.get(&s.group_id).cloned());
                DebtWithRelations {
                    exam: exams.get(&debt.exam_id).cloned(),
                    teacher: teachers.get(&debt.teacher_uuid).cloned(),
                    student,
                    group,
                    debt,
                }
            })
            .collect();

        Ok((results, total))
    }

    /// Sets the date and address of a debt.
    ///
    /// # Arguments
    /// - `params` - Debt ID, new date and new address
    ///
    /// # Returns
    /// - `Ok(Debt)` - The updated debt
    /// - `Err(DbErr::RecordNotFound)` - No debt with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn schedule(&self, params: ScheduleDebtParams) -> Result<Debt, DbErr> {
        let debt = entity::prelude::Debt::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Debt with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::debt::ActiveModel = debt.into();
        active_model.date = ActiveValue::Set(Some(params.date));
        active_model.address = ActiveValue::Set(Some(params.address));

        let updated = active_model.update(self.db).await?;

        Ok(Debt::from_entity(updated))
    }
}

//! Find-or-create by natural key.
//!
//! Lookups go through the repositories' `search` and take the first match by
//! primary key. Creates rely on the unique index of each natural key: when an
//! insert loses a race against a concurrent writer, the row is re-read and
//! returned as `Resolved::Existing`.

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::{
        debt::DebtRepository, exam::ExamRepository, group::GroupRepository,
        student::StudentRepository, teacher::TeacherRepository,
    },
    model::{
        debt::{CreateDebtParams, Debt},
        exam::Exam,
        group::Group,
        student::{CreateStudentParams, Student},
        teacher::{CreateTeacherParams, Teacher},
    },
};

/// A row that was either found or inserted by the current call.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Existing(T),
    Created(T),
}

impl<T> Resolved<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Existing(value) | Self::Created(value) => value,
        }
    }
}

/// Natural key of a debt: exam name, student email and teacher email.
#[derive(Debug, Clone, Copy)]
pub struct DebtKey<'k> {
    pub exam_name: &'k str,
    pub student_email: &'k str,
    pub teacher_email: &'k str,
}

pub struct NaturalKeyResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NaturalKeyResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_exam(&self, name: &str) -> Result<Option<Exam>, DbErr> {
        let found = ExamRepository::new(self.db)
            .search(&[name.to_string()])
            .await?;

        Ok(found.into_iter().next())
    }

    pub async fn create_exam(&self, name: &str) -> Result<Resolved<Exam>, DbErr> {
        match ExamRepository::new(self.db).create(name.to_string()).await {
            Ok(exam) => Ok(Resolved::Created(exam)),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(exam = %name, "Exam created concurrently, re-reading");
                self.find_exam(name)
                    .await?
                    .map(Resolved::Existing)
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn find_group(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let found = GroupRepository::new(self.db)
            .search(&[name.to_string()])
            .await?;

        Ok(found.into_iter().next())
    }

    pub async fn create_group(&self, name: &str) -> Result<Resolved<Group>, DbErr> {
        match GroupRepository::new(self.db).create(name.to_string()).await {
            Ok(group) => Ok(Resolved::Created(group)),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(group = %name, "Group created concurrently, re-reading");
                self.find_group(name)
                    .await?
                    .map(Resolved::Existing)
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn find_student(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let found = StudentRepository::new(self.db)
            .search(&[email.to_string()])
            .await?;

        Ok(found.into_iter().next())
    }

    pub async fn create_student(
        &self,
        params: CreateStudentParams,
    ) -> Result<Resolved<Student>, DbErr> {
        let email = params.email.clone();
        match StudentRepository::new(self.db).create(params).await {
            Ok(student) => Ok(Resolved::Created(student)),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(email = %email, "Student created concurrently, re-reading");
                self.find_student(&email)
                    .await?
                    .map(Resolved::Existing)
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn find_teacher(&self, email: &str) -> Result<Option<Teacher>, DbErr> {
        let found = TeacherRepository::new(self.db)
            .search(&[email.to_string()])
            .await?;

        Ok(found.into_iter().next())
    }

    pub async fn create_teacher(
        &self,
        params: CreateTeacherParams,
    ) -> Result<Resolved<Teacher>, DbErr> {
        let email = params.email.clone();
        match TeacherRepository::new(self.db).create(params).await {
            Ok(teacher) => Ok(Resolved::Created(teacher)),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(email = %email, "Teacher created concurrently, re-reading");
                self.find_teacher(&email)
                    .await?
                    .map(Resolved::Existing)
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn find_debt(&self, key: DebtKey<'_>) -> Result<Option<Debt>, DbErr> {
        let found = DebtRepository::new(self.db)
            .search(
                &[key.exam_name.to_string()],
                &[key.student_email.to_string()],
                &[key.teacher_email.to_string()],
            )
            .await?;

        Ok(found.into_iter().next())
    }

    /// Inserts a debt; `key` must describe the same rows as `params` and is used
    /// to re-read the debt after a conflict.
    pub async fn create_debt(
        &self,
        key: DebtKey<'_>,
        params: CreateDebtParams,
    ) -> Result<Resolved<Debt>, DbErr> {
        match DebtRepository::new(self.db).create(params).await {
            Ok(debt) => Ok(Resolved::Created(debt)),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(
                    exam = %key.exam_name,
                    student = %key.student_email,
                    teacher = %key.teacher_email,
                    "Debt created concurrently, re-reading"
                );
                self.find_debt(key).await?.map(Resolved::Existing).ok_or(err)
            }
            Err(err) => Err(err),
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

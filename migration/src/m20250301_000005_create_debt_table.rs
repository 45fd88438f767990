use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_student_table::Student,
    m20250301_000003_create_teacher_table::Teacher, m20250301_000004_create_exam_table::Exam,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Debt::Table)
                    .if_not_exists()
                    .col(pk_auto(Debt::Id))
                    .col(integer(Debt::ExamId))
                    .col(string(Debt::StudentUuid))
                    .col(string(Debt::TeacherUuid))
                    .col(timestamp_with_time_zone_null(Debt::Date))
                    .col(text_null(Debt::Address))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_debt_exam_id")
                            .from(Debt::Table, Debt::ExamId)
                            .to(Exam::Table, Exam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_debt_student_uuid")
                            .from(Debt::Table, Debt::StudentUuid)
                            .to(Student::Table, Student::Uuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_debt_teacher_uuid")
                            .from(Debt::Table, Debt::TeacherUuid)
                            .to(Teacher::Table, Teacher::Uuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One debt per (exam, student, teacher); the natural keys of all three are unique,
        // so this is the same constraint as (exam name, student email, teacher email).
        manager
            .create_index(
                Index::create()
                    .name("idx_debts_exam_student_teacher")
                    .table(Debt::Table)
                    .col(Debt::ExamId)
                    .col(Debt::StudentUuid)
                    .col(Debt::TeacherUuid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Debt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Debt {
    #[sea_orm(iden = "debts")]
    Table,
    Id,
    ExamId,
    StudentUuid,
    TeacherUuid,
    Date,
    Address,
}

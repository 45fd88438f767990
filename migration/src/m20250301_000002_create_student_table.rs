use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Uuid).primary_key())
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string(Student::MiddleName))
                    .col(string_uniq(Student::Email))
                    .col(integer(Student::GroupId))
                    .col(string(Student::Password))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_id")
                            .from(Student::Table, Student::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Uuid,
    FirstName,
    LastName,
    MiddleName,
    Email,
    GroupId,
    Password,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(string(Teacher::Uuid).primary_key())
                    .col(string(Teacher::FirstName))
                    .col(string(Teacher::LastName))
                    .col(string(Teacher::MiddleName))
                    .col(string_uniq(Teacher::Email))
                    .col(string(Teacher::Password))
                    .col(boolean(Teacher::Admin).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    #[sea_orm(iden = "teachers")]
    Table,
    Uuid,
    FirstName,
    LastName,
    MiddleName,
    Email,
    Password,
    Admin,
}

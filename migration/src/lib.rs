pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_group_table;
mod m20250301_000002_create_student_table;
mod m20250301_000003_create_teacher_table;
mod m20250301_000004_create_exam_table;
mod m20250301_000005_create_debt_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_group_table::Migration),
            Box::new(m20250301_000002_create_student_table::Migration),
            Box::new(m20250301_000003_create_teacher_table::Migration),
            Box::new(m20250301_000004_create_exam_table::Migration),
            Box::new(m20250301_000005_create_debt_table::Migration),
        ]
    }
}

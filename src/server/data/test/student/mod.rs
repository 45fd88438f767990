use crate::server::{data::student::StudentRepository, model::student::CreateStudentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod search;

fn params(email: &str, group_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        first_name: "Petr".to_string(),
        last_name: "Ivanov".to_string(),
        middle_name: "Sergeevich".to_string(),
        email: email.to_string(),
        group_id,
        password_hash: "$argon2id$stub".to_string(),
    }
}

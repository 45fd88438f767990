use crate::server::{data::teacher::TeacherRepository, model::teacher::CreateTeacherParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod search;
mod set_password;
mod set_admin;

fn params(email: &str, admin: bool) -> CreateTeacherParams {
    CreateTeacherParams {
        first_name: "Anna".to_string(),
        last_name: "Smirnova".to_string(),
        middle_name: "Viktorovna".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        admin,
    }
}

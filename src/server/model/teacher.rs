//! Teacher domain models and parameters.
//!
//! Teachers are identified by a UUID assigned on creation and deduplicated by email.
//! A teacher with `admin` set may upload rosters and manage every debt.

/// Teacher with identity, admin flag and credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    /// UUID v4 assigned when the teacher was created.
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Natural key used for reconciliation and login.
    pub email: String,
    /// Argon2 PHC hash of the teacher's password.
    pub password_hash: String,
    /// Whether the teacher administers the system.
    pub admin: bool,
}

impl Teacher {
    /// Converts an entity model to a teacher domain model at the repository boundary.
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            uuid: entity.uuid,
            first_name: entity.first_name,
            last_name: entity.last_name,
            middle_name: entity.middle_name,
            email: entity.email,
            password_hash: entity.password,
            admin: entity.admin,
        }
    }

    /// Full name in `Last First Middle` order, as written in rosters.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }
}

/// Parameters for creating a teacher.
#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    /// Argon2 PHC hash; never the plaintext.
    pub password_hash: String,
    pub admin: bool,
}

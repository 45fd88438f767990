//! Student domain models and parameters.
//!
//! Students are identified by a UUID assigned on creation and deduplicated by email.
//! The stored password is always an Argon2 PHC string.

/// Student with identity, group membership and credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// UUID v4 assigned when the student was created.
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Natural key used for reconciliation and login.
    pub email: String,
    pub group_id: i32,
    /// Argon2 PHC hash of the student's password.
    pub password_hash: String,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - The converted student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            uuid: entity.uuid,
            first_name: entity.first_name,
            last_name: entity.last_name,
            middle_name: entity.middle_name,
            email: entity.email,
            group_id: entity.group_id,
            password_hash: entity.password,
        }
    }

    /// Full name in `Last First Middle` order, as written in rosters.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }
}

/// Parameters for creating a student.
///
/// The password must already be hashed; plaintext never reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    pub group_id: i32,
    pub password_hash: String,
}

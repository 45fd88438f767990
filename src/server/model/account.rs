//! Logged-in account models.
//!
//! Students and teachers live in separate tables but share one login. An `Account`
//! is the common view of either, carrying the role used for access control.

use serde::{Deserialize, Serialize};

use crate::{
    model::user::{RoleDto, UserDto},
    server::model::{student::Student, teacher::Teacher},
};

/// Which table an account lives in. Stored in the session next to the UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Student,
    Teacher,
}

/// Access level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Teacher with the admin flag set.
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::Admin => RoleDto::Admin,
            Self::Teacher => RoleDto::Teacher,
            Self::Student => RoleDto::Student,
        }
    }
}

/// Account stored in the session after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAccount {
    pub kind: AccountKind,
    pub uuid: String,
}

/// Authenticated student or teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub uuid: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Account {
    pub fn from_teacher(teacher: Teacher) -> Self {
        Self {
            name: teacher.full_name(),
            role: if teacher.admin {
                Role::Admin
            } else {
                Role::Teacher
            },
            uuid: teacher.uuid,
            email: teacher.email,
        }
    }

    pub fn from_student(student: Student) -> Self {
        Self {
            name: student.full_name(),
            role: Role::Student,
            uuid: student.uuid,
            email: student.email,
        }
    }

    /// Session representation of this account.
    pub fn session_account(&self) -> SessionAccount {
        SessionAccount {
            kind: match self.role {
                Role::Student => AccountKind::Student,
                Role::Admin | Role::Teacher => AccountKind::Teacher,
            },
            uuid: self.uuid.clone(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            uuid: self.uuid,
            email: self.email,
            name: self.name,
            role: self.role.into_dto(),
        }
    }
}

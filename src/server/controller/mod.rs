//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into parameters, call a
//! service and convert the result back into a DTO.

pub mod auth;
pub mod catalog;
pub mod debt;
pub mod roster;

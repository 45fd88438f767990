//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod account;
pub mod debt;
pub mod exam;
pub mod group;
pub mod roster;
pub mod student;
pub mod teacher;

/// Computes the number of pages needed for `total` items.
///
/// Returns 0 when `per_page` is 0 rather than dividing by zero.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}

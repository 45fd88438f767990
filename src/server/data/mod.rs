//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so it accepts either the pooled
//! `DatabaseConnection` or a `DatabaseTransaction`.

pub mod debt;
pub mod exam;
pub mod group;
pub mod student;
pub mod teacher;

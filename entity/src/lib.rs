//! SeaORM entity models for the debt tracking schema.
//!
//! Tables mirror the migrations in the `migration` crate. Natural keys (group and
//! exam names, student and teacher emails) are declared `unique` so schemas built
//! directly from these entities in tests carry the same constraints as production.

pub mod prelude;

pub mod debt;
pub mod exam;
pub mod group;
pub mod student;
pub mod teacher;

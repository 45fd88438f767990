//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder for customization and a
//! `create_*` shorthand for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let group = factory::create_group(&db).await?;
//!     let student = factory::create_student(&db, group.id).await?;
//!
//!     let (group, student, teacher, exam, debt) =
//!         factory::helpers::create_debt_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let teacher = factory::teacher::TeacherFactory::new(&db)
//!     .email("smirnova@uni.example")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod debt;
pub mod exam;
pub mod group;
pub mod helpers;
pub mod student;
pub mod teacher;

pub use debt::create_debt;
pub use exam::create_exam;
pub use group::create_group;
pub use student::create_student;
pub use teacher::create_teacher;

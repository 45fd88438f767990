//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Password column value used by factories; tests never need a real hash.
pub const DEFAULT_PASSWORD_HASH: &str = "$argon2id$v=19$m=8,t=1,p=1$dGVzdHNhbHQ$dGVzdGhhc2g";

/// Counter for generating unique natural keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a debt with every row it references.
///
/// Creates, in order:
/// 1. Group
/// 2. Student in that group
/// 3. Teacher
/// 4. Exam
/// 5. Debt linking the exam, student and teacher
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((group, student, teacher, exam, debt))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_debt_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::group::Model,
        entity::student::Model,
        entity::teacher::Model,
        entity::exam::Model,
        entity::debt::Model,
    ),
    DbErr,
> {
    let group = crate::factory::group::create_group(db).await?;
    let student = crate::factory::student::create_student(db, group.id).await?;
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let exam = crate::factory::exam::create_exam(db).await?;
    let debt = crate::factory::debt::create_debt(db, exam.id, &student.uuid, &teacher.uuid).await?;

    Ok((group, student, teacher, exam, debt))
}

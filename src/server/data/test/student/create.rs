use super::*;

/// Tests creating a new student.
///
/// Verifies that all fields are stored and a UUID is assigned.
///
/// Expected: Ok with student holding the given fields and a parseable UUID
#[tokio::test]
async fn creates_student_with_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(params("petrov@mail.com", group.id)).await?;

    assert!(uuid::Uuid::parse_str(&student.uuid).is_ok());
    assert_eq!(student.email, "petrov@mail.com");
    assert_eq!(student.last_name, "Ivanov");
    assert_eq!(student.group_id, group.id);
    assert_eq!(student.password_hash, "$argon2id$stub");

    Ok(())
}

/// Tests creating a student whose email is taken.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group(db).await?;
    factory::student::create_student_with_email(db, group.id, "petrov@mail.com").await?;

    let repo = StudentRepository::new(db);
    let result = repo.create(params("petrov@mail.com", group.id)).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

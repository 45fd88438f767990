use super::*;

/// Tests creating a new teacher.
///
/// Expected: Ok with teacher holding the given fields and admin unset
#[tokio::test]
async fn creates_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let teacher = repo.create(params("anna@mail.com", false)).await?;

    assert!(uuid::Uuid::parse_str(&teacher.uuid).is_ok());
    assert_eq!(teacher.email, "anna@mail.com");
    assert_eq!(teacher.full_name(), "Smirnova Anna Viktorovna");
    assert!(!teacher.admin);

    Ok(())
}

/// Tests creating a teacher whose email is taken.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    repo.create(params("anna@mail.com", false)).await?;
    let result = repo.create(params("anna@mail.com", true)).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

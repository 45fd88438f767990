use super::*;

/// Tests loading a student by email and by UUID.
///
/// Expected: Ok(Some) for both lookups returning the same student
#[tokio::test]
async fn finds_student_by_email_and_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group(db).await?;
    let created =
        factory::student::create_student_with_email(db, group.id, "petrov@mail.com").await?;

    let repo = StudentRepository::new(db);
    let by_email = repo.find_by_email("petrov@mail.com").await?;
    let by_uuid = repo.get_by_uuid(&created.uuid).await?;

    assert!(by_email.is_some());
    assert_eq!(by_email, by_uuid);
    assert_eq!(by_email.unwrap().uuid, created.uuid);

    Ok(())
}

/// Tests loading a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.find_by_email("nobody@mail.com").await?;

    assert!(result.is_none());

    Ok(())
}

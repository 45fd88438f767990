use super::*;

/// Tests finding students by email.
///
/// Expected: Ok with only the student whose email matches
#[tokio::test]
async fn finds_student_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group(db).await?;
    let student =
        factory::student::create_student_with_email(db, group.id, "petrov@mail.com").await?;
    factory::student::create_student(db, group.id).await?;

    let repo = StudentRepository::new(db);
    let result = repo.search(&["petrov@mail.com".to_string()]).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].uuid, student.uuid);

    Ok(())
}

/// Tests searching for an unknown email.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.search(&["nobody@mail.com".to_string()]).await?;

    assert!(result.is_empty());

    Ok(())
}

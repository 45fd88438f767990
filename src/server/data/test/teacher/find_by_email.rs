use super::*;

/// Tests loading a teacher by email and by UUID.
///
/// Expected: Ok(Some) for both lookups returning the same teacher
#[tokio::test]
async fn finds_teacher_by_email_and_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::teacher::TeacherFactory::new(db)
        .email("anna@mail.com")
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    let by_email = repo.find_by_email("anna@mail.com").await?;
    let by_uuid = repo.get_by_uuid(&created.uuid).await?;

    assert!(by_email.is_some());
    assert_eq!(by_email, by_uuid);

    Ok(())
}

/// Tests loading a teacher by an unknown UUID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let result = repo.get_by_uuid("00000000-0000-0000-0000-000000000000").await?;

    assert!(result.is_none());

    Ok(())
}

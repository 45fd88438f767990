use super::*;

/// Tests promoting a teacher to admin.
///
/// Expected: Ok with admin set and the change persisted
#[tokio::test]
async fn promotes_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::teacher::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let updated = repo.set_admin(&teacher.uuid).await?;

    assert!(updated.admin);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests promoting a teacher that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let result = repo.set_admin("missing").await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

use super::*;

/// Tests admin check with no teachers.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin check with only regular teachers.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::teacher::create_teacher(db).await?;
    factory::teacher::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin check once an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::teacher::create_teacher(db).await?;
    factory::teacher::create_admin(db).await?;

    let repo = TeacherRepository::new(db);

    assert!(repo.admin_exists().await?);

    Ok(())
}

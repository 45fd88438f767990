use super::*;

/// Tests creating an exam and reading it back through search.
///
/// Expected: Ok with the created exam visible to search
#[tokio::test]
async fn creates_exam() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExamRepository::new(db);
    let exam = repo.create("Calculus".to_string()).await?;
    let found = repo.search(&["Calculus".to_string()]).await?;

    assert_eq!(found, vec![exam]);

    Ok(())
}

/// Tests creating an exam with a name that already exists.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::exam::create_exam_named(db, "Calculus").await?;

    let repo = ExamRepository::new(db);
    let result = repo.create("Calculus".to_string()).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

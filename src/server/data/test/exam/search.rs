use super::*;

/// Tests finding an exam by exact name.
///
/// Expected: Ok with one matching exam
#[tokio::test]
async fn finds_exam_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let exam = factory::exam::create_exam_named(db, "Calculus").await?;
    factory::exam::create_exam_named(db, "Algebra").await?;

    let repo = ExamRepository::new(db);
    let result = repo.search(&["Calculus".to_string()]).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, exam.id);

    Ok(())
}

/// Tests that exam name matching is exact.
///
/// A differently cased name is a different natural key.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn does_not_match_different_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::exam::create_exam_named(db, "Calculus").await?;

    let repo = ExamRepository::new(db);
    let result = repo.search(&["calculus".to_string()]).await?;

    assert!(result.is_empty());

    Ok(())
}

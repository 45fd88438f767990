use super::*;

/// Tests finding a debt by its natural key triple.
///
/// Expected: Ok with the single debt matching exam name, student email and teacher email
#[tokio::test]
async fn finds_debt_by_triple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, teacher, exam, debt) =
        factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let result = repo
        .search(&[exam.name], &[student.email], &[teacher.email])
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, debt.id);

    Ok(())
}

/// Tests that every element of the triple must match.
///
/// A debt with the same exam and student but a different teacher is a different
/// debt.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn does_not_match_other_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, _, exam, _) = factory::helpers::create_debt_with_dependencies(db).await?;
    let other_teacher = factory::teacher::create_teacher(db).await?;

    let repo = DebtRepository::new(db);
    let result = repo
        .search(&[exam.name], &[student.email], &[other_teacher.email])
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests searching with an empty slice.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, teacher, _, _) = factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let result = repo.search(&[], &[student.email], &[teacher.email]).await?;

    assert!(result.is_empty());

    Ok(())
}

use super::*;

/// Tests listing all debts with their related rows.
///
/// Expected: Ok with both debts enriched with exam, student, group and teacher
#[tokio::test]
async fn lists_all_debts_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, student, teacher, exam, debt) =
        factory::helpers::create_debt_with_dependencies(db).await?;
    factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let (debts, total) = repo.get_paginated(&DebtFilter::All, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(debts.len(), 2);

    let first = &debts[0];
    assert_eq!(first.debt.id, debt.id);
    assert_eq!(first.exam.as_ref().map(|e| e.id), Some(exam.id));
    assert_eq!(first.student.as_ref().map(|s| &s.uuid), Some(&student.uuid));
    assert_eq!(first.group.as_ref().map(|g| g.id), Some(group.id));
    assert_eq!(first.teacher.as_ref().map(|t| &t.uuid), Some(&teacher.uuid));

    Ok(())
}

/// Tests filtering debts by teacher.
///
/// Expected: Ok with only the debts owed to that teacher
#[tokio::test]
async fn filters_by_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, teacher, _, debt) = factory::helpers::create_debt_with_dependencies(db).await?;
    factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let (debts, total) = repo
        .get_paginated(&DebtFilter::Teacher(teacher.uuid), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(debts[0].debt.id, debt.id);

    Ok(())
}

/// Tests filtering debts by student.
///
/// Expected: Ok with only the debts owed by that student
#[tokio::test]
async fn filters_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_debt_with_dependencies(db).await?;
    let (_, student, _, _, debt) = factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let (debts, total) = repo
        .get_paginated(&DebtFilter::Student(student.uuid), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(debts[0].debt.id, debt.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let (debts, total) = repo.get_paginated(&DebtFilter::All, 5, 10).await?;

    assert!(debts.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

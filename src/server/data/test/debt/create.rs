use super::*;

/// Tests creating a debt with a date.
///
/// Expected: Ok with debt referencing the given rows and no address
#[tokio::test]
async fn creates_debt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group(db).await?;
    let student = factory::student::create_student(db, group.id).await?;
    let teacher = factory::teacher::create_teacher(db).await?;
    let exam = factory::exam::create_exam(db).await?;
    let now = chrono::Utc::now();

    let repo = DebtRepository::new(db);
    let debt = repo
        .create(CreateDebtParams {
            exam_id: exam.id,
            student_uuid: student.uuid.clone(),
            teacher_uuid: teacher.uuid.clone(),
            date: Some(now),
        })
        .await?;

    assert_eq!(debt.exam_id, exam.id);
    assert_eq!(debt.student_uuid, student.uuid);
    assert_eq!(debt.teacher_uuid, teacher.uuid);
    assert!(debt.date.is_some());
    assert!(debt.address.is_none());

    Ok(())
}

/// Tests loading a debt by ID.
///
/// Expected: Ok(Some) for the created debt and Ok(None) for an unknown ID
#[tokio::test]
async fn gets_debt_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, debt) = factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);

    assert_eq!(repo.get_by_id(debt.id).await?.map(|d| d.id), Some(debt.id));
    assert!(repo.get_by_id(debt.id + 100).await?.is_none());

    Ok(())
}

/// Tests loading a debt together with the rows it references.
///
/// Expected: Ok(Some) with exam, student, group and teacher filled in
#[tokio::test]
async fn gets_debt_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, student, teacher, exam, debt) =
        factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let loaded = repo.get_with_relations(debt.id).await?.unwrap();

    assert_eq!(loaded.debt.id, debt.id);
    assert_eq!(loaded.exam.map(|e| e.id), Some(exam.id));
    assert_eq!(loaded.student.map(|s| s.uuid), Some(student.uuid));
    assert_eq!(loaded.group.map(|g| g.id), Some(group.id));
    assert_eq!(loaded.teacher.map(|t| t.uuid), Some(teacher.uuid));
    assert!(repo.get_with_relations(debt.id + 100).await?.is_none());

    Ok(())
}

/// Tests creating a second debt for the same exam, student and teacher.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation and one stored debt
#[tokio::test]
async fn fails_on_duplicate_triple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, teacher, exam, _) =
        factory::helpers::create_debt_with_dependencies(db).await?;

    let repo = DebtRepository::new(db);
    let result = repo
        .create(CreateDebtParams {
            exam_id: exam.id,
            student_uuid: student.uuid.clone(),
            teacher_uuid: teacher.uuid.clone(),
            date: None,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(
        repo.search(
            &[exam.name.clone()],
            &[student.email.clone()],
            &[teacher.email.clone()]
        )
        .await?
        .len(),
        1
    );

    Ok(())
}

use super::*;

/// Tests scheduling a debt.
///
/// Expected: Ok with date and address stored
#[tokio::test]
async fn sets_date_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, debt) = factory::helpers::create_debt_with_dependencies(db).await?;
    let date = chrono::Utc::now() + chrono::Duration::days(3);

    let repo = DebtRepository::new(db);
    repo.schedule(ScheduleDebtParams {
        id: debt.id,
        date,
        address: "Room 301".to_string(),
    })
    .await?;

    let stored = repo.get_by_id(debt.id).await?.unwrap();
    assert_eq!(stored.address.as_deref(), Some("Room 301"));
    assert_eq!(stored.date.map(|d| d.timestamp()), Some(date.timestamp()));

    Ok(())
}

/// Tests scheduling a debt that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_debt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DebtRepository::new(db);
    let result = repo
        .schedule(ScheduleDebtParams {
            id: 42,
            date: chrono::Utc::now(),
            address: "Room 301".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

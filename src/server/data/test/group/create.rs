use super::*;

/// Tests creating a new group.
///
/// Expected: Ok with group holding the given name and a generated ID
#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create("Group101".to_string()).await?;

    assert_eq!(group.name, "Group101");
    assert!(group.id > 0);

    Ok(())
}

/// Tests creating a group whose name already exists.
///
/// Verifies the unique constraint on the name is enforced and reported as a
/// unique violation so callers can fall back to re-reading.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create("Group101".to_string()).await?;
    let result = repo.create("Group101".to_string()).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

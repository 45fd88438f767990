use super::*;

/// Tests finding a group by exact name.
///
/// Verifies that search returns the single group whose name matches and ignores
/// other groups.
///
/// Expected: Ok with one matching group
#[tokio::test]
async fn finds_group_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::create_group_named(db, "Group101").await?;
    factory::group::create_group_named(db, "Group102").await?;

    let repo = GroupRepository::new(db);
    let result = repo.search(&["Group101".to_string()]).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, group.id);
    assert_eq!(result[0].name, "Group101");

    Ok(())
}

/// Tests searching for a name that does not exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::create_group_named(db, "Group101").await?;

    let repo = GroupRepository::new(db);
    let result = repo.search(&["Group999".to_string()]).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests searching with several names.
///
/// Verifies that every matching group is returned in ID order.
///
/// Expected: Ok with both groups, oldest first
#[tokio::test]
async fn returns_matches_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::group::create_group_named(db, "B").await?;
    let second = factory::group::create_group_named(db, "A").await?;

    let repo = GroupRepository::new(db);
    let result = repo.search(&["A".to_string(), "B".to_string()]).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, first.id);
    assert_eq!(result[1].id, second.id);

    Ok(())
}

/// Tests searching with no names.
///
/// Expected: Ok with empty vector without querying
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let result = repo.search(&[]).await?;

    assert!(result.is_empty());

    Ok(())
}

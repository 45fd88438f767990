use super::*;

/// Tests paginating groups.
///
/// Verifies that groups are ordered by name and the total reflects all groups.
///
/// Expected: Ok with first page of two groups and total of three
#[tokio::test]
async fn returns_page_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::create_group_named(db, "C").await?;
    factory::group::create_group_named(db, "A").await?;
    factory::group::create_group_named(db, "B").await?;

    let repo = GroupRepository::new(db);
    let (groups, total) = repo.get_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "A");
    assert_eq!(groups[1].name, "B");

    let (groups, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "C");

    Ok(())
}

use super::*;

/// Tests replacing a teacher's password hash.
///
/// Expected: Ok with the new hash stored and the admin flag kept
#[tokio::test]
async fn replaces_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::teacher::create_admin(db).await?;

    let repo = TeacherRepository::new(db);
    let updated = repo
        .set_password(&teacher.uuid, "$argon2id$new".to_string())
        .await?;

    assert_eq!(updated.password_hash, "$argon2id$new");
    assert!(updated.admin);
    assert_eq!(
        repo.get_by_uuid(&teacher.uuid).await?.unwrap().password_hash,
        "$argon2id$new"
    );

    Ok(())
}

/// Tests replacing the password of a teacher that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherRepository::new(db)
        .set_password("missing", "$argon2id$new".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

use super::*;

mod require_admin;
mod require_teacher;

/// Tests a request without a logged-in account.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_missing_session_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at an account that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale UUID
#[tokio::test]
async fn denies_deleted_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_account(SessionAccount {
            kind: AccountKind::Teacher,
            uuid: "missing-uuid".to_string(),
        })
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(uuid))) => {
            assert_eq!(uuid, "missing-uuid");
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests empty permission list grants access to a student.
///
/// Expected: Ok(Account) with the Student role
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let group = factory::group::create_group(db).await?;
    let student = factory::student::create_student(db, group.id).await?;

    AuthSession::new(session)
        .set_account(SessionAccount {
            kind: AccountKind::Student,
            uuid: student.uuid.clone(),
        })
        .await?;

    let account = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(account.uuid, student.uuid);
    assert_eq!(account.email, student.email);
    assert_eq!(account.role, Role::Student);

    Ok(())
}

/// Tests an admin passes every permission at once.
///
/// Expected: Ok(Account) with the Admin role
#[tokio::test]
async fn admin_passes_multiple_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::teacher::create_admin(db).await?;

    AuthSession::new(session)
        .set_account(SessionAccount {
            kind: AccountKind::Teacher,
            uuid: admin.uuid.clone(),
        })
        .await?;

    let account = AuthGuard::new(db, session)
        .require(&[Permission::Teacher, Permission::Admin])
        .await?;

    assert_eq!(account.uuid, admin.uuid);
    assert_eq!(account.role, Role::Admin);

    Ok(())
}

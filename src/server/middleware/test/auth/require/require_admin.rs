use super::*;

/// Tests admin teacher successfully passes admin permission check.
///
/// Expected: Ok(Account) with the Admin role
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::teacher::TeacherFactory::new(db)
        .email("admin@mail.com")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session)
        .set_account(SessionAccount {
            kind: AccountKind::Teacher,
            uuid: admin.uuid.clone(),
        })
        .await?;

    let account = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(account.email, "admin@mail.com");
    assert_eq!(account.role, Role::Admin);

    Ok(())
}

/// Tests plain teacher is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the teacher
#[tokio::test]
async fn denies_access_to_plain_teacher() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_people_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::teacher::create_teacher(db).await?;

    AuthSession::new(session)
        .set_account(SessionAccount {
            kind: AccountKind::Teacher,
            uuid: teacher.uuid.clone(),
        })
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(uuid, message))) => {
            assert_eq!(uuid, teacher.uuid);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests a student is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_student() -> Result<(), AppError> {
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

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

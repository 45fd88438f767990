use super::*;

/// Tests a plain teacher passes the teacher permission check.
///
/// Expected: Ok(Account) with the Teacher role
#[tokio::test]
async fn grants_access_to_teacher() -> Result<(), AppError> {
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

    let account = AuthGuard::new(db, session)
        .require(&[Permission::Teacher])
        .await?;

    assert_eq!(account.uuid, teacher.uuid);
    assert_eq!(account.role, Role::Teacher);

    Ok(())
}

/// Tests a student is denied the teacher permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the student
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
        .require(&[Permission::Teacher])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(uuid, _))) => {
            assert_eq!(uuid, student.uuid);
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

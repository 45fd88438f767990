use super::*;

/// Tests finding teachers by email.
///
/// Expected: Ok with only the matching teacher
#[tokio::test]
async fn finds_teacher_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::teacher::TeacherFactory::new(db)
        .email("anna@mail.com")
        .build()
        .await?;
    factory::teacher::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let result = repo.search(&["anna@mail.com".to_string()]).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].uuid, teacher.uuid);

    Ok(())
}

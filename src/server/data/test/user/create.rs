use super::*;

/// Tests inserting a user with a pre-hashed password.
///
/// Expected: Ok with the stored email and role
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("admin@bloghok.com", "hash".to_string(), "admin")
        .await?;

    assert_eq!(user.email, "admin@bloghok.com");
    assert!(user.is_admin());
    assert!(repo.email_exists("admin@bloghok.com").await?);

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_admin(db).await?;
    let repo = UserRepository::new(db);
    let result = repo.create(&existing.email, "hash".to_string(), "admin").await;

    assert!(result.is_err());

    Ok(())
}

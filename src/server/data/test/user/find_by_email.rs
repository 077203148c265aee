use super::*;

/// Tests finding a user together with the password hash.
///
/// Expected: Ok(Some) with the hash written by the factory
#[tokio::test]
async fn finds_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let found = UserRepository::new(db)
        .find_by_email(&admin.email)
        .await?
        .unwrap();

    assert_eq!(found.user.id, admin.id);
    assert_eq!(found.password_hash, admin.password_hash);

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@bloghok.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the token is valid, names an
/// existing user, and that user has the admin role.
///
/// Expected: Ok(AuthenticatedUser) carrying the user and the raw token
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let admin = factory::create_admin(db).await?;
    let token = tokens.sign(&claims_for(admin.id, "admin", 3600)).unwrap();
    let headers = bearer(&token);

    let authenticated = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(authenticated.user.id, admin.id);
    assert_eq!(authenticated.token, token);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the token is valid and the
/// user exists but lacks the admin role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let user = factory::create_user(db).await?;
    let token = tokens.sign(&claims_for(user.id, "user", 3600)).unwrap();
    let headers = bearer(&token);

    let err = expect_auth_error(AuthGuard::new(db, &tokens, &headers)).await;

    assert!(matches!(err, AuthError::AccessDenied(id) if id == user.id));

    Ok(())
}

/// Tests a valid token naming a user that no longer exists.
///
/// Verifies that the AuthGuard looks the user up on every request rather than
/// trusting the claims.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn denies_access_to_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let token = tokens.sign(&claims_for(999, "admin", 3600)).unwrap();
    let headers = bearer(&token);

    let err = expect_auth_error(AuthGuard::new(db, &tokens, &headers)).await;

    assert!(matches!(err, AuthError::UserNotFound(999)));

    Ok(())
}

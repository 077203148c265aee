use super::*;

/// Tests requests without a usable Authorization header.
///
/// Verifies that a missing header or a non-Bearer scheme is reported as a
/// missing token, and a Bearer prefix with nothing after it as a bad format.
///
/// Expected: Err(AuthError::MissingToken) or Err(AuthError::InvalidTokenFormat)
#[tokio::test]
async fn rejects_missing_or_empty_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let empty = HeaderMap::new();
    let err = expect_auth_error(AuthGuard::new(db, &tokens, &empty)).await;
    assert!(matches!(err, AuthError::MissingToken));

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    let err = expect_auth_error(AuthGuard::new(db, &tokens, &basic)).await;
    assert!(matches!(err, AuthError::MissingToken));

    let mut blank = HeaderMap::new();
    blank.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
    let err = expect_auth_error(AuthGuard::new(db, &tokens, &blank)).await;
    assert!(matches!(err, AuthError::InvalidTokenFormat));

    Ok(())
}

/// Tests a token whose expiry has passed.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let admin = factory::create_admin(db).await?;
    let token = tokens.sign(&claims_for(admin.id, "admin", -60)).unwrap();
    let headers = bearer(&token);

    let err = expect_auth_error(AuthGuard::new(db, &tokens, &headers)).await;

    assert!(matches!(err, AuthError::TokenExpired));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let foreign = TokenService::new("other-secret", chrono::Duration::hours(1));
    let token = foreign.sign(&claims_for(admin.id, "admin", 3600)).unwrap();
    let headers = bearer(&token);
    let tokens = tokens();

    let err = expect_auth_error(AuthGuard::new(db, &tokens, &headers)).await;

    assert!(matches!(err, AuthError::InvalidToken));

    Ok(())
}

/// Tests a still-valid token after logout.
///
/// Verifies that revocation wins over a good signature and expiry.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let admin = factory::create_admin(db).await?;
    let claims = claims_for(admin.id, "admin", 3600);
    let token = tokens.sign(&claims).unwrap();
    tokens.revoke(&token, claims.exp).await;
    let headers = bearer(&token);

    let err = expect_auth_error(AuthGuard::new(db, &tokens, &headers)).await;

    assert!(matches!(err, AuthError::TokenRevoked));

    Ok(())
}

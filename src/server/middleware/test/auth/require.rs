use super::*;

mod require_admin;
mod require_token;

/// Tests an empty permission list.
///
/// Verifies that a valid token for an existing user passes the guard when no
/// permission is required, regardless of the user's role.
///
/// Expected: Ok(AuthenticatedUser) for a non-admin user
#[tokio::test]
async fn passes_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let user = factory::create_user(db).await?;
    let token = tokens.sign(&claims_for(user.id, "user", 3600)).unwrap();
    let headers = bearer(&token);

    let authenticated = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(authenticated.user.id, user.id);
    assert_eq!(authenticated.claims.id, user.id);

    Ok(())
}

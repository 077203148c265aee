//! Credential login, admin registration and logout.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, is_unique_violation, AppError},
    model::user::{Credentials, User, ADMIN_ROLE},
    service::token::{Claims, TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database, hashing or signing failure
    pub async fn login(&self, credentials: Credentials) -> Result<(String, User), AppError> {
        let Some(found) = UserRepository::new(self.db)
            .find_by_email(&credentials.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = credentials.password;
        let hash = found.password_hash;
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(AuthError::from)?
            .map_err(AuthError::from)?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&found.user)?;
        tracing::info!("User {} logged in", found.user.id);

        Ok((token, found.user))
    }

    /// Creates an admin account.
    ///
    /// # Arguments
    /// - `credentials` - Validated email and password
    /// - `cost` - bcrypt work factor
    /// - `allow_registration` - Whether registration is enabled
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin
    /// - `Err(AppError::AuthErr(RegistrationDisabled))` - Registration turned off
    /// - `Err(AppError::AuthErr(EmailExists))` - Email already registered
    pub async fn register(
        &self,
        credentials: Credentials,
        cost: u32,
        allow_registration: bool,
    ) -> Result<User, AppError> {
        if !allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        let repo = UserRepository::new(self.db);
        if repo.email_exists(&credentials.email).await? {
            return Err(AuthError::EmailExists.into());
        }

        let password = credentials.password;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(AuthError::from)?
            .map_err(AuthError::from)?;

        let user = repo
            .create(&credentials.email, hash, ADMIN_ROLE)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::from(AuthError::EmailExists)
                } else {
                    AppError::DbErr(e)
                }
            })?;
        tracing::info!("Registered admin {}", user.id);

        Ok(user)
    }

    /// Revokes the presented token until it expires.
    pub async fn logout(&self, token: &str, claims: &Claims) {
        self.tokens.revoke(token, claims.exp).await;
        tracing::debug!("Revoked token for user {}", claims.id);
    }
}

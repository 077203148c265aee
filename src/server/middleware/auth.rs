use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::{Claims, TokenService},
};

pub enum Permission {
    Admin,
}

/// User that passed the guard together with the token it presented.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
    pub claims: Claims,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the bearer token and checks every requested permission.
    ///
    /// Checks run in a fixed order: header present, token not empty, token not revoked,
    /// signature and expiry, user still exists, then permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - User, raw token and its claims
    /// - `Err(AppError::AuthErr)` - The first failed check
    /// - `Err(AppError::DbErr)` - Database error looking up the user
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let token = self.bearer_token()?;

        if self.tokens.is_revoked(token).await {
            return Err(AuthError::TokenRevoked.into());
        }

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotFound(claims.id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(user.id).into());
                    }
                }
            }
        }

        Ok(AuthenticatedUser {
            user,
            token: token.to_string(),
            claims,
        })
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        else {
            return Err(AuthError::MissingToken);
        };

        let Some(token) = value.strip_prefix("Bearer ") else {
            return Err(AuthError::MissingToken);
        };

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::InvalidTokenFormat);
        }

        Ok(token)
    }
}


//! Bearer token issuing, verification and revocation.
//!
//! Tokens are HS256 JWTs carrying the user id and role. Logging out revokes a token by
//! adding it to an in-memory list until the token's own expiry; the hourly maintenance
//! job purges entries whose expiry has passed.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::server::{error::auth::AuthError, model::user::User};

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub id: i32,
    pub role: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and checks bearer tokens and tracks revoked ones.
///
/// Cloning shares the revoked list, so every clone held in application state sees the
/// same logouts.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expires_in: chrono::Duration,
    /// Revoked token to its `exp`.
    revoked: Arc<RwLock<HashMap<String, i64>>>,
}

impl TokenService {
    /// Creates a token service signing with `secret`.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret from `JWT_SECRET`
    /// - `expires_in` - Lifetime of issued tokens
    pub fn new(secret: &str, expires_in: chrono::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expires_in,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a token for `user` that expires after the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();

        self.sign(&Claims {
            id: user.id,
            role: user.role.clone(),
            iat,
            exp: iat + self.expires_in.num_seconds(),
        })
    }

    /// Signs arbitrary claims with the service key.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Verifies the signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Token was valid but its `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Any other signature or claim failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Revokes `token` until `exp`.
    pub async fn revoke(&self, token: &str, exp: i64) {
        self.revoked.write().await.insert(token.to_string(), exp);
    }

    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().await.contains_key(token)
    }

    pub async fn revoked_count(&self) -> usize {
        self.revoked.read().await.len()
    }

    /// Drops revoked entries whose token has expired on its own.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now().timestamp();
        let mut revoked = self.revoked.write().await;
        let before = revoked.len();
        revoked.retain(|_, exp| *exp > now);
        before - revoked.len()
    }
}

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;
use entity::prelude::*;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission},
    service::token::{Claims, TokenService},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", chrono::Duration::hours(1))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn claims_for(id: i32, role: &str, exp_offset: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        id,
        role: role.to_string(),
        iat: now,
        exp: now + exp_offset,
    }
}

async fn expect_auth_error(guard: AuthGuard<'_>) -> AuthError {
    match guard.require(&[Permission::Admin]).await {
        Err(AppError::AuthErr(err)) => err,
        Err(other) => panic!("expected auth error, got {other:?}"),
        Ok(_) => panic!("expected auth error, guard passed"),
    }
}

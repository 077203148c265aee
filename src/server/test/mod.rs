//! Router-level tests driving the full application with `oneshot` requests.

mod hero;
mod server;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{config::Config, model::user::User, router::router, state::AppState};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _context: TestContext,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Builds the router over an in-memory database holding every table.
    pub async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        let config = Config::for_test();
        let state = AppState::new(db, reqwest::Client::new(), &config).unwrap();

        Self {
            router: router(state.clone(), &config),
            state,
            _context: context,
        }
    }

    /// Creates an admin through the factory and issues a token for it.
    pub async fn admin_token(&self) -> String {
        let admin = factory::create_admin(&self.state.db).await.unwrap();
        self.state.tokens.issue(&User::from_entity(admin)).unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Collects the `details` array of a validation error body.
pub fn details(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|d| d.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

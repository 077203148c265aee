use axum::http::{
    header::{X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
    Method, StatusCode,
};

use super::TestApp;

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/api/unknown").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Route not found");
}

/// Tests the health, liveness and readiness endpoints against a live database.
///
/// Expected: 200 everywhere with the database reported healthy
#[tokio::test]
async fn reports_health() {
    let app = TestApp::new().await;

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["checks"]["database"]["status"], "healthy");
    assert_eq!(health.body["checks"]["memory"]["thresholdMb"], 512);
    assert!(health.body["checks"]["disk"]["status"].is_string());
    assert_eq!(health.body["version"], "1.0.0");

    assert_eq!(app.get("/health/live").await.body["status"], "alive");
    assert_eq!(app.get("/health/ready").await.body["status"], "ready");
}

#[tokio::test]
async fn sets_security_headers() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "BlogHok API Server");
    assert_eq!(response.headers[X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers[X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let response = app.get("/api/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/api/heroes"].is_object());
    assert!(response.body["paths"]["/health/detailed"].is_object());
    assert!(response.body["paths"]["/health/metrics"].is_object());
}

/// Tests the detailed health report.
///
/// Expected: 200 with process info and the migrated tables listed
#[tokio::test]
async fn reports_detailed_health() {
    let app = TestApp::new().await;

    let response = app.get("/health/detailed").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"]["status"], "healthy");
    assert_eq!(response.body["system"]["pid"], std::process::id());
    assert_eq!(response.body["system"]["platform"], std::env::consts::OS);
    let tables: Vec<&str> = response.body["database"]["tables"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert!(tables.contains(&"hero"));
    assert!(tables.contains(&"news"));
    assert!(response.body["checks"]["memory"].is_object());
}

/// Tests the metrics endpoint after a logout and a rate limited request.
///
/// Expected: 200 with the revoked token and the tracked client counted
#[tokio::test]
async fn reports_metrics() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.send(Method::POST, "/api/auth/logout", Some(&token), None)
        .await;

    let response = app.get("/health/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["revokedTokens"], 1);
    assert!(response.body["rateLimitedClients"].as_u64().unwrap() >= 1);
    assert!(response.body["cpu"]["cores"].as_u64().unwrap() >= 1);
    assert!(response.body["uptimeSeconds"].is_u64());
}

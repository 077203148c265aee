use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use test_utils::factory::{self, hero::HeroFactory};

use super::{details, TestApp};

fn hero_payload(name: &str) -> Value {
    json!({
        "name": name,
        "title": "The Unrivaled",
        "image": "https://cdn.example.com/hero.png",
        "roles": ["Fighter"],
        "lanes": ["Top"],
        "metaTier": "S",
        "winRate": 52.5,
        "pickRate": 12.0,
        "banRate": 3.0,
        "skills": [
            { "name": "Sweep", "icon": "", "description": "Sweeps the halberd." },
            { "name": "", "icon": "", "description": "" }
        ],
        "combo": [{ "skills": [0], "description": "Open with Sweep" }],
        "skins": [{ "name": "Default", "image": "https://cdn.example.com/skin.png" }]
    })
}

/// Tests creating a hero through the API and reading it back by slug.
///
/// Expected: 201 with slug "lu-bu", then 200 from the slug route
#[tokio::test]
async fn creates_hero_with_slug() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let created = app
        .send(Method::POST, "/api/heroes", Some(&token), Some(hero_payload("Lu Bu")))
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["slug"], "lu-bu");
    assert_eq!(created.body["metaTier"], "S");
    assert_eq!(created.body["skills"].as_array().unwrap().len(), 1);

    let fetched = app.get("/api/heroes/slug/lu-bu").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Lu Bu");
}

/// Tests names with punctuation and Vietnamese diacritics.
///
/// Expected: both heroes are reachable through the slug route, a name without letters
/// or digits fails validation
#[tokio::test]
async fn slugs_from_any_name_are_routable() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for (name, slug) in [("Dr. Bian", "dr-bian"), ("Điêu Thuyền", "dieu-thuyen")] {
        let created = app
            .send(Method::POST, "/api/heroes", Some(&token), Some(hero_payload(name)))
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.body["slug"], slug);

        let fetched = app.get(&format!("/api/heroes/slug/{}", slug)).await;
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body["name"], name);
    }

    let symbols = app
        .send(Method::POST, "/api/heroes", Some(&token), Some(hero_payload("???")))
        .await;
    assert_eq!(symbols.status, StatusCode::BAD_REQUEST);
    assert!(details(&symbols.body)
        .contains(&"Hero name must contain at least one letter or digit".to_string()));
}

/// Tests a well-formed slug with no hero behind it.
///
/// Expected: 404, and 400 for a malformed slug
#[tokio::test]
async fn missing_slug_is_not_found() {
    let app = TestApp::new().await;

    let missing = app.get("/api/heroes/slug/no-such-hero").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["success"], false);

    let malformed = app.get("/api/heroes/slug/No_Such").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "Invalid slug format");
}

/// Tests an empty hero body.
///
/// Expected: 400 listing every failed rule
#[tokio::test]
async fn lists_every_validation_failure() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .send(Method::POST, "/api/heroes", Some(&token), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Validation failed");
    let details = details(&response.body);
    assert!(details.contains(&"Hero name must be between 1 and 100 characters".to_string()));
    assert!(details.contains(&"Hero image is required".to_string()));
    assert!(details.contains(&"Hero must have at least one role".to_string()));
    assert!(details.contains(&"Win rate must be between 0 and 100".to_string()));
    assert!(details.contains(&"Hero must have at least one skill with description".to_string()));
}

/// Tests writes without a token and with a duplicate name.
///
/// Expected: 401 without a token, 409 for the second hero with the same name
#[tokio::test]
async fn guards_writes_and_names() {
    let app = TestApp::new().await;

    let anonymous = app
        .send(Method::POST, "/api/heroes", None, Some(hero_payload("Arthur")))
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["error"], "Access denied. No token provided.");

    let token = app.admin_token().await;
    let first = app
        .send(Method::POST, "/api/heroes", Some(&token), Some(hero_payload("Arthur")))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .send(Method::POST, "/api/heroes", Some(&token), Some(hero_payload("Arthur")))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

/// Tests that deleting a hero removes it from other heroes' matchups.
///
/// Expected: the ally is populated before the delete and gone after it
#[tokio::test]
async fn delete_cleans_matchups() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let db = &app.state.db;
    let diaochan = HeroFactory::new(db).name("Diao Chan").build().await.unwrap();
    let lubu = HeroFactory::new(db).name("Lu Bu").build().await.unwrap();
    factory::create_matchup(db, lubu.id, diaochan.id, "ally").await.unwrap();

    let before = app.get("/api/heroes/slug/lu-bu").await;
    assert_eq!(before.body["allies"][0]["slug"], "diao-chan");

    let deleted = app
        .send(
            Method::DELETE,
            &format!("/api/heroes/{}", diaochan.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let after = app.get(&format!("/api/heroes/{}", lubu.id)).await;
    assert_eq!(after.body["allies"], json!([]));
}

/// Tests paging math and the `/api/champions` alias.
///
/// Expected: 5 heroes at limit 2 give 3 pages and the alias returns the same envelope
#[tokio::test]
async fn pages_through_heroes() {
    let app = TestApp::new().await;
    for _ in 0..5 {
        factory::create_hero(&app.state.db).await.unwrap();
    }

    let last = app.get("/api/heroes?page=3&limit=2").await;
    assert_eq!(last.status, StatusCode::OK);
    assert_eq!(last.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(last.body["pagination"]["totalPages"], 3);
    assert_eq!(last.body["pagination"]["hasNextPage"], false);
    assert_eq!(last.body["pagination"]["hasPrevPage"], true);

    let alias = app.get("/api/champions?limit=2").await;
    assert_eq!(alias.body["pagination"]["totalItems"], 5);

    let invalid = app.get("/api/heroes?page=0&role=Wizard").await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(details(&invalid.body).len(), 1);
}

#[tokio::test]
async fn rejects_malformed_id() {
    let app = TestApp::new().await;

    let response = app.get("/api/heroes/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid ID format");
}

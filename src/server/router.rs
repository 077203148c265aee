use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{arcana, auth, equipment, health, hero, meta, news, upload},
    middleware::{
        rate_limit::enforce,
        security::{cors_layer, with_security_headers},
    },
    service::upload::local::PUBLIC_PREFIX,
    state::AppState,
};

/// Largest accepted request body.
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "BlogHok API", version = "1.0.0"),
    paths(
        auth::login,
        auth::register,
        auth::profile,
        auth::logout,
        hero::list_heroes,
        hero::get_hero_by_slug,
        hero::get_hero,
        hero::create_hero,
        hero::update_hero,
        hero::delete_hero,
        news::list_news,
        news::get_news_by_slug,
        news::get_news,
        news::create_news,
        news::update_news,
        news::delete_news,
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        arcana::list_arcana,
        arcana::get_arcana,
        arcana::create_arcana,
        arcana::patch_arcana,
        arcana::delete_arcana,
        meta::list_meta,
        meta::create_meta,
        meta::patch_meta,
        meta::delete_meta,
        upload::upload_image,
        health::health,
        health::detailed,
        health::metrics,
        health::live,
        health::ready,
        health::root,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Admin login, registration and logout"),
        (name = "hero", description = "Heroes with skills, skins and matchups"),
        (name = "news", description = "News posts"),
        (name = "equipment", description = "Equipment and build paths"),
        (name = "arcana", description = "Arcana pages"),
        (name = "meta", description = "Patch meta snapshots"),
        (name = "upload", description = "Image uploads"),
        (name = "health", description = "Health, liveness and readiness checks"),
    ),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// Every `/api` route sits behind the general limiter; login and register add the auth
/// limiter, list endpoints the search limiter and uploads the upload limiter. Locally
/// stored uploads are served under `/uploads`.
///
/// # Arguments
/// - `state` - Application state shared by every handler
/// - `config` - Configuration supplying the CORS origins
///
/// # Returns
/// - `Router` - Router with state applied, ready to serve
pub fn router(state: AppState, config: &Config) -> Router {
    let limits = state.rate_limits.clone();

    let heroes = Router::new()
        .route(
            "/",
            get(hero::list_heroes)
                .layer(from_fn_with_state(limits.search.clone(), enforce))
                .post(hero::create_hero),
        )
        .route("/slug/{slug}", get(hero::get_hero_by_slug))
        .route(
            "/{id}",
            get(hero::get_hero)
                .put(hero::update_hero)
                .patch(hero::update_hero)
                .delete(hero::delete_hero),
        );

    let news_routes = Router::new()
        .route(
            "/",
            get(news::list_news)
                .layer(from_fn_with_state(limits.search.clone(), enforce))
                .post(news::create_news),
        )
        .route("/slug/{slug}", get(news::get_news_by_slug))
        .route(
            "/{id}",
            get(news::get_news)
                .put(news::update_news)
                .patch(news::update_news)
                .delete(news::delete_news),
        );

    let equipment_routes = Router::new()
        .route(
            "/",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/{id}",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        );

    let arcana_routes = Router::new()
        .route("/", get(arcana::list_arcana).post(arcana::create_arcana))
        .route(
            "/{id}",
            get(arcana::get_arcana)
                .patch(arcana::patch_arcana)
                .delete(arcana::delete_arcana),
        );

    let meta_routes = Router::new()
        .route("/", get(meta::list_meta).post(meta::create_meta))
        .route(
            "/{id}",
            patch(meta::patch_meta).delete(meta::delete_meta),
        );

    let auth_routes = Router::new()
        .route(
            "/login",
            post(auth::login).layer(from_fn_with_state(limits.auth.clone(), enforce)),
        )
        .route(
            "/register",
            post(auth::register).layer(from_fn_with_state(limits.auth.clone(), enforce)),
        )
        .route("/profile", get(auth::profile))
        .route("/logout", post(auth::logout));

    let api = Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/heroes", heroes.clone())
        .nest("/api/champions", heroes)
        .nest("/api/news", news_routes)
        .nest("/api/equipment", equipment_routes)
        .nest("/api/arcana", arcana_routes)
        .nest("/api/meta", meta_routes)
        .route(
            "/api/upload",
            post(upload::upload_image).layer(from_fn_with_state(limits.upload.clone(), enforce)),
        )
        .layer(from_fn_with_state(limits.api.clone(), enforce));

    let mut app = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/detailed", get(health::detailed))
        .route("/health/metrics", get(health::metrics))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .merge(api)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = state.images.local_dir() {
        app = app.nest_service(PUBLIC_PREFIX, ServeDir::new(dir));
    }

    let app = app
        .fallback(health::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    with_security_headers(app).with_state(state)
}

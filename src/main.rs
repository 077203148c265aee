mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router::router, scheduler::maintenance, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let state = AppState::new(db, http_client, &config)?;

    let mut scheduler = maintenance::start_scheduler(&state, config.upload_retention_days).await?;

    let app = router(state, &config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on {}", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!("Failed to stop maintenance scheduler: {}", e);
    }
    tracing::info!("Server stopped");

    Ok(())
}

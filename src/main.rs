//! Missionboard HTTP server binary.
//!
//! Connects to the database, runs pending migrations, and serves the REST API.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: sqlite://missionboard.db?mode=rwc)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5555)
//! - `RUST_LOG`: Log filter (default: missionboard=info,tower_http=info)

use tracing::info;
use tracing_subscriber::prelude::*;

use missionboard::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "missionboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    info!("Server listening on http://{}:{}", config.host, config.port);
    info!(
        "API documentation at http://{}:{}/docs",
        config.host, config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

//! Serve command - Starts the HTTP server.

use crate::api::{create_app, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    if args.no_seed {
        config.seed_on_start = false;
    }

    // Connect and apply pending migrations
    let db = Database::connect(&config).await?;

    // Fixtures go in before the listener accepts anything
    if config.seed_on_start {
        let report = db.seed().await?;
        tracing::info!(inserted = report.total(), "Seeding finished");
    }

    let app = create_app(AppState::from_database(&db));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

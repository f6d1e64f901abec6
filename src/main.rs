use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use tracking::api::routes::create_routes;
use tracking::config::{run_migrations, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;

    // Create the application routes
    let app = create_routes(pool);

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Tracking server starting on http://{}", config.server_address());
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

//! Eventra backend service
//!
//! Main application entry point

use std::sync::Arc;

use tracing::info;

use eventra::{
    api::{self, AppState},
    config::Settings,
    database::{connection::create_pool, run_migrations, DatabaseService, PoolConfig},
    services::ServiceFactory,
    session::SessionStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender flushing
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventra::info());

    // Initialize database connection
    info!("Connecting to database...");
    let pool_config = PoolConfig::from_settings(&settings.database);
    let pool = create_pool(&pool_config).await?;

    // Run database migrations
    run_migrations(&pool).await?;

    // Initialize session store
    info!("Connecting to session store...");
    let sessions = SessionStore::new(settings.redis.clone()).await?;

    // Initialize services
    info!("Initializing services...");
    let database = DatabaseService::new(pool.clone());
    let services = ServiceFactory::new(database, sessions);

    let state = AppState {
        services: Arc::new(services),
        pool,
    };

    let app = api::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Eventra is listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Eventra has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

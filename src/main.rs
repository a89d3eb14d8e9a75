//! Travel Listings API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_listings_api::infrastructure::driven_adapters::config::{load_dotenv, AppConfig};
use travel_listings_api::infrastructure::driven_adapters::database;
use travel_listings_api::infrastructure::driven_adapters::PostgresDestinationRepository;
use travel_listings_api::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_error = load_dotenv();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(config.security.debug);
    if let Some(err) = dotenv_error {
        tracing::warn!(error = %err, "Failed to load .env file");
    }
    tracing::info!("Configuration loaded successfully");
    config.warn_on_insecure_settings();

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repository and application state
    let destination_repository = Arc::new(PostgresDestinationRepository::new(pool));
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = AppState::new(Arc::new(config), destination_repository);

    // Build router
    let app = api_rest::router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Human-readable logs in debug mode, JSON lines otherwise
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "travel_listings_api=debug,tower_http=debug"
    } else {
        "travel_listings_api=info,tower_http=info"
    };

    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
    );

    if debug {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

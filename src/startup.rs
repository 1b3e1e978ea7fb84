use crate::components::{LogNotifier, Notifier};
use crate::config::Config;
use crate::error::Error;
use crate::handlers::{booking_handler, health_handler, AppState};
use crate::shutdown;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(config)),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the application router with shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/booking", post(booking_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the HTTP server and run it until a shutdown signal arrives
pub async fn start_server(config: Arc<Config>) -> miette::Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    info!("Using {} notifier for outgoing email", notifier.name());

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .map_err(|e| Error::Config(format!("Invalid bind address: {}", e)))?;

    let state = AppState { config, notifier };
    let app = build_router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("Server stopped");
    Ok(())
}

use antova_booking::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Antova Builders booking service");

    // Load configuration
    let config = startup::load_config()?;

    // Start the HTTP server
    startup::start_server(config).await
}

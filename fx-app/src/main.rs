//! # FX Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the Frankfurter rate source adapter
//! - Create the converter service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fx_frankfurter::FrankfurterClient;
use fx_hex::{ConverterService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fx_app=debug,fx_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting FX rates server on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.frankfurter_url);

    // Build the outbound adapter
    let source = FrankfurterClient::new(config.frankfurter_url);

    // Create the converter service
    let service = ConverterService::new(source);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}

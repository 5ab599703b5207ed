use std::net::SocketAddr;

use anyhow::anyhow;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use relay_dialer::{AppState, ServerConfig, routes};

/// Outbound call trigger service for Twilio ConversationRelay + ElevenLabs
#[derive(Parser, Debug)]
#[command(name = "relay-dialer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Override the listening port (takes precedence over the PORT
    /// environment variable)
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration from environment; missing Twilio credentials are
    // fatal before we bind the listener
    let mut config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let address = config.address();
    println!("Starting server on {address}");

    // Create application state
    let app_state = AppState::new(config);

    let app = routes::api::create_api_router().with_state(app_state);

    // Parse socket address
    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    println!("Server listening on http://{}", socket_addr);

    let listener = TcpListener::bind(&socket_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

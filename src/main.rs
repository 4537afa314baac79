//! Parlor HTTP server
//!
//! Starts an Axum web server that fronts a locally hosted model endpoint
//! with a minimal browser chat.

use clap::Parser;
use parlor::{
    cli::{Cli, Command, generate_config_template},
    config::Config,
    handlers::{self, AppState},
    telemetry,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Handle subcommands before touching configuration
    if let Some(Command::Config { output }) = cli.command {
        match output {
            Some(path) => {
                std::fs::write(&path, generate_config_template())?;
                println!("Configuration template written to {path}");
            }
            None => print!("{}", generate_config_template()),
        }
        return Ok(());
    }

    // Load configuration
    let config = Config::from_file(&cli.config)?;

    // Initialize telemetry
    telemetry::init(&config.observability.log_level);

    tracing::info!(
        "Starting Parlor server on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!(
        model = %config.model.name,
        endpoint = %config.model.generate_url,
        "Forwarding chat to model endpoint"
    );

    // Host was validated as an IP address during config loading
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));

    let state = AppState::new(config)?;
    let app = handlers::app(state);

    tracing::info!("Listening on {}", addr);
    tracing::info!("Chat page available at http://{}/", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Command-line interface definitions

use clap::{Parser, Subcommand};

/// Parlor - minimal browser chat for a locally hosted model endpoint
#[derive(Parser, Debug)]
#[command(name = "parlor", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a configuration file template
    Config {
        /// Write template to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# Parlor Configuration
# ====================
#
# This file configures the HTTP server, the model endpoint, and
# observability settings for Parlor.

# ─────────────────────────────────────────────────────────────────────────────
# SERVER CONFIGURATION
# ─────────────────────────────────────────────────────────────────────────────

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 7860

# Upper bound in seconds for a single model request, covering the whole
# streamed generation. Must be between 1 and 600.
request_timeout_seconds = 120

# ─────────────────────────────────────────────────────────────────────────────
# MODEL ENDPOINT
# ─────────────────────────────────────────────────────────────────────────────

[model]
# Model identifier forwarded with every generate request
name = "gemma2:latest"

# Full URL of the generate endpoint (must end with /api/generate).
# Point this at your Ollama instance; inside a compose network that is
# typically "http://ollama:11434/api/generate".
generate_url = "http://localhost:11434/api/generate"

# ─────────────────────────────────────────────────────────────────────────────
# OBSERVABILITY
# ─────────────────────────────────────────────────────────────────────────────

[observability]
# Default log level: trace, debug, info, warn, or error.
# Override at runtime with the RUST_LOG environment variable.
log_level = "info"
"#
}

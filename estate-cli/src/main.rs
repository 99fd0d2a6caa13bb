//! Estate Command Line Interface
//!
//! Usage:
//!   estate serve          - Start the API server
//!   estate keygen         - Print a fresh Ed25519 keypair
//!   estate hash <text>    - Print the SHA-256 digest of text
//!   estate quality <b64>  - Score a biometric payload
//!
//! Server settings come from `ESTATE_*` environment variables; flags
//! override them.

use clap::{Parser, Subcommand};
use estate_core::logging::LogLevel;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Estate back-office CLI")]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info", value_parser = parse_log_level)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Load the sample portfolio on startup
        #[arg(long)]
        seed: bool,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
    },

    /// Generate an Ed25519 keypair (base64)
    Keygen,

    /// Print the base64 SHA-256 digest of text
    Hash {
        text: String,
    },

    /// Evaluate biometric payload quality
    Quality {
        /// Payload, base64
        #[arg(required_unless_present = "file")]
        data: Option<String>,
        /// Read the raw payload from a file instead
        #[arg(short, long, conflicts_with = "data")]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level: {s}"))
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            seed,
            no_cors,
        } => commands::serve(host, port, seed, no_cors).await,
        Commands::Keygen => {
            commands::keygen();
            Ok(())
        }
        Commands::Hash { text } => {
            commands::hash(&text);
            Ok(())
        }
        Commands::Quality { data, file } => commands::quality(data, file),
    }
}

//! Command handlers for the CLI

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use estate_api::{run_server, ApiConfig};
use estate_db::services::{evaluate_quality, quality_level};
use estate_db::Database;
use estate_signer::{generate_keypair, hash_str};
use std::path::PathBuf;
use std::sync::Arc;

type CmdResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Environment config with command-line overrides applied
fn server_config(host: Option<String>, port: Option<u16>, seed: bool, no_cors: bool) -> ApiConfig {
    let mut config = ApiConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.seed_sample_data |= seed;
    if no_cors {
        config.enable_cors = false;
    }
    config
}

pub async fn serve(
    host: Option<String>,
    port: Option<u16>,
    seed: bool,
    no_cors: bool,
) -> CmdResult {
    let config = server_config(host, port, seed, no_cors);
    tracing::debug!(?config, "Server configuration");
    println!("Starting estate API server on {}...", config.bind_address());

    run_server(config, Arc::new(Database::new())).await
}

pub fn keygen() {
    let (private_key, public_key) = generate_keypair();
    println!("private_key: {}", private_key);
    println!("public_key:  {}", public_key);
}

pub fn hash(text: &str) {
    println!("{}", hash_str(text));
}

pub fn quality(data: Option<String>, file: Option<PathBuf>) -> CmdResult {
    let encoded = match (data, file) {
        (_, Some(path)) => BASE64.encode(std::fs::read(&path)?),
        (Some(data), None) => data,
        (None, None) => return Err("either a payload or --file is required".into()),
    };

    let score = evaluate_quality(&encoded);
    println!("Quality score: {} ({:?})", score, quality_level(score));
    Ok(())
}

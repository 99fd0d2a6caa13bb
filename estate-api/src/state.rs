//! Application state and configuration for the API server

use estate_db::{
    BiometricService, ClientService, ContractService, Database, PropertyService,
    SignatureService, TimestampService, TransactionService,
};
use std::sync::Arc;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// API server state
#[derive(Clone)]
pub struct AppState {
    pub signatures: Arc<SignatureService>,
    pub timestamps: Arc<TimestampService>,
    pub biometrics: Arc<BiometricService>,
    pub properties: Arc<PropertyService>,
    pub clients: Arc<ClientService>,
    pub contracts: Arc<ContractService>,
    pub transactions: Arc<TransactionService>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Wire every service over one database
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            signatures: Arc::new(SignatureService::new(db.clone())),
            timestamps: Arc::new(TimestampService::new(db.clone())),
            biometrics: Arc::new(BiometricService::new(db.clone())),
            properties: Arc::new(PropertyService::new(db.clone())),
            clients: Arc::new(ClientService::new(db.clone())),
            contracts: Arc::new(ContractService::new(db.clone())),
            transactions: Arc::new(TransactionService::new(db)),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// Load the sample portfolio on startup
    pub seed_sample_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            enable_cors: true,
            seed_sample_data: false,
        }
    }
}

impl ApiConfig {
    /// Read `ESTATE_HOST`, `ESTATE_PORT`, `ESTATE_ENABLE_CORS` and `ESTATE_SEED`,
    /// falling back to defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("ESTATE_HOST").unwrap_or(defaults.host),
            port: std::env::var("ESTATE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            enable_cors: std::env::var("ESTATE_ENABLE_CORS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.enable_cors),
            seed_sample_data: std::env::var("ESTATE_SEED")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_sample_data),
        }
    }

    /// Get the full bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.enable_cors);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}

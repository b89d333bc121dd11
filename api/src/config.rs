use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which `DocumentStore` adapter backs the content facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
    Http,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "postgres" => Ok(StoreBackend::Postgres),
            "http" => Ok(StoreBackend::Http),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is Postgres
    pub database_url: Option<String>,
    /// Base URL of the remote document API, required when `store_backend` is Http
    pub document_api_url: Option<String>,
    pub document_api_token: Option<String>,
    /// Upper bound for a single store round trip
    pub store_timeout: Duration,
    /// SHA-256 hex digest of the operator key
    pub operator_key_hash: Option<String>,
    pub port: u16,
    pub rate_limit_inquiries: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .parse::<StoreBackend>()
            .map_err(anyhow::Error::msg)?;

        let store_timeout_ms: u64 = match env::var("STORE_TIMEOUT_MS") {
            Ok(v) => v.parse().context("STORE_TIMEOUT_MS must be a number")?,
            Err(_) => 5000,
        };

        let config = Self {
            store_backend,
            database_url: env::var("DATABASE_URL").ok(),
            document_api_url: env::var("DOCUMENT_API_URL").ok(),
            document_api_token: env::var("DOCUMENT_API_TOKEN").ok(),
            store_timeout: Duration::from_millis(store_timeout_ms),
            operator_key_hash: env::var("OPERATOR_KEY_HASH")
                .ok()
                .map(|h| h.trim().to_lowercase())
                .filter(|h| !h.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            rate_limit_inquiries: env::var("RATE_LIMIT_INQUIRIES")
                .map(|v| v != "0" && v.to_lowercase() != "false")
                .unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match self.store_backend {
            StoreBackend::Postgres if self.database_url.is_none() => {
                bail!("DATABASE_URL must be set when STORE_BACKEND=postgres")
            }
            StoreBackend::Http if self.document_api_url.is_none() => {
                bail!("DOCUMENT_API_URL must be set when STORE_BACKEND=http")
            }
            _ => Ok(()),
        }
    }

    /// Check if operator routes can be unlocked at all
    pub fn operator_enabled(&self) -> bool {
        self.operator_key_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            store_backend: StoreBackend::Memory,
            database_url: None,
            document_api_url: None,
            document_api_token: None,
            store_timeout: Duration::from_secs(5),
            operator_key_hash: None,
            port: 8080,
            rate_limit_inquiries: true,
        }
    }

    #[test]
    fn parse_store_backend() {
        assert_eq!("Postgres".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert_eq!("http".parse::<StoreBackend>(), Ok(StoreBackend::Http));
        assert!("firestore".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let config = Config {
            store_backend: StoreBackend::Postgres,
            ..base()
        };
        assert!(config.validate().is_err());

        let config = Config {
            database_url: Some("postgres://localhost/aster".to_string()),
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn http_backend_requires_document_api_url() {
        let config = Config {
            store_backend: StoreBackend::Http,
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn operator_disabled_without_hash() {
        assert!(!base().operator_enabled());
    }
}

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::matching::engine::{FreshnessPolicy, MatchConfig};
use crate::matching::weights::MatchWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("unknown storage backend '{other}' (expected postgres|memory)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    /// Required for the Postgres backend.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub freshness: FreshnessPolicy,
    pub weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_backend = lookup("STORAGE_BACKEND")
            .map(|v| v.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Postgres);

        let database_url = lookup("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("Required environment variable 'DATABASE_URL' is not set");
        }

        Ok(Config {
            storage_backend,
            database_url,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            freshness: lookup("MATCH_FRESHNESS")
                .map(|v| v.parse::<FreshnessPolicy>())
                .transpose()?
                .unwrap_or_default(),
            weights: lookup("MATCH_WEIGHTS")
                .map(|v| MatchWeights::parse(&v))
                .transpose()
                .context("MATCH_WEIGHTS must be 'skills,experience,education,keyword'")?
                .unwrap_or_default(),
        })
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            weights: self.weights,
            freshness: self.freshness,
            ..MatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(load(&[]).is_err());
        let config = load(&[("DATABASE_URL", "postgres://localhost/jobs")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_memory_backend_without_database() {
        let config = load(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_defaults_for_matching() {
        let config = load(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.freshness, FreshnessPolicy::Forever);
        assert_eq!(config.weights, MatchWeights::default());
    }

    #[test]
    fn test_matching_overrides() {
        let config = load(&[
            ("STORAGE_BACKEND", "memory"),
            ("MATCH_FRESHNESS", "fingerprint"),
            ("MATCH_WEIGHTS", "0.5,0.2,0.15,0.15"),
        ])
        .unwrap();
        assert_eq!(config.freshness, FreshnessPolicy::Fingerprint);
        assert_eq!(config.match_config().weights.skills, 0.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("STORAGE_BACKEND", "sqlite")]).is_err());
        assert!(load(&[("STORAGE_BACKEND", "memory"), ("PORT", "http")]).is_err());
        assert!(load(&[("STORAGE_BACKEND", "memory"), ("MATCH_WEIGHTS", "1,1,1,1")]).is_err());
    }
}

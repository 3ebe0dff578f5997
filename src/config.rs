// src/config.rs

//! Client configuration: where the store lives and how to introduce ourselves.

use crate::errors::{LazuliteError, Result};
use serde::Deserialize;
use std::time::Duration;
use tokio::fs;

/// Connection settings for one store endpoint.
///
/// Every field has a usable default, so `StoreConfig::default()` targets a
/// local store on the standard port with no credential and database 0. The
/// same defaults apply field-by-field when deserializing a partial TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Credential presented with `AUTH` right after the transport opens.
    /// `None` and the empty string both mean "no authentication".
    pub auth: Option<String>,

    /// Logical database index, selected with `SELECT` when nonzero.
    #[serde(default)]
    pub database: u32,

    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub connect_timeout: Duration,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    6379
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth: None,
            database: 0,
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl StoreConfig {
    /// Loads and validates a configuration from a TOML file.
    pub async fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: StoreConfig = toml::from_str(&content)
            .map_err(|e| LazuliteError::Config(format!("failed to parse '{path}': {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(LazuliteError::Config("port cannot be 0".to_string()));
        }
        if self.host.is_empty() {
            return Err(LazuliteError::Config("host cannot be empty".to_string()));
        }
        Ok(())
    }

    /// The credential to present, if any. Empty strings count as absent.
    pub fn credential(&self) -> Option<&str> {
        self.auth.as_deref().filter(|a| !a.is_empty())
    }
}

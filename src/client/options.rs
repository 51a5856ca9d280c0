//! Client construction options.
//!
//! The factory takes a hard-wired default shape (identification header,
//! 15 second keep-alive, IPv4 egress) plus an open set of per-integration
//! options defined here. Options deserialize from the integration's TOML
//! config, and every field has a default so an empty table is valid.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::client::factory::KEEP_ALIVE_TIMEOUT;
use crate::client::types::OptionsError;

/// Per-integration options forwarded to the client constructor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Extra default headers merged in after the identification header.
    /// A `User-Agent` entry here overrides the composed one.
    pub headers: HashMap<String, String>,

    /// Enable a persistent in-memory cookie jar.
    pub cookie_store: bool,

    /// Per-request timeout in seconds; no timeout when absent.
    pub timeout_secs: Option<u64>,

    /// Connection pool overrides. Absent means the hub defaults.
    pub pool: Option<PoolOptions>,
}

/// Connection pool limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolOptions {
    /// Maximum idle time before a pooled connection is recycled.
    pub keepalive_expiry_secs: u64,

    /// Cap on idle connections kept per host; unlimited when absent.
    pub max_idle_per_host: Option<usize>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            keepalive_expiry_secs: KEEP_ALIVE_TIMEOUT.as_secs(),
            max_idle_per_host: None,
        }
    }
}

impl ClientOptions {
    /// Effective keep-alive expiry: the explicit pool override if present,
    /// otherwise the hub-wide 15 second default.
    pub fn keepalive_expiry(&self) -> Duration {
        self.pool
            .as_ref()
            .map(|p| Duration::from_secs(p.keepalive_expiry_secs))
            .unwrap_or(KEEP_ALIVE_TIMEOUT)
    }
}

/// Load client options from a TOML file.
pub fn load_options(path: &Path) -> Result<ClientOptions, OptionsError> {
    let content = fs::read_to_string(path)?;
    let options: ClientOptions = toml::from_str(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keepalive_is_hub_constant() {
        let options = ClientOptions::default();
        assert_eq!(options.keepalive_expiry(), Duration::from_secs(15));
    }

    #[test]
    fn pool_override_wins() {
        let options = ClientOptions {
            pool: Some(PoolOptions {
                keepalive_expiry_secs: 30,
                max_idle_per_host: Some(4),
            }),
            ..Default::default()
        };
        assert_eq!(options.keepalive_expiry(), Duration::from_secs(30));
    }

    #[test]
    fn empty_toml_is_valid() {
        let options: ClientOptions = toml::from_str("").unwrap();
        assert!(options.headers.is_empty());
        assert!(!options.cookie_store);
        assert!(options.pool.is_none());
    }

    #[test]
    fn parses_full_table() {
        let options: ClientOptions = toml::from_str(
            r#"
            cookie_store = true
            timeout_secs = 20

            [headers]
            x-api-key = "abc123"

            [pool]
            keepalive_expiry_secs = 5
            "#,
        )
        .unwrap();
        assert!(options.cookie_store);
        assert_eq!(options.timeout_secs, Some(20));
        assert_eq!(options.headers["x-api-key"], "abc123");
        assert_eq!(options.keepalive_expiry(), Duration::from_secs(5));
        assert_eq!(options.pool.unwrap().max_idle_per_host, None);
    }
}

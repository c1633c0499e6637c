//! Gateway configuration read from the environment.

use std::path::PathBuf;

use autoscan_store::{StoreConfig, DEFAULT_DATABASE_PATH};
use tracing::warn;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5001";

/// Runtime configuration for the `autoscan-gateway` binary.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to bind, e.g. `0.0.0.0:5001`.
    pub listen_addr: String,

    /// SQLite database file, relative to the working directory unless absolute.
    pub database_path: PathBuf,

    /// Pool size override; `None` keeps the store default.
    pub max_connections: Option<u32>,
}

impl GatewayConfig {
    /// Read `AUTOSCAN_LISTEN_ADDR`, `AUTOSCAN_DATABASE_PATH` and
    /// `AUTOSCAN_DB_MAX_CONNECTIONS`, falling back to defaults for unset or
    /// empty values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// An unparseable pool size is logged and ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            listen_addr: non_empty("AUTOSCAN_LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
            database_path: non_empty("AUTOSCAN_DATABASE_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH), PathBuf::from),
            max_connections: non_empty("AUTOSCAN_DB_MAX_CONNECTIONS").and_then(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| {
                        warn!(value = %raw, error = %e, "invalid AUTOSCAN_DB_MAX_CONNECTIONS, using default");
                    })
                    .ok()
            }),
        }
    }

    /// Store configuration derived from this config.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(self.database_path.clone());
        match self.max_connections {
            Some(n) => config.with_max_connections(n),
            None => config,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:5001");
        assert_eq!(config.database_path, PathBuf::from("autoscan.db"));
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = GatewayConfig::from_lookup(|key| match key {
            "AUTOSCAN_LISTEN_ADDR" => Some("127.0.0.1:9000".to_owned()),
            "AUTOSCAN_DATABASE_PATH" => Some("/var/lib/autoscan/scans.db".to_owned()),
            _ => None,
        });
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.store_config().database_path, PathBuf::from("/var/lib/autoscan/scans.db"));
    }

    #[test]
    fn pool_size_flows_into_store_config() {
        let config = GatewayConfig::from_lookup(|key| {
            (key == "AUTOSCAN_DB_MAX_CONNECTIONS").then(|| "8".to_owned())
        });
        assert_eq!(config.max_connections, Some(8));
        assert_eq!(config.store_config().max_connections, 8);
    }

    #[test]
    fn zero_pool_size_is_clamped_to_one() {
        let config = GatewayConfig::from_lookup(|key| {
            (key == "AUTOSCAN_DB_MAX_CONNECTIONS").then(|| "0".to_owned())
        });
        assert_eq!(config.store_config().max_connections, 1);
    }

    #[test]
    fn invalid_pool_size_keeps_store_default() {
        let config = GatewayConfig::from_lookup(|key| {
            (key == "AUTOSCAN_DB_MAX_CONNECTIONS").then(|| "many".to_owned())
        });
        assert_eq!(config.max_connections, None);
        assert_eq!(
            config.store_config().max_connections,
            StoreConfig::new("x.db").max_connections
        );
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = GatewayConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
    }
}

//! Diagnostic snapshot served by `GET /api/env`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Environment variables that may be echoed back. Nothing else ever is.
pub const EXPOSED_ENV_KEYS: [&str; 4] = ["AUTOSCAN_PROFILE", "AUTOSCAN_REGION", "ENV", "RUST_LOG"];

/// Read-only view of where the service runs and how it is deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvSnapshot {
    pub service_version: String,
    pub working_directory: String,
    pub database_path: String,
    /// Allow-listed variables with non-empty values, sorted by name.
    pub exposed_env: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture a snapshot from the process environment.
    #[must_use]
    pub fn capture(database_path: String) -> Self {
        let working_directory = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self::from_lookup(working_directory, database_path, |key| std::env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary variable lookup.
    ///
    /// Only keys in [`EXPOSED_ENV_KEYS`] are queried; unset and empty values
    /// are left out.
    #[must_use]
    pub fn from_lookup(
        working_directory: String,
        database_path: String,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let exposed_env = EXPOSED_ENV_KEYS
            .into_iter()
            .filter_map(|key| lookup(key).filter(|v| !v.is_empty()).map(|v| (key.to_owned(), v)))
            .collect();
        Self {
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            working_directory,
            database_path,
            exposed_env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_allow_listed_non_empty_values_are_exposed() {
        let snapshot = EnvSnapshot::from_lookup("/srv".to_owned(), "autoscan.db".to_owned(), |key| {
            match key {
                "AUTOSCAN_PROFILE" => Some("staging".to_owned()),
                "AUTOSCAN_REGION" => Some(String::new()),
                "HOME" | "DATABASE_PASSWORD" => Some("secret".to_owned()),
                _ => None,
            }
        });
        assert_eq!(snapshot.exposed_env.len(), 1);
        assert_eq!(snapshot.exposed_env.get("AUTOSCAN_PROFILE").map(String::as_str), Some("staging"));
        assert!(!snapshot.exposed_env.contains_key("AUTOSCAN_REGION"), "empty values are omitted");
    }

    #[test]
    fn lookup_is_never_asked_for_other_keys() {
        let snapshot = EnvSnapshot::from_lookup(String::new(), String::new(), |key| {
            assert!(EXPOSED_ENV_KEYS.contains(&key), "unexpected lookup of {key}");
            Some("x".to_owned())
        });
        assert_eq!(snapshot.exposed_env.len(), EXPOSED_ENV_KEYS.len());
    }

    #[test]
    fn snapshot_serializes_expected_fields() {
        let snapshot = EnvSnapshot::from_lookup("/srv".to_owned(), "autoscan.db".to_owned(), |_| None);
        let value = match serde_json::to_value(&snapshot) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(value["working_directory"], "/srv");
        assert_eq!(value["database_path"], "autoscan.db");
        assert!(value["exposed_env"].as_object().is_some_and(serde_json::Map::is_empty));
        assert!(value["service_version"].is_string());
    }
}

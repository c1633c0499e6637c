//! Store configuration.

use std::path::PathBuf;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "autoscan.db";

/// Configuration for opening a [`crate::SqliteScanStore`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct StoreConfig {
    /// Path to the SQLite database file. Created if missing.
    pub database_path: PathBuf,

    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl StoreConfig {
    /// Config for the database at `database_path` with default pool sizing.
    #[must_use]
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self { database_path: database_path.into(), max_connections: 4 }
    }

    /// Override the connection pool size.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

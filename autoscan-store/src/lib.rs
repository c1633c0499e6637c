//! Persistence for autoscan scan runs.
//!
//! Exposes the [`ScanStore`] trait used by the HTTP layer and its SQLite
//! implementation, [`SqliteScanStore`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod sqlite;
pub mod store;

pub use config::{StoreConfig, DEFAULT_DATABASE_PATH};
pub use error::StoreError;
pub use sqlite::SqliteScanStore;
pub use store::{ScanStore, LIST_LIMIT};

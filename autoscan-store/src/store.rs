//! Scan store abstraction trait.
//!
//! The HTTP layer only talks to this trait, so the SQLite backend can be
//! swapped or stubbed without touching the handlers.

use async_trait::async_trait;

use autoscan_core::{NewScanRun, ScanId, ScanRun};

use crate::StoreError;

/// Number of records returned by a listing.
pub const LIST_LIMIT: u32 = 20;

/// Durable, append-only storage for scan runs.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
/// Each method performs a single statement; there are no multi-statement
/// transactions.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Persist a new run and return the id the store assigned to it.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the insert fails.
    async fn insert(&self, run: &NewScanRun) -> Result<ScanId, StoreError>;

    /// Return up to `limit` runs, newest first.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the query fails, or
    /// [`StoreError::CorruptRow`] if a stored row cannot be decoded.
    async fn recent(&self, limit: u32) -> Result<Vec<ScanRun>, StoreError>;

    /// Human-readable location of the backing store, for diagnostics.
    fn location(&self) -> String;
}

//! Error types for the store crate.

use autoscan_core::{CoreError, ScanId};

/// Errors that can occur while reading or writing scan records.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The database rejected a statement or could not be reached.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be decoded into a scan run.
    #[error("corrupt scan row {id}: {source}")]
    CorruptRow {
        id: ScanId,
        #[source]
        source: CoreError,
    },

    /// Underlying I/O error, e.g. creating the database directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

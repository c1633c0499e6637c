//! SQLite-backed [`ScanStore`].
//!
//! One table, created idempotently on open. Every call checks a connection
//! out of the pool, runs exactly one autocommitted statement and returns the
//! connection. Concurrent writers are serialized by SQLite's file locking.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, SqlitePool,
};
use tracing::{debug, info};

use autoscan_core::{time, NewScanRun, ScanId, ScanRun, ScanStatus};

use crate::{ScanStore, StoreConfig, StoreError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS scan_runs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        target TEXT NOT NULL,
        automation_mode TEXT NOT NULL,
        status TEXT NOT NULL,
        summary TEXT NOT NULL,
        created_at TEXT NOT NULL
    )";

const INSERT_RUN: &str = "
    INSERT INTO scan_runs (target, automation_mode, status, summary, created_at)
    VALUES (?, ?, ?, ?, ?)";

// `id` breaks ties between runs stamped in the same microsecond.
const SELECT_RECENT: &str = "
    SELECT id, target, automation_mode, status, summary, created_at
    FROM scan_runs
    ORDER BY created_at DESC, id DESC
    LIMIT ?";

/// Row shape of `scan_runs`, before status and timestamp decoding.
#[derive(Debug, FromRow)]
struct ScanRow {
    id: i64,
    target: String,
    automation_mode: String,
    status: String,
    summary: String,
    created_at: String,
}

impl TryFrom<ScanRow> for ScanRun {
    type Error = StoreError;

    fn try_from(row: ScanRow) -> Result<Self, Self::Error> {
        let id = ScanId(row.id);
        let corrupt = |source| StoreError::CorruptRow { id, source };
        Ok(ScanRun {
            id,
            target: row.target,
            automation_mode: row.automation_mode,
            status: row.status.parse::<ScanStatus>().map_err(corrupt)?,
            summary: row.summary,
            created_at: time::parse_timestamp(&row.created_at).map_err(corrupt)?,
        })
    }
}

/// Scan store persisted in a single SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteScanStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteScanStore {
    /// Open (creating if needed) the database described by `config` and
    /// ensure the schema exists.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the parent directory cannot be created,
    /// or [`StoreError::Database`] if the file cannot be opened or the schema
    /// statement fails.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        info!(path = %config.database_path.display(), "scan store ready");
        Ok(Self { pool, path: config.database_path.clone() })
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ScanStore for SqliteScanStore {
    async fn insert(&self, run: &NewScanRun) -> Result<ScanId, StoreError> {
        let result = sqlx::query(INSERT_RUN)
            .bind(&run.target)
            .bind(&run.automation_mode)
            .bind(run.status.as_str())
            .bind(&run.summary)
            .bind(time::format_timestamp(&run.created_at))
            .execute(&self.pool)
            .await?;

        let id = ScanId(result.last_insert_rowid());
        debug!(scan_id = %id, status = %run.status, "scan run inserted");
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<ScanRun>, StoreError> {
        let rows = sqlx::query_as::<_, ScanRow>(SELECT_RECENT)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ScanRun::try_from).collect()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

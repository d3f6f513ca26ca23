//! File-backed history table.
//!
//! The whole table is read and rewritten on every append. Appends take the
//! store's lock, so two sessions appending through the same store cannot
//! lose each other's records. Writes go to a sibling `.tmp` file and rename
//! into place, so a crash mid-write leaves the previous table intact.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use pionier_core::models::{HistoryTable, TranslationRecord};

use crate::error::HistoryError;

#[derive(Clone)]
pub struct HistoryStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl HistoryStore {
    /// A store over the table file at `path`. The file need not exist yet —
    /// it is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load one user's log.
    ///
    /// A user with no prior entries gets an empty log, and so does a
    /// missing or corrupt table file — history is supplementary data, so
    /// reads degrade rather than fail.
    pub async fn load(&self, username: &str) -> Vec<TranslationRecord> {
        self.load_table().await.remove(username).unwrap_or_default()
    }

    /// Append one record to a user's log and persist the table.
    pub async fn append(
        &self,
        username: &str,
        record: TranslationRecord,
    ) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;

        let mut table = self.load_table().await;
        table.entry(username.to_string()).or_default().push(record);
        self.write_table(&table).await?;

        info!(
            username,
            entries = table.get(username).map(Vec::len).unwrap_or(0),
            "history appended"
        );
        Ok(())
    }

    /// Read the full table, degrading missing or malformed content to empty.
    pub async fn load_table(&self) -> HistoryTable {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return HistoryTable::new(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history table unreadable, treating as empty");
                HistoryTable::new()
            }
        }
    }

    /// Serialize and atomically replace the table file.
    async fn write_table(&self, table: &HistoryTable) -> Result<(), HistoryError> {
        let json = serde_json::to_vec_pretty(table)?;

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir).await.map_err(|e| HistoryError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        // Write to a temp file then rename for atomicity
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(|e| HistoryError::Write {
                path: tmp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| HistoryError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}

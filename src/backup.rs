//! Backup and restore of the rate cache
//!
//! Exports the entire record set as a flat JSON array of
//! `{key, payload, storedAt}` objects and restores such an array back into
//! the store. Imported records keep their original timestamps, so restored
//! data ages out of freshness the same way it would have on the machine
//! that exported it.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::fs;

use crate::store::{CacheRecord, RateStore, StoreError};

/// Errors that can occur during backup export or import
#[derive(Debug, Error)]
pub enum BackupError {
    /// The rate cache never initialized, so there is nothing to export
    /// into or out of
    #[error("The rate cache is not available")]
    StoreUnavailable,

    /// Reading or writing the backup file failed
    #[error("Backup file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backup file is not a JSON array of cache records
    #[error("Invalid backup file: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    /// A record could not be written back into the store
    #[error("Failed to restore record: {0}")]
    Store(#[from] StoreError),
}

/// Default backup file name for the given date: `flux-backup-<date>.json`
pub fn default_backup_filename(date: NaiveDate) -> String {
    format!("flux-backup-{}.json", date)
}

/// Exports every cache record to `path` as a pretty-printed JSON array
///
/// # Returns
/// The number of records exported
pub async fn export_to(store: Option<&RateStore>, path: &Path) -> Result<usize, BackupError> {
    let store = store.ok_or(BackupError::StoreUnavailable)?;
    let records = store.export_records().await?;
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json).await?;
    Ok(records.len())
}

/// Restores cache records from a JSON backup file at `path`
///
/// The file must contain a JSON array of `{key, payload, storedAt}`
/// records; anything else is rejected as invalid. Records are upserted
/// with their original timestamps, replacing any existing record for the
/// same key.
///
/// # Returns
/// The number of records imported
pub async fn import_from(store: Option<&RateStore>, path: &Path) -> Result<usize, BackupError> {
    let store = store.ok_or(BackupError::StoreUnavailable)?;
    let content = fs::read_to_string(path).await?;
    let records: Vec<CacheRecord> = serde_json::from_str(&content)?;
    for record in &records {
        store.put_record(record).await?;
    }
    Ok(records.len())
}

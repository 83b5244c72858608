//! Durable key-value store for exchange-rate API responses
//!
//! Stores one JSON record per request URL in an XDG-compliant cache directory
//! (`~/.cache/fluxrate/rates/` on Linux). Each record carries the original
//! request URL, the decoded response payload, and the time of the last
//! successful write, so the full record set can be exported and restored
//! as a flat list.

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::warn;

/// Name of the record collection directory inside the cache dir
const STORE_DIR: &str = "rates";

/// Errors that can occur when reading or writing cache records
///
/// These are internal to the caching layer: callers treat a failed read as
/// a cache miss and a failed write as a no-op, so none of them ever fails
/// an in-flight fetch.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a record file failed
    #[error("cache I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A record file did not contain a valid cache record
    #[error("cache record is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A single cached API response
///
/// `key` is the full request URL including query parameters and uniquely
/// identifies the record. `payload` and `stored_at` are always written
/// together in one file write, so a record is never partially updated.
/// The serialized field names (`key`, `payload`, `storedAt`) are the backup
/// interchange format and must stay stable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRecord {
    /// The request URL this record caches
    pub key: String,
    /// The decoded JSON response body
    pub payload: Value,
    /// Milliseconds since epoch of the last successful write
    pub stored_at: i64,
}

/// Handle to the on-disk record collection
///
/// Obtained from [`RateStore::open`], which returns `None` instead of an
/// error when the backing directory is unavailable. All operations are
/// asynchronous and go through `tokio::fs`.
#[derive(Debug, Clone)]
pub struct RateStore {
    /// Directory holding one JSON file per record
    dir: PathBuf,
}

impl RateStore {
    /// Opens the store in the XDG-compliant cache directory
    ///
    /// Uses `~/.cache/fluxrate/rates/` on Linux, or the equivalent platform
    /// cache path elsewhere. Returns `None` if the cache location cannot be
    /// determined or the directory cannot be created; this is not an error
    /// condition, the application simply runs without a cache.
    pub async fn open() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "fluxrate")?;
        Self::open_at(project_dirs.cache_dir().join(STORE_DIR)).await
    }

    /// Opens the store at a custom directory
    ///
    /// Used by the `--cache-dir` CLI flag and by tests. Creating the
    /// directory is idempotent; opening an existing collection never wipes
    /// its records.
    pub async fn open_at(dir: PathBuf) -> Option<Self> {
        match fs::create_dir_all(&dir).await {
            Ok(()) => Some(Self { dir }),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "rate cache unavailable");
                None
            }
        }
    }

    /// Returns the record file path for the given request URL
    ///
    /// URLs are not valid file names, so records are stored under the
    /// SHA-256 hex digest of the key. The key itself is kept inside the
    /// record for export.
    fn record_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{:x}.json", digest))
    }

    /// Looks up the record for a request URL
    ///
    /// Returns `Ok(None)` when no record exists for the key. Read or parse
    /// failures are reported as `Err` so callers can distinguish "not found"
    /// from "unreadable"; both are treated as a cache miss by the fetcher.
    pub async fn get(&self, key: &str) -> Result<Option<CacheRecord>, StoreError> {
        let path = self.record_path(key);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Upserts the record for a request URL, stamped with the current time
    ///
    /// A write replaces any existing record for the same key (last write
    /// wins). `stored_at` always comes from the clock at write time, so it
    /// is monotonically non-decreasing across writes to the same key.
    pub async fn put(&self, key: &str, payload: &Value) -> Result<(), StoreError> {
        self.put_record(&CacheRecord {
            key: key.to_string(),
            payload: payload.clone(),
            stored_at: Utc::now().timestamp_millis(),
        })
        .await
    }

    /// Upserts a record preserving its own `stored_at`
    ///
    /// Used by backup import, which replays previously exported records
    /// with their original timestamps.
    pub async fn put_record(&self, record: &CacheRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.key), json).await?;
        Ok(())
    }

    /// Returns every record in the store as a flat list, sorted by key
    ///
    /// Unreadable record files are skipped with a warning rather than
    /// failing the whole export.
    pub async fn export_records(&self) -> Result<Vec<CacheRecord>, StoreError> {
        let mut records = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            match serde_json::from_str::<CacheRecord>(&content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable cache record");
                }
            }
        }
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(records)
    }
}

/// Process-wide store handle, initialized once on first use
static SHARED_STORE: OnceCell<Option<RateStore>> = OnceCell::const_new();

/// Returns the shared process-wide store handle
///
/// The store is opened lazily on the first call and the result (including
/// an unavailable store) is memoized; every caller reuses the same handle.
pub async fn shared() -> Option<&'static RateStore> {
    SHARED_STORE.get_or_init(RateStore::open).await.as_ref()
}

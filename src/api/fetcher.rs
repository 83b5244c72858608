//! Cache-aware fetcher for exchange-rate API requests
//!
//! Every request goes through [`RateFetcher::fetch_with_cache`], which
//! consults the persistent store before the network. Responses younger than
//! the TTL are served directly from the cache; anything older triggers a
//! refresh, and a refresh that fails degrades to the last cached payload
//! for that URL regardless of its age. Only a failure with no cached data
//! at all reaches the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::store::{CacheRecord, RateStore};

/// Maximum age in milliseconds a cached response may have and still be
/// served without a network call
pub const CACHE_TTL_MS: i64 = 10 * 60 * 1000; // 10 minutes

/// Default network timeout for rate API requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when fetching from the rate API
///
/// Both variants are recovered from inside `fetch_with_cache` whenever a
/// cached record exists for the URL; they only surface on a cold miss.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON
    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Network seam for the fetcher
///
/// The production implementation is [`HttpTransport`]; tests substitute a
/// mock to control responses and count calls.
#[async_trait]
pub trait RateTransport: Send + Sync {
    /// Performs the network request for `url` and decodes the body as JSON
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Creates a transport with the default request timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl RateTransport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Fetcher that mediates API requests through the persistent store
///
/// Holds an optional store handle: with `None` the cache is disabled and
/// every call goes straight to the network, which is how the application
/// degrades when the store fails to open.
pub struct RateFetcher {
    transport: Arc<dyn RateTransport>,
    store: Option<RateStore>,
    ttl_ms: i64,
}

impl RateFetcher {
    /// Creates a fetcher with the default HTTP transport
    pub fn new(store: Option<RateStore>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), store)
    }

    /// Creates a fetcher with a custom transport
    pub fn with_transport(transport: Arc<dyn RateTransport>, store: Option<RateStore>) -> Self {
        Self {
            transport,
            store,
            ttl_ms: CACHE_TTL_MS,
        }
    }

    /// Overrides the freshness TTL in milliseconds
    #[allow(dead_code)]
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Resolves a request URL to response data, preferring fresh cache
    ///
    /// The decision sequence:
    /// 1. A cached record younger than the TTL is returned immediately,
    ///    with no network call.
    /// 2. Otherwise the URL is fetched; on success the response is written
    ///    back to the store (best effort) and returned.
    /// 3. If the fetch fails and a cached record exists, its payload is
    ///    returned no matter how stale it is.
    /// 4. If the fetch fails and nothing is cached, the error propagates.
    pub async fn fetch_with_cache(&self, url: &str) -> Result<Value, FetchError> {
        let cached = self.read_cached(url).await;

        if let Some(record) = &cached {
            let age_ms = Utc::now().timestamp_millis() - record.stored_at;
            if age_ms < self.ttl_ms {
                debug!(url, age_ms, "serving fresh cached response");
                return Ok(record.payload.clone());
            }
        }

        match self.transport.fetch(url).await {
            Ok(payload) => {
                if let Some(store) = &self.store {
                    // Best effort: a failed write never fails the fetch
                    if let Err(e) = store.put(url, &payload).await {
                        warn!(url, error = %e, "failed to cache response");
                    }
                }
                Ok(payload)
            }
            Err(err) => match cached {
                Some(record) => {
                    warn!(url, error = %err, "request failed, serving stale cached response");
                    Ok(record.payload)
                }
                None => Err(err),
            },
        }
    }

    /// Reads the cached record for a URL, absorbing store failures as a miss
    async fn read_cached(&self, url: &str) -> Option<CacheRecord> {
        let store = self.store.as_ref()?;
        match store.get(url).await {
            Ok(record) => record,
            Err(e) => {
                warn!(url, error = %e, "cache read failed");
                None
            }
        }
    }
}

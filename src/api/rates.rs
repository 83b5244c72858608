//! Frankfurter API client for exchange-rate data
//!
//! Builds the endpoint URLs for latest rates and historical ranges, routes
//! them through the cache-aware fetcher, and decodes the cached JSON
//! payloads into typed structs.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::fetcher::{FetchError, RateFetcher};
use crate::store::RateStore;

/// Base URL for the Frankfurter exchange-rate API
pub const API_URL: &str = "https://api.frankfurter.app";

/// Errors that can occur when fetching exchange-rate data
#[derive(Debug, Error)]
pub enum RatesError {
    /// The request failed and no cached fallback existed
    #[error("Failed to fetch exchange rates: {0}")]
    Fetch(#[from] FetchError),

    /// The payload did not match the expected endpoint shape
    #[error("Unexpected rate API response: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Latest quotes against a base currency
///
/// Response shape of `GET /latest?from={base}`: one rate per quoted
/// currency, valid for the returned business date.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRates {
    /// Amount the rates are quoted for (the API quotes per 1 unit)
    pub amount: f64,
    /// Base currency code
    pub base: String,
    /// Business date of the quotes
    pub date: NaiveDate,
    /// Quoted currency code to rate
    pub rates: BTreeMap<String, f64>,
}

impl LatestRates {
    /// Returns the quoted rate for a currency code, if present
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

/// Historical quotes for a date range
///
/// Response shape of `GET /{start}..{end}?from={from}&to={to}`: a map of
/// business dates to per-currency rates. Weekends and holidays have no
/// entries.
#[derive(Debug, Clone, Deserialize)]
pub struct RateHistory {
    /// Amount the rates are quoted for
    pub amount: f64,
    /// Base currency code
    pub base: String,
    /// First business date in the range
    pub start_date: NaiveDate,
    /// Last business date in the range
    pub end_date: NaiveDate,
    /// Business date to quoted rates
    pub rates: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
}

impl RateHistory {
    /// Returns the (date, rate) series for one quoted currency, in date order
    ///
    /// Dates whose quotes lack the currency are skipped.
    pub fn series_for(&self, code: &str) -> Vec<(NaiveDate, f64)> {
        self.rates
            .iter()
            .filter_map(|(date, quotes)| quotes.get(code).map(|rate| (*date, *rate)))
            .collect()
    }
}

/// Builds the latest-rates endpoint URL for a base currency
pub fn latest_url(base: &str) -> String {
    format!("{}/latest?from={}", API_URL, base)
}

/// Builds the historical-range endpoint URL for a currency pair
pub fn history_url(from: &str, to: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!("{}/{}..{}?from={}&to={}", API_URL, start, end, from, to)
}

/// Client for fetching exchange-rate data through the cache
pub struct RatesClient {
    fetcher: RateFetcher,
}

impl RatesClient {
    /// Creates a client with the default HTTP transport
    pub fn new(store: Option<RateStore>) -> Self {
        Self {
            fetcher: RateFetcher::new(store),
        }
    }

    /// Creates a client around an existing fetcher
    pub fn with_fetcher(fetcher: RateFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetches the latest rates quoted against `base`
    pub async fn fetch_latest(&self, base: &str) -> Result<LatestRates, RatesError> {
        let payload = self.fetcher.fetch_with_cache(&latest_url(base)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Fetches the rate history for a currency pair over the last `days` days
    ///
    /// The range ends today and starts `days` days earlier, matching the
    /// history filters offered by the UI (7/30/90/365 days).
    pub async fn fetch_history(
        &self,
        from: &str,
        to: &str,
        days: u32,
    ) -> Result<RateHistory, RatesError> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(i64::from(days));
        let payload = self
            .fetcher
            .fetch_with_cache(&history_url(from, to, start, end))
            .await?;
        Ok(serde_json::from_value(payload)?)
    }
}

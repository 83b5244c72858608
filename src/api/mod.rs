//! Exchange-rate API access
//!
//! This module mediates every request to the rate API through the persistent
//! store: fresh cached responses are served without touching the network,
//! and failed requests fall back to stale cached data when any exists. The
//! typed client in [`rates`] builds the endpoint URLs and decodes payloads
//! into domain structs.

pub mod fetcher;
pub mod rates;

pub use fetcher::{FetchError, HttpTransport, RateFetcher, RateTransport};
pub use rates::{LatestRates, RateHistory, RatesClient, RatesError, API_URL};

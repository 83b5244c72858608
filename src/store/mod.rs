//! Persistent store for exchange-rate API responses
//!
//! This module provides a durable key-value store mapping request URLs to
//! cached API responses. The store is best-effort by design: if the backing
//! directory cannot be created the rest of the application keeps working
//! with the cache silently disabled.

mod rate_store;

pub use rate_store::{shared, CacheRecord, RateStore, StoreError};

//! Core data models for FluxRate
//!
//! This module contains the data types used throughout the application for
//! representing currencies, completed conversions, and ticker rows.

pub mod currency;

pub use currency::{all_currencies, get_currency_by_code, Currency};

use chrono::NaiveDate;
use serde::Serialize;

/// A completed currency conversion
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Amount in the source currency
    pub amount: f64,
    /// Source currency code
    pub from: String,
    /// Target currency code
    pub to: String,
    /// Exchange rate applied (target units per source unit)
    pub rate: f64,
    /// Converted amount in the target currency
    pub result: f64,
    /// Business date of the quote; `None` for same-currency conversions,
    /// which never consult the rate API
    pub date: Option<NaiveDate>,
}

/// One row of the exchange-rate ticker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerEntry {
    /// Quoted currency code
    pub code: String,
    /// Display name, falling back to the code for unknown currencies
    pub name: String,
    /// Rate against the ticker's base currency
    pub rate: f64,
}

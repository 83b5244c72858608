//! Static currency data for the supported conversion set
//!
//! This module contains the static list of the 31 currencies quoted by the
//! Frankfurter API, with display names and the flag country code used by
//! downstream presentation.

use serde::Serialize;

/// A supported currency
///
/// Uses `&'static str` for string fields to allow static initialization
/// of the CURRENCIES array.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Currency {
    /// ISO 4217 currency code
    pub code: &'static str,
    /// Human-readable display name
    pub name: &'static str,
    /// Lowercase ISO 3166-1 alpha-2 country code for the flag
    pub country: &'static str,
}

/// Static array of all supported currencies, sorted by code
pub static CURRENCIES: [Currency; 31] = [
    Currency { code: "AUD", name: "Australian Dollar", country: "au" },
    Currency { code: "BGN", name: "Bulgarian Lev", country: "bg" },
    Currency { code: "BRL", name: "Brazilian Real", country: "br" },
    Currency { code: "CAD", name: "Canadian Dollar", country: "ca" },
    Currency { code: "CHF", name: "Swiss Franc", country: "ch" },
    Currency { code: "CNY", name: "Chinese Yuan", country: "cn" },
    Currency { code: "CZK", name: "Czech Koruna", country: "cz" },
    Currency { code: "DKK", name: "Danish Krone", country: "dk" },
    Currency { code: "EUR", name: "Euro", country: "eu" },
    Currency { code: "GBP", name: "British Pound", country: "gb" },
    Currency { code: "HKD", name: "Hong Kong Dollar", country: "hk" },
    Currency { code: "HUF", name: "Hungarian Forint", country: "hu" },
    Currency { code: "IDR", name: "Indonesian Rupiah", country: "id" },
    Currency { code: "ILS", name: "Israeli New Shekel", country: "il" },
    Currency { code: "INR", name: "Indian Rupee", country: "in" },
    Currency { code: "ISK", name: "Icelandic Krona", country: "is" },
    Currency { code: "JPY", name: "Japanese Yen", country: "jp" },
    Currency { code: "KRW", name: "South Korean Won", country: "kr" },
    Currency { code: "MXN", name: "Mexican Peso", country: "mx" },
    Currency { code: "MYR", name: "Malaysian Ringgit", country: "my" },
    Currency { code: "NOK", name: "Norwegian Krone", country: "no" },
    Currency { code: "NZD", name: "New Zealand Dollar", country: "nz" },
    Currency { code: "PHP", name: "Philippine Peso", country: "ph" },
    Currency { code: "PLN", name: "Polish Zloty", country: "pl" },
    Currency { code: "RON", name: "Romanian Leu", country: "ro" },
    Currency { code: "SEK", name: "Swedish Krona", country: "se" },
    Currency { code: "SGD", name: "Singapore Dollar", country: "sg" },
    Currency { code: "THB", name: "Thai Baht", country: "th" },
    Currency { code: "TRY", name: "Turkish Lira", country: "tr" },
    Currency { code: "USD", name: "United States Dollar", country: "us" },
    Currency { code: "ZAR", name: "South African Rand", country: "za" },
];

/// Returns all supported currencies in code order
pub fn all_currencies() -> &'static [Currency] {
    &CURRENCIES
}

/// Get a currency by its ISO 4217 code
///
/// The lookup is case-insensitive, so user input like "usd" resolves to USD.
///
/// # Arguments
///
/// * `code` - The currency code (e.g., "USD", "inr")
///
/// # Returns
///
/// Returns `Some(&Currency)` if found, `None` otherwise
pub fn get_currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|currency| currency.code.eq_ignore_ascii_case(code))
}

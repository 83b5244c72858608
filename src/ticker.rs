//! Exchange-rate ticker rows
//!
//! Turns a latest-rates quote into the ordered list of ticker rows shown
//! by the `rates` command, joining each quoted code with its display name
//! from the static currency table.

use crate::api::LatestRates;
use crate::data::{get_currency_by_code, TickerEntry};

/// Builds ticker rows for every currency quoted against the base
///
/// Rows come out in code order. Codes missing from the static currency
/// table keep their bare code as the display name.
pub fn ticker_entries(quote: &LatestRates) -> Vec<TickerEntry> {
    quote
        .rates
        .iter()
        .map(|(code, rate)| TickerEntry {
            code: code.clone(),
            name: get_currency_by_code(code)
                .map(|currency| currency.name.to_string())
                .unwrap_or_else(|| code.clone()),
            rate: *rate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn quote_with(rates: &[(&str, f64)]) -> LatestRates {
        LatestRates {
            amount: 1.0,
            base: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_ticker_rows_in_code_order_with_names() {
        let quote = quote_with(&[("INR", 83.1), ("EUR", 0.92), ("GBP", 0.78)]);

        let entries = ticker_entries(&quote);

        assert_eq!(
            entries,
            vec![
                TickerEntry {
                    code: "EUR".to_string(),
                    name: "Euro".to_string(),
                    rate: 0.92,
                },
                TickerEntry {
                    code: "GBP".to_string(),
                    name: "British Pound".to_string(),
                    rate: 0.78,
                },
                TickerEntry {
                    code: "INR".to_string(),
                    name: "Indian Rupee".to_string(),
                    rate: 83.1,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let quote = quote_with(&[("XYZ", 2.0)]);

        let entries = ticker_entries(&quote);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "XYZ", "Unknown codes display as themselves");
    }

    #[test]
    fn test_empty_quote_yields_no_rows() {
        let quote = quote_with(&[]);

        assert!(ticker_entries(&quote).is_empty());
    }
}

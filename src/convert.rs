//! Currency conversion arithmetic and display formatting
//!
//! Pure logic over a latest-rates quote: applying a quoted rate to an
//! amount, the same-currency short-circuit, and the fixed-precision
//! formatting used by the CLI output (rates to 4 decimal places, amounts
//! to 2 with thousands separators).

use thiserror::Error;

use crate::api::LatestRates;
use crate::data::Conversion;

/// Errors that can occur when converting between currencies
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The quote does not include a rate for the target currency
    #[error("No rate quoted for '{0}'")]
    MissingRate(String),
}

/// Converts an amount using a latest-rates quote
///
/// The quote's base currency is the source; `to` selects the quoted rate.
///
/// # Arguments
/// * `quote` - Latest rates quoted against the source currency
/// * `amount` - Amount in the source currency
/// * `to` - Target currency code
///
/// # Returns
/// * `Ok(Conversion)` with the applied rate and result
/// * `Err(ConvertError::MissingRate)` if the quote lacks the target currency
pub fn convert(quote: &LatestRates, amount: f64, to: &str) -> Result<Conversion, ConvertError> {
    let rate = quote
        .rate_for(to)
        .ok_or_else(|| ConvertError::MissingRate(to.to_string()))?;

    Ok(Conversion {
        amount,
        from: quote.base.clone(),
        to: to.to_string(),
        rate,
        result: rate * amount,
        date: Some(quote.date),
    })
}

/// Builds the same-currency conversion without consulting the rate API
///
/// Converting a currency to itself always uses rate 1.0 and carries no
/// quote date.
pub fn identity_conversion(amount: f64, code: &str) -> Conversion {
    Conversion {
        amount,
        from: code.to_string(),
        to: code.to_string(),
        rate: 1.0,
        result: amount,
        date: None,
    }
}

/// Formats an exchange rate to 4 decimal places
pub fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// Formats a monetary amount to 2 decimal places with thousands separators
pub fn format_amount(value: f64) -> String {
    let unsigned = format!("{:.2}", value.abs());
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .unwrap_or((unsigned.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn sample_quote() -> LatestRates {
        let mut rates = BTreeMap::new();
        rates.insert("EUR".to_string(), 0.9217);
        rates.insert("INR".to_string(), 83.1);
        LatestRates {
            amount: 1.0,
            base: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            rates,
        }
    }

    #[test]
    fn test_convert_applies_quoted_rate() {
        let quote = sample_quote();

        let conversion = convert(&quote, 100.0, "INR").expect("INR is quoted");

        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "INR");
        assert!((conversion.rate - 83.1).abs() < 1e-9);
        assert!((conversion.result - 8310.0).abs() < 1e-9);
        assert_eq!(conversion.date, NaiveDate::from_ymd_opt(2026, 8, 5));
    }

    #[test]
    fn test_convert_zero_amount() {
        let quote = sample_quote();

        let conversion = convert(&quote, 0.0, "EUR").expect("EUR is quoted");

        assert_eq!(conversion.result, 0.0);
        assert!((conversion.rate - 0.9217).abs() < 1e-9);
    }

    #[test]
    fn test_convert_missing_rate() {
        let quote = sample_quote();

        let result = convert(&quote, 100.0, "JPY");

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("JPY"));
    }

    #[test]
    fn test_identity_conversion_uses_rate_one() {
        let conversion = identity_conversion(42.5, "USD");

        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "USD");
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.result, 42.5);
        assert!(conversion.date.is_none(), "Identity conversion has no quote date");
    }

    #[test]
    fn test_format_rate_four_decimals() {
        assert_eq!(format_rate(83.1), "83.1000");
        assert_eq!(format_rate(0.92171), "0.9217");
        assert_eq!(format_rate(1.0), "1.0000");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.994), "999.99");
        assert_eq!(format_amount(8310.0), "8,310.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }
}

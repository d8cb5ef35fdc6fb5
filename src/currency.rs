//! Supported currency tables and display formatting.
//!
//! All monetary amounts in the marketplace are stored in IDR; display
//! currencies are derived by multiplying with a rate from the fetched table.

use std::collections::HashMap;

/// Reference currency for all stored amounts and cached rates.
pub const BASE_CURRENCY: &str = "IDR";

/// A selectable display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
}

/// The canonical currency set offered by the marketplace UI.
pub const SUPPORTED_CURRENCIES: [CurrencyInfo; 11] = [
    CurrencyInfo {
        code: "IDR",
        label: "Indonesia (Rupiah)",
        symbol: "Rp",
    },
    CurrencyInfo {
        code: "USD",
        label: "United States (Dollar)",
        symbol: "$",
    },
    CurrencyInfo {
        code: "SGD",
        label: "Singapore (Dollar)",
        symbol: "S$",
    },
    CurrencyInfo {
        code: "MYR",
        label: "Malaysia (Ringgit)",
        symbol: "RM",
    },
    CurrencyInfo {
        code: "THB",
        label: "Thailand (Baht)",
        symbol: "฿",
    },
    CurrencyInfo {
        code: "PHP",
        label: "Philippines (Peso)",
        symbol: "₱",
    },
    CurrencyInfo {
        code: "VND",
        label: "Vietnam (Dong)",
        symbol: "₫",
    },
    CurrencyInfo {
        code: "BND",
        label: "Brunei (Dollar)",
        symbol: "B$",
    },
    CurrencyInfo {
        code: "KHR",
        label: "Cambodia (Riel)",
        symbol: "៛",
    },
    CurrencyInfo {
        code: "LAK",
        label: "Laos (Kip)",
        symbol: "₭",
    },
    CurrencyInfo {
        code: "MMK",
        label: "Myanmar (Kyat)",
        symbol: "K",
    },
];

// Frankfurter supports the major currencies (USD, SGD, MYR, THB, PHP, ...)
// but not the smaller SE Asian ones. These are hand-estimated relative to IDR
// and only used when live data does not carry the code.
pub const FALLBACK_RATES: [(&str, f64); 6] = [
    ("IDR", 1.0),
    ("VND", 1.62),
    ("BND", 0.000085), // pegged to SGD approx
    ("KHR", 0.26),
    ("LAK", 1.38),
    ("MMK", 0.13),
];

/// Fallback table as an owned map, ready to be merged under live rates.
pub fn fallback_rates() -> HashMap<String, f64> {
    FALLBACK_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

/// Display symbol for a currency code, if it is a supported currency.
pub fn symbol_for(code: &str) -> Option<&'static str> {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
}

fn fraction_digits(currency: &str) -> usize {
    // Strong currencies show cents; rupiah-scale currencies display whole units.
    match currency {
        "USD" | "SGD" | "BND" => 2,
        _ => 0,
    }
}

fn group_thousands(value: f64, digits: usize) -> String {
    let formatted = format!("{value:.digits$}");
    let (number, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, number) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(number.len() + number.len() / 3);
    for (i, ch) in number.chars().enumerate() {
        if i > 0 && (number.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Converts an IDR amount to `currency` and renders it as `"<symbol> <number>"`.
///
/// Pure and infallible: a missing rate degrades to 1:1 display and a missing
/// symbol degrades to the raw currency code, so a balance stays renderable
/// even when the rate table is incomplete.
pub fn format_currency(amount: f64, currency: &str, rates: &HashMap<String, f64>) -> String {
    let rate = rates.get(currency).copied().unwrap_or(1.0);
    let converted = amount * rate;
    let symbol = symbol_for(currency).unwrap_or(currency);
    let digits = fraction_digits(currency);

    format!("{} {}", symbol, group_thousands(converted, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect()
    }

    #[test]
    fn test_idr_whole_unit_grouping() {
        let result = format_currency(1_500_000.0, "IDR", &rates(&[("IDR", 1.0)]));
        assert_eq!(result, "Rp 1,500,000");
    }

    #[test]
    fn test_usd_two_fraction_digits() {
        let result = format_currency(
            1_500_000.0,
            "USD",
            &rates(&[("IDR", 1.0), ("USD", 0.000065)]),
        );
        assert_eq!(result, "$ 97.50");
    }

    #[test]
    fn test_sgd_two_fraction_digits() {
        let result = format_currency(1_000_000.0, "SGD", &rates(&[("SGD", 0.000088)]));
        assert_eq!(result, "S$ 88.00");
    }

    #[test]
    fn test_unknown_currency_uses_code_and_unit_rate() {
        let result = format_currency(1000.0, "XYZ", &rates(&[("IDR", 1.0)]));
        assert_eq!(result, "XYZ 1,000");
    }

    #[test]
    fn test_missing_rate_defaults_to_one() {
        let result = format_currency(2500.0, "THB", &rates(&[("IDR", 1.0)]));
        assert_eq!(result, "฿ 2,500");
    }

    #[test]
    fn test_negative_amount_keeps_sign_before_grouping() {
        let result = format_currency(-1_234_567.0, "IDR", &rates(&[("IDR", 1.0)]));
        assert_eq!(result, "Rp -1,234,567");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let table = rates(&[("USD", 0.000065)]);
        let first = format_currency(1_500_000.0, "USD", &table);
        let second = format_currency(1_500_000.0, "USD", &table);
        assert_eq!(first, second);
    }

    #[test]
    fn test_supported_currencies_enumeration() {
        assert_eq!(SUPPORTED_CURRENCIES.len(), 11);
        assert_eq!(SUPPORTED_CURRENCIES[0].code, BASE_CURRENCY);
        assert_eq!(symbol_for("MYR"), Some("RM"));
        assert_eq!(symbol_for("XYZ"), None);
    }

    #[test]
    fn test_fallback_table_pins_base() {
        let fallback = fallback_rates();
        assert_eq!(fallback.get(BASE_CURRENCY), Some(&1.0));
        assert_eq!(fallback.len(), 6);
    }
}

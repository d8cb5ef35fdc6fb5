//! Terminal rendering for the rate table and currency list.

use crate::currency::{BASE_CURRENCY, SUPPORTED_CURRENCIES, format_currency};
use crate::ui;
use comfy_table::Cell;
use std::collections::HashMap;

/// Renders the supported currency set against a fetched rate table. The
/// sample column shows how a fixed rupiah amount displays in each currency.
pub fn rates_table(rates: &HashMap<String, f64>) -> String {
    const SAMPLE_AMOUNT: f64 = 100_000.0;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (per {BASE_CURRENCY})")),
        ui::header_cell(&format!("Rp {:.0}", SAMPLE_AMOUNT)),
    ]);

    for currency in &SUPPORTED_CURRENCIES {
        let rate = rates
            .get(currency.code)
            .map_or("N/A".to_string(), |r| format!("{r:.6}"));

        table.add_row(vec![
            Cell::new(currency.code),
            Cell::new(currency.label),
            ui::numeric_cell(&rate),
            ui::numeric_cell(&format_currency(SAMPLE_AMOUNT, currency.code, rates)),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Exchange Rates", ui::StyleType::Title),
        table
    )
}

/// Renders the static supported currency list; no rate data involved.
pub fn currencies_table() -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Symbol"),
    ]);

    for currency in &SUPPORTED_CURRENCIES {
        table.add_row(vec![
            Cell::new(currency.code),
            Cell::new(currency.label),
            Cell::new(currency.symbol),
        ]);
    }

    table.to_string()
}

pub fn conversion_line(amount: f64, currency: &str, rates: &HashMap<String, f64>) -> String {
    format!(
        "{} {}",
        ui::style_text(&format!("Rp {amount:.0} ->"), ui::StyleType::Subtle),
        format_currency(amount, currency, rates)
    )
}

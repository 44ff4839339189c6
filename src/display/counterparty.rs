//! Counterparty display formatting
//!
//! Formats the lending and borrowing lists for terminal output.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::Counterparty;

/// Used when the configured date format cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format the people who owe the owner money, one per line
pub fn format_lending_list(assets: &[Counterparty], symbol: &str, date_format: &str) -> String {
    if assets.is_empty() {
        return "  (No active loans)\n".to_string();
    }

    let mut output = String::new();
    for person in assets {
        let date = person
            .date
            .map(|d| format_date(d, date_format))
            .unwrap_or_else(|| "N/A".to_string());
        output.push_str(&format!(
            "  {:<10} | {}: {}\n",
            date,
            person.name,
            person.amount.format_with_symbol(symbol)
        ));
    }
    output
}

fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

/// Format the people the owner owes money to, one per line
pub fn format_borrowing_list(liabilities: &[Counterparty], symbol: &str) -> String {
    if liabilities.is_empty() {
        return "  (You are debt-free!)\n".to_string();
    }

    liabilities
        .iter()
        .map(|p| format!("  {}: {}\n", p.name, p.amount.format_with_symbol(symbol)))
        .collect()
}

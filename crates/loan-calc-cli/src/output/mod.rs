pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod schedule;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Display formatting for a named numeric field: percentages, month counts
/// and plain counts are kept as numbers, everything else is dollars.
pub fn format_number(key: &str, n: f64) -> String {
    let key = key.rsplit('.').next().unwrap_or(key);
    if key.contains("percent") || key.contains("rate") || key == "loan_to_value" {
        loan_calc_core::currency::format_percent(n)
    } else if key.contains("months") || key == "month" || key == "shares" {
        let rounded = loan_calc_core::currency::round_percent(n);
        rounded.normalize().to_string()
    } else {
        loan_calc_core::currency::format_usd(n)
    }
}

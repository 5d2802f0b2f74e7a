//! USD rounding and formatting for display and export.
//!
//! Nothing in the engine rounds. Values are converted to [`Decimal`] here, at
//! the presentation boundary, so cents are exact in tables and CSV files.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, midpoint away from zero. Non-finite input rounds to 0.
pub fn round_currency(value: f64) -> Decimal {
    round_to(value, 2)
}

/// Round a percentage for display (two decimal places).
pub fn round_percent(value: f64) -> Decimal {
    round_to(value, 2)
}

fn round_to(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as US dollars: `$1,199.10`, `-$5.00`.
pub fn format_usd(value: f64) -> String {
    let rounded = round_currency(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Format a percentage with two decimals: `15.40%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", round_percent(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(1199.101050), dec!(1199.10));
        assert_eq!(round_currency(0.125), dec!(0.13));
        assert_eq!(round_currency(-0.125), dec!(-0.13));
        assert_eq!(round_currency(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_usd(1199.101), "$1,199.10");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_usd(100.0), "$100.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-5.0), "-$5.00");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15.404), "15.40%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}

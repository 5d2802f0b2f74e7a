//! Normalisation of raw form input.
//!
//! Calculators never reject input. Anything non-numeric, non-finite or
//! negative is treated as zero before it reaches the arithmetic, and the
//! result is a visibly trivial answer rather than an error.

use log::debug;

use crate::error::CalcError;
use crate::CalcResult;

/// Parse a form field such as `"$250,000"`, `"6.5%"` or `" 360 "`.
///
/// Returns 0 for anything that does not parse to a finite, non-negative number.
pub fn parse_amount(raw: &str) -> f64 {
    match clean(raw).parse::<f64>() {
        Ok(v) => sanitize(v),
        Err(_) => 0.0,
    }
}

/// Same cleaning as [`parse_amount`], but reports what was wrong instead of
/// absorbing it. Used by the CLI, where a typo deserves a message.
pub fn parse_amount_strict(field: &str, raw: &str) -> CalcResult<f64> {
    let cleaned = clean(raw);
    let value: f64 = cleaned.parse().map_err(|_| CalcError::InvalidInput {
        field: field.into(),
        reason: format!("'{raw}' is not a number"),
    })?;
    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field: field.into(),
            reason: "Value must be finite".into(),
        });
    }
    if value < 0.0 {
        return Err(CalcError::InvalidInput {
            field: field.into(),
            reason: "Value must be non-negative".into(),
        });
    }
    Ok(value)
}

/// Clamp an already-numeric input: NaN, infinities and negatives become 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// [`sanitize`], recording a warning when the value had to be replaced.
pub fn sanitize_field(field: &str, value: f64, warnings: &mut Vec<String>) -> f64 {
    let clean = sanitize(value);
    if clean != value {
        debug!("normalised {field} from {value} to 0");
        warnings.push(format!("{field} was {value}; treated as 0"));
    }
    clean
}

fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | '_') && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatted_amounts() {
        assert_eq!(parse_amount("$250,000"), 250_000.0);
        assert_eq!(parse_amount("6.5%"), 6.5);
        assert_eq!(parse_amount("  360 "), 360.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-500"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_strict_reports_field() {
        let err = parse_amount_strict("principal", "12x").unwrap_err();
        assert!(err.to_string().contains("principal"));
        assert!(parse_amount_strict("rate", "-1").is_err());
        assert_eq!(parse_amount_strict("rate", "$1,000").unwrap(), 1000.0);
    }

    #[test]
    fn test_sanitize_field_warns_once() {
        let mut warnings = Vec::new();
        assert_eq!(sanitize_field("principal", -10.0, &mut warnings), 0.0);
        assert_eq!(sanitize_field("rate", 0.0, &mut warnings), 0.0);
        assert_eq!(sanitize_field("term", 5.0, &mut warnings), 5.0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("principal"));
    }

    #[test]
    fn test_sanitize_nan_warns() {
        let mut warnings = Vec::new();
        assert_eq!(sanitize_field("price", f64::NAN, &mut warnings), 0.0);
        assert_eq!(warnings.len(), 1);
    }
}

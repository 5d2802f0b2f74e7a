use serde::{Deserialize, Serialize};

/// Monetary amounts in USD. Kept at full f64 precision through every
/// computation; rounding to cents happens in [`crate::currency`] only.
pub type Money = f64;

/// Rates expressed as percentages (6.0 = 6%), the way the forms collect them.
pub type Percent = f64;

/// Loan term, entered either in months or in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Months(u32),
    Years(u32),
}

impl Term {
    pub fn months(self) -> u32 {
        match self {
            Term::Months(m) => m,
            Term::Years(y) => y.saturating_mul(12),
        }
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::Years(30)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_conversion() {
        assert_eq!(Term::Months(24).months(), 24);
        assert_eq!(Term::Years(30).months(), 360);
        assert_eq!(Term::Years(u32::MAX).months(), u32::MAX);
    }

    #[test]
    fn test_term_serde_shape() {
        let t: Term = serde_json::from_str(r#"{"years": 15}"#).unwrap();
        assert_eq!(t, Term::Years(15));
        assert_eq!(serde_json::to_string(&Term::Months(6)).unwrap(), r#"{"months":6}"#);
    }

    #[test]
    fn test_metadata_precision() {
        let out = with_metadata("m", &serde_json::json!({}), vec![], 3, 1.0_f64);
        assert_eq!(out.metadata.precision, "f64");
        assert_eq!(out.metadata.computation_time_us, 3);
    }
}

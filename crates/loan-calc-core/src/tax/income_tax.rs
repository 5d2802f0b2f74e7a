use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::brackets::{progressive_tax, validate_brackets, Bracket, TaxBreakdown};
use crate::input::sanitize_field;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

// ---------------------------------------------------------------------------
// Bracket tables
// ---------------------------------------------------------------------------

// Illustrative bracket tables. They are applied to gross income with no
// deductions or credits, and are pinned by regression tests: change them only
// together with the published table.

pub const SINGLE_BRACKETS: [Bracket; 7] = [
    Bracket::up_to(11_600.0, 10.0),
    Bracket::up_to(47_150.0, 12.0),
    Bracket::up_to(100_525.0, 22.0),
    Bracket::up_to(191_950.0, 24.0),
    Bracket::up_to(243_725.0, 32.0),
    Bracket::up_to(609_350.0, 35.0),
    Bracket::above(37.0),
];

pub const MARRIED_JOINT_BRACKETS: [Bracket; 7] = [
    Bracket::up_to(23_200.0, 10.0),
    Bracket::up_to(94_300.0, 12.0),
    Bracket::up_to(201_050.0, 22.0),
    Bracket::up_to(383_900.0, 24.0),
    Bracket::up_to(487_450.0, 32.0),
    Bracket::up_to(731_200.0, 35.0),
    Bracket::above(37.0),
];

pub const MARRIED_SEPARATE_BRACKETS: [Bracket; 7] = [
    Bracket::up_to(11_600.0, 10.0),
    Bracket::up_to(47_150.0, 12.0),
    Bracket::up_to(100_525.0, 22.0),
    Bracket::up_to(191_950.0, 24.0),
    Bracket::up_to(243_725.0, 32.0),
    Bracket::up_to(365_600.0, 35.0),
    Bracket::above(37.0),
];

pub const HEAD_OF_HOUSEHOLD_BRACKETS: [Bracket; 7] = [
    Bracket::up_to(16_550.0, 10.0),
    Bracket::up_to(63_100.0, 12.0),
    Bracket::up_to(100_500.0, 22.0),
    Bracket::up_to(191_950.0, 24.0),
    Bracket::up_to(243_700.0, 32.0),
    Bracket::up_to(609_350.0, 35.0),
    Bracket::above(37.0),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn brackets(self) -> &'static [Bracket] {
        match self {
            FilingStatus::Single => &SINGLE_BRACKETS,
            FilingStatus::MarriedJoint => &MARRIED_JOINT_BRACKETS,
            FilingStatus::MarriedSeparate => &MARRIED_SEPARATE_BRACKETS,
            FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_BRACKETS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub income: Money,
    #[serde(default)]
    pub filing_status: FilingStatus,
    /// Replaces the built-in table for the filing status when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brackets: Option<Vec<Bracket>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxOutput {
    pub filing_status: FilingStatus,
    pub estimated_tax: Money,
    pub effective_rate: Percent,
    pub marginal_rate: Percent,
    pub after_tax_income: Money,
    pub breakdown: TaxBreakdown,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn estimate_income_tax(input: &IncomeTaxInput) -> ComputationOutput<IncomeTaxOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let income = sanitize_field("income", input.income, &mut warnings);

    let brackets: &[Bracket] = match &input.brackets {
        Some(custom) => match validate_brackets(custom) {
            Ok(()) => custom,
            Err(e) => {
                debug!("rejected custom bracket table: {e}");
                warnings.push(format!("{e}; using the built-in table instead"));
                input.filing_status.brackets()
            }
        },
        None => input.filing_status.brackets(),
    };

    let breakdown = progressive_tax(income, brackets);

    let output = IncomeTaxOutput {
        filing_status: input.filing_status,
        estimated_tax: breakdown.tax,
        effective_rate: breakdown.effective_rate,
        marginal_rate: breakdown.marginal_rate,
        after_tax_income: income - breakdown.tax,
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Simplified progressive income tax on gross income; illustrative brackets, no deductions",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(income: f64, filing_status: FilingStatus) -> IncomeTaxInput {
        IncomeTaxInput {
            income,
            filing_status,
            brackets: None,
        }
    }

    #[test]
    fn test_single_75k() {
        let out = estimate_income_tax(&input(75_000.0, FilingStatus::Single));
        let r = &out.result;
        assert_eq!(r.estimated_tax, 11_553.0);
        assert_abs_diff_eq!(r.effective_rate, 15.404, epsilon = 1e-9);
        assert_eq!(r.marginal_rate, 22.0);
        assert_eq!(r.after_tax_income, 63_447.0);
    }

    #[test]
    fn test_tables_are_well_formed() {
        for status in [
            FilingStatus::Single,
            FilingStatus::MarriedJoint,
            FilingStatus::MarriedSeparate,
            FilingStatus::HeadOfHousehold,
        ] {
            assert!(validate_brackets(status.brackets()).is_ok(), "{status:?}");
        }
    }

    #[test]
    fn test_married_joint_150k() {
        let out = estimate_income_tax(&input(150_000.0, FilingStatus::MarriedJoint));
        // 2,320 + 8,532 + 12,254
        assert_abs_diff_eq!(out.result.estimated_tax, 23_106.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_income() {
        let out = estimate_income_tax(&input(0.0, FilingStatus::HeadOfHousehold));
        assert_eq!(out.result.estimated_tax, 0.0);
        assert_eq!(out.result.effective_rate, 0.0);
    }

    #[test]
    fn test_invalid_custom_table_falls_back() {
        let mut i = input(75_000.0, FilingStatus::Single);
        i.brackets = Some(vec![]);
        let out = estimate_income_tax(&i);
        assert_eq!(out.result.estimated_tax, 11_553.0);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_custom_flat_table() {
        let mut i = input(50_000.0, FilingStatus::Single);
        i.brackets = Some(vec![Bracket::above(10.0)]);
        let out = estimate_income_tax(&i);
        assert_eq!(out.result.estimated_tax, 5_000.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_filing_status_json() {
        let i: IncomeTaxInput =
            serde_json::from_str(r#"{"income": 1000, "filing_status": "head_of_household"}"#)
                .unwrap();
        assert_eq!(i.filing_status, FilingStatus::HeadOfHousehold);
    }
}

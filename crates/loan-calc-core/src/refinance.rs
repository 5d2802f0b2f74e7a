//! Refinance comparison: two independent loan summaries and the savings
//! between them.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{normalize_term, summarize, LoanSummary};
use crate::input::{sanitize, sanitize_field};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Term};

const NOT_APPLICABLE: &str =
    "New payment is not lower than the current payment; break-even is not applicable";

// ---------------------------------------------------------------------------
// Break-even
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinanceSavings {
    pub monthly_savings: Money,
    /// Months of savings needed to recover closing costs. `None` means not
    /// applicable: the new payment is not lower, so closing costs are never
    /// recovered.
    pub break_even_months: Option<f64>,
}

/// Monthly savings and break-even point from two payments.
pub fn break_even(
    current_monthly_payment: Money,
    new_monthly_payment: Money,
    closing_costs: Money,
) -> RefinanceSavings {
    let monthly_savings = current_monthly_payment - new_monthly_payment;
    let break_even_months = if monthly_savings > 0.0 {
        Some(sanitize(closing_costs) / monthly_savings)
    } else {
        None
    };

    RefinanceSavings {
        monthly_savings,
        break_even_months,
    }
}

/// Quick break-even from two known monthly payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenInput {
    pub current_payment: Money,
    pub new_payment: Money,
    #[serde(default)]
    pub closing_costs: Money,
}

pub fn calculate_break_even(input: &BreakEvenInput) -> ComputationOutput<RefinanceSavings> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let current = sanitize_field("current_payment", input.current_payment, &mut warnings);
    let new = sanitize_field("new_payment", input.new_payment, &mut warnings);
    let closing_costs = sanitize_field("closing_costs", input.closing_costs, &mut warnings);

    let savings = break_even(current, new, closing_costs);
    if savings.break_even_months.is_none() {
        warnings.push(NOT_APPLICABLE.into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Break-even = closing costs / (current payment − new payment)",
        input,
        warnings,
        elapsed,
        savings,
    )
}

// ---------------------------------------------------------------------------
// Full comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceInput {
    pub current_balance: Money,
    pub current_rate: Percent,
    pub current_remaining_term: Term,
    pub new_rate: Percent,
    pub new_term: Term,
    #[serde(default)]
    pub closing_costs: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceOutput {
    pub current: LoanSummary,
    pub new: LoanSummary,
    pub closing_costs: Money,
    pub monthly_savings: Money,
    pub break_even_months: Option<f64>,
    /// Interest avoided over the life of the loans, net of closing costs.
    pub lifetime_interest_difference: Money,
}

pub fn compare_refinance(input: &RefinanceInput) -> ComputationOutput<RefinanceOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let balance = sanitize_field("current_balance", input.current_balance, &mut warnings);
    let current_rate = sanitize_field("current_rate", input.current_rate, &mut warnings);
    let new_rate = sanitize_field("new_rate", input.new_rate, &mut warnings);
    let closing_costs = sanitize_field("closing_costs", input.closing_costs, &mut warnings);

    let current_months =
        normalize_term("current_remaining_term", input.current_remaining_term, &mut warnings);
    let new_months = normalize_term("new_term", input.new_term, &mut warnings);

    let current = summarize(balance, current_rate, current_months);
    let new = summarize(balance, new_rate, new_months);

    let savings = break_even(current.monthly_payment, new.monthly_payment, closing_costs);
    if savings.break_even_months.is_none() {
        warnings.push(NOT_APPLICABLE.into());
    }
    if new_months > current_months {
        warnings.push(
            "New term is longer than the remaining term; lower payments may cost more interest overall"
                .into(),
        );
    }

    let lifetime_interest_difference = current.total_interest - new.total_interest - closing_costs;

    let output = RefinanceOutput {
        current,
        new,
        closing_costs,
        monthly_savings: savings.monthly_savings,
        break_even_months: savings.break_even_months,
        lifetime_interest_difference,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Refinance: current vs new amortized payment, break-even = closing costs / monthly savings",
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

    #[test]
    fn test_break_even_known_answer() {
        let s = break_even(1500.0, 1300.0, 3000.0);
        assert_eq!(s.monthly_savings, 200.0);
        assert_eq!(s.break_even_months, Some(15.0));
    }

    #[test]
    fn test_no_savings_is_not_applicable() {
        assert_eq!(break_even(1300.0, 1300.0, 3000.0).break_even_months, None);
        let s = break_even(1200.0, 1300.0, 3000.0);
        assert_eq!(s.monthly_savings, -100.0);
        assert_eq!(s.break_even_months, None);
    }

    #[test]
    fn test_free_refinance_breaks_even_immediately() {
        assert_eq!(break_even(1500.0, 1400.0, 0.0).break_even_months, Some(0.0));
    }

    #[test]
    fn test_compare_rate_drop() {
        let input = RefinanceInput {
            current_balance: 200_000.0,
            current_rate: 7.0,
            current_remaining_term: Term::Years(25),
            new_rate: 5.5,
            new_term: Term::Years(25),
            closing_costs: 4_000.0,
        };
        let out = compare_refinance(&input);
        let r = &out.result;
        assert!(r.monthly_savings > 0.0);
        assert_abs_diff_eq!(
            r.monthly_savings,
            r.current.monthly_payment - r.new.monthly_payment,
            epsilon = 1e-9
        );
        let months = r.break_even_months.unwrap();
        assert_abs_diff_eq!(months * r.monthly_savings, 4_000.0, epsilon = 1e-6);
        assert!(r.lifetime_interest_difference > 0.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_compare_rate_rise_warns() {
        let input = RefinanceInput {
            current_balance: 150_000.0,
            current_rate: 4.0,
            current_remaining_term: Term::Years(20),
            new_rate: 6.0,
            new_term: Term::Years(20),
            closing_costs: 2_500.0,
        };
        let out = compare_refinance(&input);
        assert_eq!(out.result.break_even_months, None);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_zero_term_warns() {
        let input = RefinanceInput {
            current_balance: 100_000.0,
            current_rate: 7.0,
            current_remaining_term: Term::Months(0),
            new_rate: 6.0,
            new_term: Term::Years(20),
            closing_costs: 1_000.0,
        };
        let out = compare_refinance(&input);
        assert_eq!(out.result.current.monthly_payment, 0.0);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.starts_with("current_remaining_term is zero")));
    }

    #[test]
    fn test_calculate_break_even_envelope() {
        let out = calculate_break_even(&BreakEvenInput {
            current_payment: 1500.0,
            new_payment: 1300.0,
            closing_costs: 3000.0,
        });
        assert_eq!(out.result.break_even_months, Some(15.0));
        assert!(out.warnings.is_empty());

        let out = calculate_break_even(&BreakEvenInput {
            current_payment: 1300.0,
            new_payment: 1400.0,
            closing_costs: 3000.0,
        });
        assert_eq!(out.result.break_even_months, None);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_break_even_serializes_null() {
        let json = serde_json::to_value(break_even(100.0, 200.0, 50.0)).unwrap();
        assert!(json["break_even_months"].is_null());
    }
}

use serde::{Deserialize, Serialize};

use super::payment::compute_monthly_payment;
use crate::types::{Money, Percent};

/// Aggregate view of a loan. Recomputed on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub loan_amount: Money,
    /// Share of total payments that repays principal, for display bars.
    pub principal_percentage: Percent,
    pub interest_percentage: Percent,
}

/// A zero term finances nothing: every field, including `loan_amount`, is 0.
pub fn summarize(principal: Money, annual_rate_percent: Percent, term_months: u32) -> LoanSummary {
    if term_months == 0 {
        return LoanSummary {
            monthly_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
            loan_amount: 0.0,
            principal_percentage: 0.0,
            interest_percentage: 0.0,
        };
    }

    let monthly_payment = compute_monthly_payment(principal, annual_rate_percent, term_months);
    let total_payment = monthly_payment * term_months as f64;
    let total_interest = total_payment - principal;

    let (principal_percentage, interest_percentage) = if total_payment > 0.0 {
        (
            principal / total_payment * 100.0,
            total_interest / total_payment * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    LoanSummary {
        monthly_payment,
        total_payment,
        total_interest,
        loan_amount: principal,
        principal_percentage,
        interest_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_totals() {
        let s = summarize(200_000.0, 6.0, 360);
        assert_abs_diff_eq!(s.total_payment, s.monthly_payment * 360.0, epsilon = 1e-9);
        assert_eq!(s.total_interest, s.total_payment - 200_000.0);
        assert_eq!(s.loan_amount, 200_000.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let s = summarize(25_000.0, 7.0, 60);
        assert_abs_diff_eq!(s.principal_percentage + s.interest_percentage, 100.0, epsilon = 1e-9);
        assert!(s.interest_percentage > 0.0);
    }

    #[test]
    fn test_zero_total_has_zero_percentages() {
        let s = summarize(0.0, 5.0, 12);
        assert_eq!(s.total_payment, 0.0);
        assert_eq!(s.principal_percentage, 0.0);
        assert_eq!(s.interest_percentage, 0.0);

        let s = summarize(5_000.0, 5.0, 0);
        assert_eq!(s.monthly_payment, 0.0);
        assert_eq!(s.total_interest, 0.0);
        assert_eq!(s.loan_amount, 0.0);
        assert_eq!(s.principal_percentage, 0.0);
        assert!(!s.interest_percentage.is_nan());
    }

    #[test]
    fn test_zero_rate_no_interest() {
        let s = summarize(10_000.0, 0.0, 24);
        assert_abs_diff_eq!(s.monthly_payment, 416.666_666_666, epsilon = 1e-6);
        assert_abs_diff_eq!(s.total_interest, 0.0, epsilon = 1e-9);
    }
}

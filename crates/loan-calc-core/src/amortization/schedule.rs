use log::trace;
use serde::{Deserialize, Serialize};

use super::params::MAX_TERM_MONTHS;
use super::payment::{compute_monthly_payment, monthly_rate};
use crate::types::{Money, Percent};

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub month: u32,
    pub payment: Money,
    pub principal_payment: Money,
    pub interest_payment: Money,
    pub remaining_balance: Money,
}

/// Month-by-month breakdown of a fixed-payment loan.
///
/// The whole schedule is materialised; views such as "first 12 months" or
/// "one row per year" slice it afterwards. A zero term yields an empty
/// schedule, which callers treat as "nothing to render".
///
/// Rows are unrounded f64. Only the final balance is floored at zero, so the
/// terminal balance carries accumulated rounding drift on the order of
/// `principal × term_months × f64::EPSILON` in absolute terms. That stays
/// under 1e-6 for household loans but grows for very large principals at high
/// rates. The term is taken as given; calculators cap it with
/// [`normalize_term`](super::params::normalize_term) before calling in.
pub fn build_amortization_schedule(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> Vec<PaymentScheduleEntry> {
    if term_months == 0 {
        return Vec::new();
    }

    let payment = compute_monthly_payment(principal, annual_rate_percent, term_months);
    let rate = monthly_rate(annual_rate_percent);

    let mut schedule = Vec::with_capacity(term_months.min(MAX_TERM_MONTHS) as usize);
    let mut balance = principal.max(0.0);

    for month in 1..=term_months {
        let interest_payment = balance * rate;
        let principal_payment = payment - interest_payment;
        balance -= principal_payment;

        // Absorb floating-point drift on the last row only.
        if month == term_months {
            balance = balance.max(0.0);
        }

        schedule.push(PaymentScheduleEntry {
            month,
            payment,
            principal_payment,
            interest_payment,
            remaining_balance: balance,
        });
    }

    trace!("built {} schedule rows", schedule.len());
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_entry_count_and_terminal_balance() {
        let sched = build_amortization_schedule(200_000.0, 6.0, 360);
        assert_eq!(sched.len(), 360);
        assert_eq!(sched[0].month, 1);
        assert_eq!(sched[359].month, 360);
        assert_abs_diff_eq!(sched[359].remaining_balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_first_month_split() {
        let sched = build_amortization_schedule(200_000.0, 6.0, 360);
        // 200,000 × 0.5% = 1,000 of interest in month one.
        assert_abs_diff_eq!(sched[0].interest_payment, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            sched[0].remaining_balance,
            200_000.0 - sched[0].principal_payment,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_balance_recurrence() {
        let sched = build_amortization_schedule(35_000.0, 4.25, 120);
        for pair in sched.windows(2) {
            assert_abs_diff_eq!(
                pair[1].remaining_balance,
                pair[0].remaining_balance - pair[1].principal_payment,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_principal_sums_to_loan() {
        let sched = build_amortization_schedule(18_500.0, 9.9, 72);
        let paid: f64 = sched.iter().map(|e| e.principal_payment).sum();
        assert_abs_diff_eq!(paid, 18_500.0, epsilon = 18_500.0 * 1e-6);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let sched = build_amortization_schedule(10_000.0, 0.0, 24);
        assert!(sched.iter().all(|e| e.interest_payment == 0.0));
        assert_abs_diff_eq!(sched[23].remaining_balance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_term_is_empty() {
        assert!(build_amortization_schedule(10_000.0, 5.0, 0).is_empty());
    }

    #[test]
    fn test_recomputed_fresh() {
        let a = build_amortization_schedule(1_000.0, 3.0, 12);
        let b = build_amortization_schedule(1_000.0, 3.0, 12);
        assert_eq!(a, b);
    }
}

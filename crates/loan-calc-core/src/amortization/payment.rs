use crate::types::{Money, Percent};

/// Annual percentage rate to periodic monthly rate: `6.0` → `0.005`.
pub fn monthly_rate(annual_rate_percent: Percent) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Fixed monthly payment of a fully amortizing loan.
///
/// `P · r(1+r)^n / ((1+r)^n − 1)`, or `P / n` when the rate is zero.
/// No rounding is applied. A zero term yields 0 rather than dividing by zero.
pub fn compute_monthly_payment(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> Money {
    if term_months == 0 || principal <= 0.0 {
        return 0.0;
    }

    let n = term_months as f64;
    let r = monthly_rate(annual_rate_percent);
    if r <= 0.0 {
        return principal / n;
    }

    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_thirty_year_mortgage() {
        let pmt = compute_monthly_payment(200_000.0, 6.0, 360);
        assert_abs_diff_eq!(pmt, 1199.10, epsilon = 0.005);
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        assert_eq!(compute_monthly_payment(10_000.0, 0.0, 24), 10_000.0 / 24.0);
    }

    #[test]
    fn test_zero_principal() {
        assert_eq!(compute_monthly_payment(0.0, 7.5, 60), 0.0);
    }

    #[test]
    fn test_zero_term() {
        assert_eq!(compute_monthly_payment(5_000.0, 5.0, 0), 0.0);
    }

    #[test]
    fn test_single_period_repays_with_interest() {
        // One month at 12% APR: principal plus one month of 1% interest.
        assert_abs_diff_eq!(compute_monthly_payment(1000.0, 12.0, 1), 1010.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_rate() {
        assert_abs_diff_eq!(monthly_rate(6.0), 0.005, epsilon = 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }
}

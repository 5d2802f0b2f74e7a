use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::input::sanitize_field;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitMargin {
    pub revenue: Money,
    pub cost: Money,
    pub gross_profit: Money,
    /// Profit as a share of revenue.
    pub margin_percent: Percent,
    /// Profit as a share of cost.
    pub markup_percent: Percent,
}

/// Gross margin and markup. Margin is 0 without revenue, markup is 0
/// without cost.
pub fn profit_margin(revenue: Money, cost: Money) -> ProfitMargin {
    let gross_profit = revenue - cost;
    let margin_percent = if revenue > 0.0 {
        gross_profit / revenue * 100.0
    } else {
        0.0
    };
    let markup_percent = if cost > 0.0 {
        gross_profit / cost * 100.0
    } else {
        0.0
    };

    ProfitMargin {
        revenue,
        cost,
        gross_profit,
        margin_percent,
        markup_percent,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitMarginInput {
    pub revenue: Money,
    pub cost: Money,
}

pub fn calculate_profit_margin(input: &ProfitMarginInput) -> ComputationOutput<ProfitMargin> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let revenue = sanitize_field("revenue", input.revenue, &mut warnings);
    let cost = sanitize_field("cost", input.cost, &mut warnings);
    let output = profit_margin(revenue, cost);
    if output.gross_profit < 0.0 {
        warnings.push("Cost exceeds revenue; margin is negative".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Gross margin = (revenue − cost) / revenue; markup = (revenue − cost) / cost",
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

    #[test]
    fn test_margin_and_markup() {
        let m = profit_margin(200.0, 150.0);
        assert_eq!(m.gross_profit, 50.0);
        assert_eq!(m.margin_percent, 25.0);
        assert_eq!(m.markup_percent, 50.0 / 150.0 * 100.0);
    }

    #[test]
    fn test_zero_revenue_and_cost() {
        let m = profit_margin(0.0, 0.0);
        assert_eq!(m.margin_percent, 0.0);
        assert_eq!(m.markup_percent, 0.0);
    }

    #[test]
    fn test_loss_warns() {
        let out = calculate_profit_margin(&ProfitMarginInput {
            revenue: 100.0,
            cost: 120.0,
        });
        assert_eq!(out.result.margin_percent, -20.0);
        assert_eq!(out.warnings.len(), 1);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::types::{Money, Percent};
use crate::CalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One marginal bracket: income up to `upper_bound` is taxed at `rate_percent`.
/// `None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub upper_bound: Option<Money>,
    pub rate_percent: Percent,
}

impl Bracket {
    pub const fn up_to(upper_bound: Money, rate_percent: Percent) -> Self {
        Bracket {
            upper_bound: Some(upper_bound),
            rate_percent,
        }
    }

    pub const fn above(rate_percent: Percent) -> Self {
        Bracket {
            upper_bound: None,
            rate_percent,
        }
    }
}

/// The portion of income that fell into one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketSlice {
    pub lower_bound: Money,
    pub upper_bound: Option<Money>,
    pub rate_percent: Percent,
    pub taxed_amount: Money,
    pub tax: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub income: Money,
    pub tax: Money,
    pub effective_rate: Percent,
    pub marginal_rate: Percent,
    pub per_bracket: Vec<BracketSlice>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Bounds must strictly increase, rates must be finite and non-negative, and
/// only the last bracket may be open-ended.
pub fn validate_brackets(brackets: &[Bracket]) -> CalcResult<()> {
    if brackets.is_empty() {
        return Err(CalcError::InvalidInput {
            field: "brackets".into(),
            reason: "At least one bracket is required".into(),
        });
    }

    let mut previous = 0.0;
    for (i, b) in brackets.iter().enumerate() {
        if !b.rate_percent.is_finite() || b.rate_percent < 0.0 {
            return Err(CalcError::InvalidInput {
                field: format!("brackets[{i}].rate_percent"),
                reason: "Rate must be a non-negative number".into(),
            });
        }
        match b.upper_bound {
            Some(upper) if !(upper > previous) || !upper.is_finite() => {
                return Err(CalcError::InvalidInput {
                    field: format!("brackets[{i}].upper_bound"),
                    reason: format!("Bound {upper} must exceed the previous bound {previous}"),
                });
            }
            Some(upper) => previous = upper,
            None if i + 1 != brackets.len() => {
                return Err(CalcError::InvalidInput {
                    field: format!("brackets[{i}].upper_bound"),
                    reason: "Only the last bracket may be open-ended".into(),
                });
            }
            None => {}
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Sum over brackets of (income inside bracket × marginal rate).
///
/// Income at or below zero owes nothing. Income above a closed final bracket
/// is not taxed.
pub fn progressive_tax(income: Money, brackets: &[Bracket]) -> TaxBreakdown {
    if !(income > 0.0) {
        return TaxBreakdown {
            income: 0.0,
            tax: 0.0,
            effective_rate: 0.0,
            marginal_rate: 0.0,
            per_bracket: Vec::new(),
        };
    }

    let mut tax = 0.0;
    let mut marginal_rate = 0.0;
    let mut lower = 0.0;
    let mut per_bracket = Vec::with_capacity(brackets.len());

    for b in brackets {
        if income <= lower {
            break;
        }
        let upper = b.upper_bound.unwrap_or(f64::INFINITY);
        let taxed_amount = income.min(upper) - lower;
        let slice_tax = taxed_amount * b.rate_percent / 100.0;
        tax += slice_tax;
        marginal_rate = b.rate_percent;

        per_bracket.push(BracketSlice {
            lower_bound: lower,
            upper_bound: b.upper_bound,
            rate_percent: b.rate_percent,
            taxed_amount,
            tax: slice_tax,
        });
        lower = upper;
    }

    TaxBreakdown {
        income,
        tax,
        effective_rate: tax / income * 100.0,
        marginal_rate,
        per_bracket,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

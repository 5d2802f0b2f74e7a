use log::debug;
use serde::{Deserialize, Serialize};

use crate::input::sanitize_field;
use crate::types::{Money, Percent, Term};

/// Longest term any calculator will amortize: 100 years of monthly payments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Term in months, capped at [`MAX_TERM_MONTHS`]. A zero or capped term is
/// recorded in `warnings` under `field`.
pub fn normalize_term(field: &str, term: Term, warnings: &mut Vec<String>) -> u32 {
    let months = term.months();
    if months == 0 {
        warnings.push(format!("{field} is zero; no payment schedule produced"));
        return 0;
    }
    if months > MAX_TERM_MONTHS {
        debug!("capped {field} from {months} to {MAX_TERM_MONTHS} months");
        warnings.push(format!(
            "{field} of {months} months exceeds the {MAX_TERM_MONTHS}-month maximum; capped"
        ));
        return MAX_TERM_MONTHS;
    }
    months
}

/// Inputs to one amortization calculation. Built fresh per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    pub annual_interest_rate: Percent,
    pub term_months: u32,
}

impl LoanParameters {
    /// Negative or non-finite principal and rate are replaced by 0.
    pub fn new(principal: Money, annual_interest_rate: Percent, term: Term) -> Self {
        let mut ignored = Vec::new();
        Self::normalized(principal, annual_interest_rate, term, &mut ignored)
    }

    /// As [`LoanParameters::new`], recording a warning for every replaced field.
    pub fn normalized(
        principal: Money,
        annual_interest_rate: Percent,
        term: Term,
        warnings: &mut Vec<String>,
    ) -> Self {
        let principal = sanitize_field("principal", principal, warnings);
        let annual_interest_rate =
            sanitize_field("annual_interest_rate", annual_interest_rate, warnings);
        let term_months = normalize_term("term", term, warnings);
        LoanParameters {
            principal,
            annual_interest_rate,
            term_months,
        }
    }

    /// Re-apply normalisation to parameters that arrived over serde.
    pub fn sanitized(&self, warnings: &mut Vec<String>) -> Self {
        Self::normalized(
            self.principal,
            self.annual_interest_rate,
            Term::Months(self.term_months),
            warnings,
        )
    }
}

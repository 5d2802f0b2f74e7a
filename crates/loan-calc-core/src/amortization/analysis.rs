use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::params::LoanParameters;
use super::schedule::{build_amortization_schedule, PaymentScheduleEntry};
use super::summary::{summarize, LoanSummary};
use crate::types::{with_metadata, ComputationOutput};

fn default_true() -> bool {
    true
}

/// A plain loan: the engine's parameters plus presentation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    #[serde(flatten)]
    pub params: LoanParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

impl From<LoanParameters> for LoanInput {
    fn from(params: LoanParameters) -> Self {
        LoanInput {
            params,
            first_payment_date: None,
            include_schedule: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub summary: LoanSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
    pub schedule: Vec<PaymentScheduleEntry>,
}

/// Summary and, optionally, the full schedule for one loan.
pub fn analyze_loan(input: &LoanInput) -> ComputationOutput<LoanAnalysis> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let params = input.params.sanitized(&mut warnings);
    let summary = summarize(params.principal, params.annual_interest_rate, params.term_months);

    let schedule = if input.include_schedule {
        build_amortization_schedule(params.principal, params.annual_interest_rate, params.term_months)
    } else {
        Vec::new()
    };

    let payoff_date = match input.first_payment_date {
        Some(first) if params.term_months > 0 => {
            first.checked_add_months(Months::new(params.term_months - 1))
        }
        _ => None,
    };

    let output = LoanAnalysis {
        summary,
        payoff_date,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Fixed-payment amortization: P·r(1+r)^n / ((1+r)^n − 1), r = APR/100/12",
        &params,
        warnings,
        elapsed,
        output,
    )
}

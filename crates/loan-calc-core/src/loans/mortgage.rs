use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::financed::{financed_loan, DownPayment, FinancedPurchaseOutput, LoanKind};
use crate::amortization::normalize_term;
use crate::input::sanitize_field;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Term};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Loan-to-value above which private mortgage insurance is charged.
pub const PMI_LTV_THRESHOLD: Percent = 80.0;

/// Annual PMI premium, percent of the loan, when none is supplied.
pub const DEFAULT_PMI_RATE: Percent = 0.5;

fn default_pmi_rate() -> Percent {
    DEFAULT_PMI_RATE
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: Money,
    #[serde(default)]
    pub down_payment: DownPayment,
    pub annual_interest_rate: Percent,
    pub term: Term,
    /// Annual property tax as a percent of the home price.
    #[serde(default)]
    pub property_tax_rate: Percent,
    #[serde(default)]
    pub annual_insurance: Money,
    #[serde(default)]
    pub monthly_hoa: Money,
    #[serde(default = "default_pmi_rate")]
    pub pmi_rate: Percent,
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageOutput {
    #[serde(flatten)]
    pub loan: FinancedPurchaseOutput,
    pub pmi_required: bool,
    pub monthly_property_tax: Money,
    pub monthly_insurance: Money,
    pub monthly_pmi: Money,
    pub monthly_hoa: Money,
    /// Principal and interest plus taxes, insurance, PMI and HOA dues.
    pub total_monthly_payment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Monthly PMI premium; zero at or below the loan-to-value threshold.
pub fn monthly_pmi(loan_amount: Money, loan_to_value: Percent, pmi_rate: Percent) -> Money {
    if loan_to_value > PMI_LTV_THRESHOLD {
        loan_amount * pmi_rate / 100.0 / 12.0
    } else {
        0.0
    }
}

pub fn calculate_mortgage(input: &MortgageInput) -> ComputationOutput<MortgageOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let price = sanitize_field("home_price", input.home_price, &mut warnings);
    let rate = sanitize_field("annual_interest_rate", input.annual_interest_rate, &mut warnings);
    let tax_rate = sanitize_field("property_tax_rate", input.property_tax_rate, &mut warnings);
    let insurance = sanitize_field("annual_insurance", input.annual_insurance, &mut warnings);
    let hoa = sanitize_field("monthly_hoa", input.monthly_hoa, &mut warnings);
    let pmi_rate = sanitize_field("pmi_rate", input.pmi_rate, &mut warnings);
    let term_months = normalize_term("term", input.term, &mut warnings);

    let down = input.down_payment.resolve(price);
    let loan_amount = (price - down).max(0.0);

    let loan = financed_loan(
        LoanKind::Mortgage,
        price,
        down,
        loan_amount,
        rate,
        term_months,
        input.include_schedule,
    );

    let pmi = monthly_pmi(loan.loan_amount, loan.loan_to_value, pmi_rate);
    let pmi_required = loan.loan_to_value > PMI_LTV_THRESHOLD;
    if pmi_required {
        warnings.push(format!(
            "Down payment below {:.0}% of the price; PMI applies until the balance reaches {:.0}% LTV",
            100.0 - PMI_LTV_THRESHOLD,
            PMI_LTV_THRESHOLD
        ));
    }

    let monthly_property_tax = price * tax_rate / 100.0 / 12.0;
    let monthly_insurance = insurance / 12.0;
    let total_monthly_payment =
        loan.summary.monthly_payment + monthly_property_tax + monthly_insurance + pmi + hoa;

    let output = MortgageOutput {
        loan,
        pmi_required,
        monthly_property_tax,
        monthly_insurance,
        monthly_pmi: pmi,
        monthly_hoa: hoa,
        total_monthly_payment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Mortgage: amortized principal and interest plus escrowed taxes, insurance, PMI and HOA",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

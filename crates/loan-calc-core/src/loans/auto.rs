use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::financed::{financed_loan, DownPayment, FinancedPurchaseOutput, LoanKind};
use crate::amortization::normalize_term;
use crate::input::sanitize_field;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Term};

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanInput {
    pub vehicle_price: Money,
    #[serde(default)]
    pub down_payment: DownPayment,
    #[serde(default)]
    pub trade_in_value: Money,
    #[serde(default)]
    pub sales_tax_rate: Percent,
    pub annual_interest_rate: Percent,
    pub term: Term,
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanOutput {
    #[serde(flatten)]
    pub loan: FinancedPurchaseOutput,
    pub trade_in_value: Money,
    pub sales_tax: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Auto loan with trade-in credit and financed sales tax.
///
/// Sales tax is levied on the price net of trade-in. The borrowed amount is
/// `price + tax − trade-in − down payment`, floored at zero.
pub fn calculate_auto_loan(input: &AutoLoanInput) -> ComputationOutput<AutoLoanOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let price = sanitize_field("vehicle_price", input.vehicle_price, &mut warnings);
    let trade_in = sanitize_field("trade_in_value", input.trade_in_value, &mut warnings);
    let tax_rate = sanitize_field("sales_tax_rate", input.sales_tax_rate, &mut warnings);
    let rate = sanitize_field("annual_interest_rate", input.annual_interest_rate, &mut warnings);
    let term_months = normalize_term("term", input.term, &mut warnings);

    let taxable = (price - trade_in).max(0.0);
    let sales_tax = taxable * tax_rate / 100.0;
    let down = input.down_payment.resolve(price);
    let loan_amount = (price + sales_tax - trade_in - down).max(0.0);

    if trade_in > price {
        warnings.push("Trade-in exceeds vehicle price; excess credit is not refunded".into());
    }

    let loan = financed_loan(
        LoanKind::Auto,
        price,
        down,
        loan_amount,
        rate,
        term_months,
        input.include_schedule,
    );

    let output = AutoLoanOutput {
        loan,
        trade_in_value: trade_in,
        sales_tax,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Auto loan: price plus sales tax less trade-in and down payment, amortized",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

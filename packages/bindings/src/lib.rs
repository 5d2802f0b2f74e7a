use napi::Result as NapiResult;
use napi_derive::napi;

use loan_calc_core::calculator::{self, Calculator};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn run<C: Calculator>(input_json: &str) -> NapiResult<String> {
    calculator::run_json::<C>(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    run::<calculator::Loan>(&input_json)
}

#[napi]
pub fn finance_purchase(input_json: String) -> NapiResult<String> {
    run::<calculator::FinancedPurchase>(&input_json)
}

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    run::<calculator::Mortgage>(&input_json)
}

#[napi]
pub fn calculate_auto_loan(input_json: String) -> NapiResult<String> {
    run::<calculator::AutoLoan>(&input_json)
}

// ---------------------------------------------------------------------------
// Refinance
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_refinance(input_json: String) -> NapiResult<String> {
    run::<calculator::Refinance>(&input_json)
}

#[napi]
pub fn refinance_break_even(input_json: String) -> NapiResult<String> {
    run::<calculator::BreakEven>(&input_json)
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_income_tax(input_json: String) -> NapiResult<String> {
    run::<calculator::IncomeTax>(&input_json)
}

// ---------------------------------------------------------------------------
// Margin
// ---------------------------------------------------------------------------

#[napi]
pub fn profit_margin(input_json: String) -> NapiResult<String> {
    run::<calculator::ProfitMargin>(&input_json)
}

#[napi]
pub fn trading_margin(input_json: String) -> NapiResult<String> {
    run::<calculator::TradingMargin>(&input_json)
}

//! One contract for every calculator: the complete input state in, the
//! complete output state out. Frontends call it on every input change and
//! dispatch over it generically instead of wiring per-field handlers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::amortization::{analyze_loan, LoanAnalysis, LoanInput};
use crate::types::ComputationOutput;
use crate::CalcResult;

pub trait Calculator {
    type Input: DeserializeOwned + Serialize;
    type Output: Serialize;

    /// Stable identifier used by the CLI and the JavaScript bindings.
    const NAME: &'static str;

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output>;
}

/// Decode a JSON input, run the calculator and encode the envelope.
pub fn run_json<C: Calculator>(input_json: &str) -> CalcResult<String> {
    let input: C::Input = serde_json::from_str(input_json)?;
    let output = C::calculate(&input);
    Ok(serde_json::to_string(&output)?)
}

/// As [`run_json`], from an already-parsed value.
pub fn run_value<C: Calculator>(input: serde_json::Value) -> CalcResult<serde_json::Value> {
    let input: C::Input = serde_json::from_value(input)?;
    Ok(serde_json::to_value(C::calculate(&input))?)
}

pub struct Loan;

impl Calculator for Loan {
    type Input = LoanInput;
    type Output = LoanAnalysis;
    const NAME: &'static str = "loan";

    fn calculate(input: &LoanInput) -> ComputationOutput<LoanAnalysis> {
        analyze_loan(input)
    }
}

#[cfg(feature = "loans")]
pub use loans_impl::{AutoLoan, FinancedPurchase, Mortgage};

#[cfg(feature = "loans")]
mod loans_impl {
    use super::Calculator;
    use crate::loans::auto::{calculate_auto_loan, AutoLoanInput, AutoLoanOutput};
    use crate::loans::mortgage::{calculate_mortgage, MortgageInput, MortgageOutput};
    use crate::loans::{finance_purchase, FinancedPurchaseInput, FinancedPurchaseOutput};
    use crate::types::ComputationOutput;

    pub struct FinancedPurchase;

    impl Calculator for FinancedPurchase {
        type Input = FinancedPurchaseInput;
        type Output = FinancedPurchaseOutput;
        const NAME: &'static str = "financed_purchase";

        fn calculate(input: &FinancedPurchaseInput) -> ComputationOutput<FinancedPurchaseOutput> {
            finance_purchase(input)
        }
    }

    pub struct Mortgage;

    impl Calculator for Mortgage {
        type Input = MortgageInput;
        type Output = MortgageOutput;
        const NAME: &'static str = "mortgage";

        fn calculate(input: &MortgageInput) -> ComputationOutput<MortgageOutput> {
            calculate_mortgage(input)
        }
    }

    pub struct AutoLoan;

    impl Calculator for AutoLoan {
        type Input = AutoLoanInput;
        type Output = AutoLoanOutput;
        const NAME: &'static str = "auto_loan";

        fn calculate(input: &AutoLoanInput) -> ComputationOutput<AutoLoanOutput> {
            calculate_auto_loan(input)
        }
    }
}

#[cfg(feature = "refinance")]
pub struct Refinance;

#[cfg(feature = "refinance")]
impl Calculator for Refinance {
    type Input = crate::refinance::RefinanceInput;
    type Output = crate::refinance::RefinanceOutput;
    const NAME: &'static str = "refinance";

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output> {
        crate::refinance::compare_refinance(input)
    }
}

#[cfg(feature = "refinance")]
pub struct BreakEven;

#[cfg(feature = "refinance")]
impl Calculator for BreakEven {
    type Input = crate::refinance::BreakEvenInput;
    type Output = crate::refinance::RefinanceSavings;
    const NAME: &'static str = "break_even";

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output> {
        crate::refinance::calculate_break_even(input)
    }
}

#[cfg(feature = "tax")]
pub struct IncomeTax;

#[cfg(feature = "tax")]
impl Calculator for IncomeTax {
    type Input = crate::tax::IncomeTaxInput;
    type Output = crate::tax::IncomeTaxOutput;
    const NAME: &'static str = "income_tax";

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output> {
        crate::tax::estimate_income_tax(input)
    }
}

#[cfg(feature = "margin")]
pub struct ProfitMargin;

#[cfg(feature = "margin")]
impl Calculator for ProfitMargin {
    type Input = crate::margin::ProfitMarginInput;
    type Output = crate::margin::ProfitMargin;
    const NAME: &'static str = "profit_margin";

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output> {
        crate::margin::calculate_profit_margin(input)
    }
}

#[cfg(feature = "margin")]
pub struct TradingMargin;

#[cfg(feature = "margin")]
impl Calculator for TradingMargin {
    type Input = crate::margin::TradingMarginInput;
    type Output = crate::margin::TradingMarginOutput;
    const NAME: &'static str = "trading_margin";

    fn calculate(input: &Self::Input) -> ComputationOutput<Self::Output> {
        crate::margin::trading_margin(input)
    }
}

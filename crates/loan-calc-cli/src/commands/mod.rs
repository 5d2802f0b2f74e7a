pub mod loan;
pub mod margin;
pub mod mortgage;
pub mod refinance;
pub mod tax;

use loan_calc_core::calculator::Calculator;
use loan_calc_core::input::parse_amount_strict;
use loan_calc_core::Term;
use serde_json::Value;

/// clap value parser for dollar and percent flags: accepts `250000`,
/// `$250,000` or `6.5%`.
pub fn amount(raw: &str) -> Result<f64, String> {
    parse_amount_strict("value", raw).map_err(|e| e.to_string())
}

/// Term from `--term-months` / `--term-years`; months win when both are set.
pub fn term_from(
    months: Option<u32>,
    years: Option<u32>,
    flag_prefix: &str,
) -> Result<Term, Box<dyn std::error::Error>> {
    match (months, years) {
        (Some(m), _) => Ok(Term::Months(m)),
        (None, Some(y)) => Ok(Term::Years(y)),
        (None, None) => Err(format!(
            "--{flag_prefix}-months or --{flag_prefix}-years is required (or provide --input)"
        )
        .into()),
    }
}

/// Run a calculator on a fully-built input and hand back the JSON envelope.
pub fn run<C: Calculator>(input: &C::Input) -> Result<Value, Box<dyn std::error::Error>> {
    let output = C::calculate(input);
    Ok(serde_json::to_value(output)?)
}

use clap::Args;
use serde_json::Value;

use loan_calc_core::calculator::{BreakEven, Refinance};
use loan_calc_core::refinance::{BreakEvenInput, RefinanceInput};

use super::{amount, run, term_from};
use crate::input;

/// Arguments for a full refinance comparison
#[derive(Args)]
pub struct RefinanceArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding balance on the current loan
    #[arg(long, value_parser = amount)]
    pub balance: Option<f64>,

    /// Current annual rate in percent
    #[arg(long, value_parser = amount)]
    pub current_rate: Option<f64>,

    /// Months left on the current loan
    #[arg(long)]
    pub remaining_months: Option<u32>,

    /// Years left on the current loan
    #[arg(long)]
    pub remaining_years: Option<u32>,

    /// New annual rate in percent
    #[arg(long, value_parser = amount)]
    pub new_rate: Option<f64>,

    /// New term in months
    #[arg(long)]
    pub new_term_months: Option<u32>,

    /// New term in years
    #[arg(long)]
    pub new_term_years: Option<u32>,

    /// One-time closing costs
    #[arg(long, value_parser = amount, default_value = "0")]
    pub closing_costs: f64,
}

pub fn run_refinance(args: RefinanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let refi: RefinanceInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => RefinanceInput {
            current_balance: args.balance.ok_or("--balance is required (or provide --input)")?,
            current_rate: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            current_remaining_term: term_from(args.remaining_months, args.remaining_years, "remaining")?,
            new_rate: args.new_rate.ok_or("--new-rate is required (or provide --input)")?,
            new_term: term_from(args.new_term_months, args.new_term_years, "new-term")?,
            closing_costs: args.closing_costs,
        },
    };

    run::<Refinance>(&refi)
}

/// Arguments for a quick break-even from two known payments
#[derive(Args)]
pub struct BreakEvenArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current monthly payment
    #[arg(long, value_parser = amount)]
    pub current_payment: Option<f64>,

    /// Monthly payment after refinancing
    #[arg(long, value_parser = amount)]
    pub new_payment: Option<f64>,

    /// One-time closing costs
    #[arg(long, value_parser = amount, default_value = "0")]
    pub closing_costs: f64,
}

pub fn run_break_even(args: BreakEvenArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let be: BreakEvenInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => BreakEvenInput {
            current_payment: args
                .current_payment
                .ok_or("--current-payment is required (or provide --input)")?,
            new_payment: args
                .new_payment
                .ok_or("--new-payment is required (or provide --input)")?,
            closing_costs: args.closing_costs,
        },
    };

    run::<BreakEven>(&be)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn break_even_value(current: f64, new: f64, costs: f64) -> Value {
        run::<BreakEven>(&BreakEvenInput {
            current_payment: current,
            new_payment: new,
            closing_costs: costs,
        })
        .unwrap()
    }

    #[test]
    fn test_break_even_command() {
        let v = break_even_value(1500.0, 1300.0, 3000.0);
        assert_eq!(v["result"]["monthly_savings"], 200.0);
        assert_eq!(v["result"]["break_even_months"], 15.0);
        assert!(v["warnings"].as_array().unwrap().is_empty());
        assert!(v["methodology"].as_str().unwrap().starts_with("Break-even"));
    }

    #[test]
    fn test_break_even_not_applicable() {
        let v = break_even_value(1300.0, 1400.0, 3000.0);
        assert!(v["result"]["break_even_months"].is_null());
        assert_eq!(v["warnings"].as_array().unwrap().len(), 1);
    }
}

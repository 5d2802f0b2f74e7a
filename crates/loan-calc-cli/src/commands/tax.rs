use clap::{Args, ValueEnum};
use serde_json::Value;

use loan_calc_core::calculator::IncomeTax;
use loan_calc_core::tax::{Bracket, FilingStatus, IncomeTaxInput};

use super::{amount, run};
use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilingStatusArg {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl From<FilingStatusArg> for FilingStatus {
    fn from(s: FilingStatusArg) -> Self {
        match s {
            FilingStatusArg::Single => FilingStatus::Single,
            FilingStatusArg::MarriedJoint => FilingStatus::MarriedJoint,
            FilingStatusArg::MarriedSeparate => FilingStatus::MarriedSeparate,
            FilingStatusArg::HeadOfHousehold => FilingStatus::HeadOfHousehold,
        }
    }
}

/// Arguments for the income tax estimate
#[derive(Args)]
pub struct IncomeTaxArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Gross annual income
    #[arg(long, value_parser = amount)]
    pub income: Option<f64>,

    /// Filing status
    #[arg(long, default_value = "single")]
    pub filing_status: FilingStatusArg,

    /// JSON or YAML file with a custom bracket table
    #[arg(long)]
    pub brackets: Option<String>,
}

pub fn run_income_tax(args: IncomeTaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: IncomeTaxInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => {
            let brackets: Option<Vec<Bracket>> = match args.brackets.as_deref() {
                Some(path) => Some(input::file::read_input(path)?),
                None => None,
            };
            IncomeTaxInput {
                income: args.income.ok_or("--income is required (or provide --input)")?,
                filing_status: args.filing_status.into(),
                brackets,
            }
        }
    };

    run::<IncomeTax>(&tax_input)
}

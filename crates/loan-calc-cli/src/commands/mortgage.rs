use clap::Args;
use serde_json::Value;

use loan_calc_core::calculator::{AutoLoan, Mortgage};
use loan_calc_core::loans::auto::AutoLoanInput;
use loan_calc_core::loans::mortgage::{MortgageInput, DEFAULT_PMI_RATE};

use super::loan::down_payment_from;
use super::{amount, run, term_from};
use crate::input;

/// Arguments for the mortgage calculator
#[derive(Args)]
pub struct MortgageArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Home price
    #[arg(long, value_parser = amount)]
    pub price: Option<f64>,

    /// Down payment in dollars
    #[arg(long, value_parser = amount, conflicts_with = "down_percent")]
    pub down: Option<f64>,

    /// Down payment as a percent of the price
    #[arg(long, value_parser = amount)]
    pub down_percent: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long, value_parser = amount)]
    pub rate: Option<f64>,

    /// Term in years
    #[arg(long, default_value_t = 30)]
    pub term_years: u32,

    /// Annual property tax, percent of price
    #[arg(long, value_parser = amount, default_value = "0")]
    pub property_tax_rate: f64,

    /// Annual homeowner's insurance premium
    #[arg(long, value_parser = amount, default_value = "0")]
    pub insurance: f64,

    /// Monthly HOA dues
    #[arg(long, value_parser = amount, default_value = "0")]
    pub hoa: f64,

    /// Annual PMI rate, percent of the loan
    #[arg(long, value_parser = amount)]
    pub pmi_rate: Option<f64>,

    /// Omit the month-by-month schedule
    #[arg(long)]
    pub no_schedule: bool,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage: MortgageInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => MortgageInput {
            home_price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: down_payment_from(args.down, args.down_percent),
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term: term_from(None, Some(args.term_years), "term")?,
            property_tax_rate: args.property_tax_rate,
            annual_insurance: args.insurance,
            monthly_hoa: args.hoa,
            pmi_rate: args.pmi_rate.unwrap_or(DEFAULT_PMI_RATE),
            include_schedule: !args.no_schedule,
        },
    };

    run::<Mortgage>(&mortgage)
}

/// Arguments for the auto loan calculator
#[derive(Args)]
pub struct AutoLoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Vehicle price
    #[arg(long, value_parser = amount)]
    pub price: Option<f64>,

    /// Down payment in dollars
    #[arg(long, value_parser = amount, conflicts_with = "down_percent")]
    pub down: Option<f64>,

    /// Down payment as a percent of the price
    #[arg(long, value_parser = amount)]
    pub down_percent: Option<f64>,

    /// Trade-in value
    #[arg(long, value_parser = amount, default_value = "0")]
    pub trade_in: f64,

    /// Sales tax rate in percent
    #[arg(long, value_parser = amount, default_value = "0")]
    pub sales_tax: f64,

    /// Annual interest rate in percent
    #[arg(long, value_parser = amount)]
    pub rate: Option<f64>,

    /// Term in months
    #[arg(long, default_value_t = 60)]
    pub term_months: u32,

    /// Omit the month-by-month schedule
    #[arg(long)]
    pub no_schedule: bool,
}

pub fn run_auto_loan(args: AutoLoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let auto: AutoLoanInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => AutoLoanInput {
            vehicle_price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: down_payment_from(args.down, args.down_percent),
            trade_in_value: args.trade_in,
            sales_tax_rate: args.sales_tax,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term: term_from(Some(args.term_months), None, "term")?,
            include_schedule: !args.no_schedule,
        },
    };

    run::<AutoLoan>(&auto)
}

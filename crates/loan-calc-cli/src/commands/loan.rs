use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde_json::Value;

use loan_calc_core::amortization::{LoanInput, LoanParameters};
use loan_calc_core::calculator::{FinancedPurchase, Loan};
use loan_calc_core::loans::{DownPayment, FinancedPurchaseInput, LoanKind};

use super::{amount, run, term_from};
use crate::input;

/// Arguments for a plain amortized loan
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long, value_parser = amount)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent (6.5 = 6.5%)
    #[arg(long, value_parser = amount)]
    pub rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Date of the first payment (YYYY-MM-DD), for a payoff date
    #[arg(long)]
    pub first_payment: Option<NaiveDate>,

    /// Omit the month-by-month schedule
    #[arg(long)]
    pub no_schedule: bool,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => {
            let principal = args
                .principal
                .ok_or("--principal is required (or provide --input)")?;
            let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
            let term = term_from(args.term_months, args.term_years, "term")?;

            LoanInput {
                params: LoanParameters::new(principal, rate, term),
                first_payment_date: args.first_payment,
                include_schedule: !args.no_schedule,
            }
        }
    };

    run::<Loan>(&loan_input)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    General,
    Land,
    Personal,
    Student,
}

impl From<KindArg> for LoanKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::General => LoanKind::General,
            KindArg::Land => LoanKind::Land,
            KindArg::Personal => LoanKind::Personal,
            KindArg::Student => LoanKind::Student,
        }
    }
}

/// Arguments for a price-less-down-payment loan
#[derive(Args)]
pub struct PurchaseArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Which calculator the figures are for
    #[arg(long, default_value = "general")]
    pub kind: KindArg,

    /// Purchase price
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

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Omit the month-by-month schedule
    #[arg(long)]
    pub no_schedule: bool,
}

/// Down payment from `--down` / `--down-percent`, zero when neither is given.
pub fn down_payment_from(dollars: Option<f64>, percent: Option<f64>) -> DownPayment {
    match (dollars, percent) {
        (Some(a), _) => DownPayment::Amount(a),
        (None, Some(p)) => DownPayment::Percent(p),
        (None, None) => DownPayment::default(),
    }
}

pub fn run_purchase(args: PurchaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let purchase: FinancedPurchaseInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => FinancedPurchaseInput {
            kind: args.kind.into(),
            price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: down_payment_from(args.down, args.down_percent),
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term: term_from(args.term_months, args.term_years, "term")?,
            include_schedule: !args.no_schedule,
        },
    };

    run::<FinancedPurchase>(&purchase)
}

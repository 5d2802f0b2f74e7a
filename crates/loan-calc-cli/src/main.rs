mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{debug, info};
use std::process;

use commands::loan::{LoanArgs, PurchaseArgs};
use commands::margin::{ProfitMarginArgs, TradingMarginArgs};
use commands::mortgage::{AutoLoanArgs, MortgageArgs};
use commands::refinance::{BreakEvenArgs, RefinanceArgs};
use commands::tax::IncomeTaxArgs;
use output::schedule::ScheduleView;

/// Loan, mortgage, refinance, tax and margin calculators
#[derive(Parser)]
#[command(
    name = "lcalc",
    version,
    about = "Loan, mortgage, refinance, tax and margin calculators",
    long_about = "A CLI over the loan-calc amortization engine. Computes monthly payments, \
                  full amortization schedules, mortgage PITI, auto loans, refinance \
                  break-even, simplified income tax and margin figures."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Show only every 12th schedule row (one per loan year)
    #[arg(long, global = true)]
    yearly: bool,

    /// Show only the first N schedule rows
    #[arg(long, global = true)]
    months: Option<usize>,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Amortize a loan from principal, rate and term
    Loan(LoanArgs),
    /// Price-less-down-payment loan (general, land, personal, student)
    Purchase(PurchaseArgs),
    /// Mortgage payment with taxes, insurance, PMI and HOA
    Mortgage(MortgageArgs),
    /// Auto loan with trade-in and financed sales tax
    AutoLoan(AutoLoanArgs),
    /// Compare a current loan against a refinance
    Refinance(RefinanceArgs),
    /// Break-even months from two monthly payments and closing costs
    BreakEven(BreakEvenArgs),
    /// Simplified progressive income tax estimate
    IncomeTax(IncomeTaxArgs),
    /// Gross margin and markup
    ProfitMargin(ProfitMarginArgs),
    /// Margin purchase equity, borrowing and margin-call price
    TradingMargin(TradingMarginArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Purchase(args) => commands::loan::run_purchase(args),
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::AutoLoan(args) => commands::mortgage::run_auto_loan(args),
        Commands::Refinance(args) => commands::refinance::run_refinance(args),
        Commands::BreakEven(args) => commands::refinance::run_break_even(args),
        Commands::IncomeTax(args) => commands::tax::run_income_tax(args),
        Commands::ProfitMargin(args) => commands::margin::run_profit_margin(args),
        Commands::TradingMargin(args) => commands::margin::run_trading_margin(args),
        Commands::Version => {
            println!("lcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(mut value) => {
            if let Some(warnings) = value.get("warnings").and_then(|w| w.as_array()) {
                debug!("{} warning(s) in computation output", warnings.len());
            }
            let view = ScheduleView {
                yearly: cli.yearly,
                first_months: cli.months,
            };
            output::schedule::apply_view(&mut value, &view);
            info!("formatting output as {:?}", cli.output);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

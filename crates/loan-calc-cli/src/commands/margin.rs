use clap::Args;
use serde_json::Value;

use loan_calc_core::calculator::{ProfitMargin, TradingMargin};
use loan_calc_core::margin::trading::{DEFAULT_INITIAL_MARGIN, DEFAULT_MAINTENANCE_MARGIN};
use loan_calc_core::margin::{ProfitMarginInput, TradingMarginInput};

use super::{amount, run};
use crate::input;

/// Arguments for gross margin and markup
#[derive(Args)]
pub struct ProfitMarginArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Selling price or total revenue
    #[arg(long, value_parser = amount)]
    pub revenue: Option<f64>,

    /// Cost of goods
    #[arg(long, value_parser = amount)]
    pub cost: Option<f64>,
}

pub fn run_profit_margin(args: ProfitMarginArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pm: ProfitMarginInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => ProfitMarginInput {
            revenue: args.revenue.ok_or("--revenue is required (or provide --input)")?,
            cost: args.cost.ok_or("--cost is required (or provide --input)")?,
        },
    };

    run::<ProfitMargin>(&pm)
}

/// Arguments for a margin purchase
#[derive(Args)]
pub struct TradingMarginArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Price per share
    #[arg(long, value_parser = amount)]
    pub share_price: Option<f64>,

    /// Number of shares
    #[arg(long, value_parser = amount)]
    pub shares: Option<f64>,

    /// Initial margin requirement in percent
    #[arg(long, value_parser = amount, default_value_t = DEFAULT_INITIAL_MARGIN)]
    pub initial_margin: f64,

    /// Maintenance margin requirement in percent
    #[arg(long, value_parser = amount, default_value_t = DEFAULT_MAINTENANCE_MARGIN)]
    pub maintenance_margin: f64,
}

pub fn run_trading_margin(args: TradingMarginArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tm: TradingMarginInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => TradingMarginInput {
            share_price: args
                .share_price
                .ok_or("--share-price is required (or provide --input)")?,
            shares: args.shares.ok_or("--shares is required (or provide --input)")?,
            initial_margin_percent: args.initial_margin,
            maintenance_margin_percent: args.maintenance_margin,
        },
    };

    run::<TradingMargin>(&tm)
}

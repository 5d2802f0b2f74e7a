//! Percentage-based margin calculators.

pub mod profit;
pub mod trading;

pub use profit::{calculate_profit_margin, profit_margin, ProfitMargin, ProfitMarginInput};
pub use trading::{trading_margin, TradingMarginInput, TradingMarginOutput};

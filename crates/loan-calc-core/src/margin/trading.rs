use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::input::sanitize_field;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Regulation T initial margin.
pub const DEFAULT_INITIAL_MARGIN: Percent = 50.0;

/// Common broker maintenance requirement.
pub const DEFAULT_MAINTENANCE_MARGIN: Percent = 25.0;

fn default_initial() -> Percent {
    DEFAULT_INITIAL_MARGIN
}

fn default_maintenance() -> Percent {
    DEFAULT_MAINTENANCE_MARGIN
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingMarginInput {
    pub share_price: Money,
    pub shares: f64,
    #[serde(default = "default_initial")]
    pub initial_margin_percent: Percent,
    #[serde(default = "default_maintenance")]
    pub maintenance_margin_percent: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingMarginOutput {
    pub position_value: Money,
    pub equity_required: Money,
    pub amount_borrowed: Money,
    /// Share price at which equity falls to the maintenance requirement.
    /// 0 when nothing is borrowed or the requirement is 100%.
    pub margin_call_price: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Margin purchase: equity put up, amount borrowed and the margin-call price.
pub fn trading_margin(input: &TradingMarginInput) -> ComputationOutput<TradingMarginOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let price = sanitize_field("share_price", input.share_price, &mut warnings);
    let shares = sanitize_field("shares", input.shares, &mut warnings);
    let mut initial = sanitize_field("initial_margin_percent", input.initial_margin_percent, &mut warnings);
    let maintenance = sanitize_field(
        "maintenance_margin_percent",
        input.maintenance_margin_percent,
        &mut warnings,
    );
    if initial > 100.0 {
        warnings.push("Initial margin above 100%; capped at 100%".into());
        initial = 100.0;
    }

    let position_value = price * shares;
    let equity_required = position_value * initial / 100.0;
    let amount_borrowed = position_value - equity_required;

    let retained = 1.0 - maintenance / 100.0;
    let margin_call_price = if amount_borrowed > 0.0 && shares > 0.0 && retained > 0.0 {
        amount_borrowed / (shares * retained)
    } else {
        0.0
    };

    let output = TradingMarginOutput {
        position_value,
        equity_required,
        amount_borrowed,
        margin_call_price,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Margin purchase: equity = value × initial margin; call price = borrowed / (shares × (1 − maintenance))",
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{
    build_amortization_schedule, normalize_term, summarize, LoanSummary, PaymentScheduleEntry,
};
use crate::input::{sanitize, sanitize_field};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Term};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which product page the numbers are for. Affects labelling only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    #[default]
    General,
    Mortgage,
    Auto,
    Land,
    Personal,
    Student,
}

impl LoanKind {
    pub fn label(self) -> &'static str {
        match self {
            LoanKind::General => "Loan",
            LoanKind::Mortgage => "Mortgage",
            LoanKind::Auto => "Auto Loan",
            LoanKind::Land => "Land Loan",
            LoanKind::Personal => "Personal Loan",
            LoanKind::Student => "Student Loan",
        }
    }
}

/// Down payment as entered: a dollar amount or a percentage of the price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownPayment {
    Amount(Money),
    Percent(Percent),
}

impl Default for DownPayment {
    fn default() -> Self {
        DownPayment::Amount(0.0)
    }
}

impl DownPayment {
    /// Dollar amount against `price`, clamped to `[0, price]`.
    pub fn resolve(self, price: Money) -> Money {
        let price = sanitize(price);
        let amount = match self {
            DownPayment::Amount(a) => sanitize(a),
            DownPayment::Percent(p) => price * sanitize(p) / 100.0,
        };
        amount.min(price)
    }
}

// ---------------------------------------------------------------------------
// Ratios
// ---------------------------------------------------------------------------

/// Share of `price` covered by `amount`, in percent. 0 when price is 0.
pub fn down_payment_percent(amount: Money, price: Money) -> Percent {
    if price > 0.0 {
        amount * 100.0 / price
    } else {
        0.0
    }
}

/// Loan-to-value ratio in percent. 0 when value is 0.
pub fn loan_to_value(loan_amount: Money, value: Money) -> Percent {
    if value > 0.0 {
        loan_amount * 100.0 / value
    } else {
        0.0
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancedPurchaseInput {
    #[serde(default)]
    pub kind: LoanKind,
    pub price: Money,
    #[serde(default)]
    pub down_payment: DownPayment,
    pub annual_interest_rate: Percent,
    pub term: Term,
    #[serde(default = "default_true")]
    pub include_schedule: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancedPurchaseOutput {
    pub kind: LoanKind,
    pub price: Money,
    pub down_payment_amount: Money,
    pub down_payment_percent: Percent,
    pub loan_amount: Money,
    pub loan_to_value: Percent,
    pub summary: LoanSummary,
    pub schedule: Vec<PaymentScheduleEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Core of every price-minus-down-payment calculator, without the envelope.
pub(crate) fn financed_loan(
    kind: LoanKind,
    price: Money,
    down_payment_amount: Money,
    loan_amount: Money,
    annual_interest_rate: Percent,
    term_months: u32,
    include_schedule: bool,
) -> FinancedPurchaseOutput {
    let summary = summarize(loan_amount, annual_interest_rate, term_months);
    let schedule = if include_schedule {
        build_amortization_schedule(loan_amount, annual_interest_rate, term_months)
    } else {
        Vec::new()
    };

    FinancedPurchaseOutput {
        kind,
        price,
        down_payment_amount,
        down_payment_percent: down_payment_percent(down_payment_amount, price),
        loan_amount,
        loan_to_value: loan_to_value(loan_amount, price),
        summary,
        schedule,
    }
}

/// Loan, land, personal and student loan calculators: price less down payment,
/// amortized at a fixed rate.
pub fn finance_purchase(input: &FinancedPurchaseInput) -> ComputationOutput<FinancedPurchaseOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let price = sanitize_field("price", input.price, &mut warnings);
    let rate = sanitize_field("annual_interest_rate", input.annual_interest_rate, &mut warnings);
    let term_months = normalize_term("term", input.term, &mut warnings);

    let down = input.down_payment.resolve(price);
    if price > 0.0 && down >= price {
        warnings.push("Down payment covers the full price; nothing to finance".into());
    }
    let loan_amount = (price - down).max(0.0);

    let output = financed_loan(
        input.kind,
        price,
        down,
        loan_amount,
        rate,
        term_months,
        input.include_schedule,
    );

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        &format!("{} amortization on price less down payment", input.kind.label()),
        input,
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

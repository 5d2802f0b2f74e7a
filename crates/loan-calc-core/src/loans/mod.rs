//! Down-payment-adjusted loans. Each resolves a purchase price into a
//! borrowed amount, then hands that to the amortization engine unchanged.

pub mod auto;
pub mod financed;
pub mod mortgage;

pub use financed::{finance_purchase, DownPayment, FinancedPurchaseInput, FinancedPurchaseOutput, LoanKind};

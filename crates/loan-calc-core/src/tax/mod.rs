//! Simplified progressive income tax.

pub mod brackets;
pub mod income_tax;

pub use brackets::{progressive_tax, validate_brackets, Bracket, BracketSlice, TaxBreakdown};
pub use income_tax::{estimate_income_tax, FilingStatus, IncomeTaxInput, IncomeTaxOutput};

pub mod amortization;
pub mod calculator;
pub mod currency;
pub mod error;
pub mod input;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "refinance")]
pub mod refinance;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "margin")]
pub mod margin;

pub use calculator::Calculator;
pub use error::CalcError;
pub use types::*;

/// Result type for the fallible boundaries (flag parsing, JSON decoding).
/// The calculators themselves never fail.
pub type CalcResult<T> = Result<T, CalcError>;

//! The amortization engine: fixed-payment loans from principal, annual rate
//! and term to payment, schedule and totals.
//!
//! Every loan calculator is a parameterisation of this module. It is
//! down-payment-agnostic: callers pass the amount actually borrowed.

pub mod analysis;
pub mod params;
pub mod payment;
pub mod schedule;
pub mod summary;

pub use analysis::{analyze_loan, LoanAnalysis, LoanInput};
pub use params::{normalize_term, LoanParameters, MAX_TERM_MONTHS};
pub use payment::{compute_monthly_payment, monthly_rate};
pub use schedule::{build_amortization_schedule, PaymentScheduleEntry};
pub use summary::{summarize, LoanSummary};

//! Rent Affordability Calculator - a TUI calculator based on the 30% rule
//!
//! Converts a monthly rent into the annual income needed to afford it, or an
//! annual income into the monthly rent it supports, with a built-in FAQ

pub mod calculator;
pub mod cli;
pub mod constants;
pub mod content;
pub mod error;
pub mod faq;
pub mod format;
pub mod logging;
pub mod tui;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{RentCalcError, Result};

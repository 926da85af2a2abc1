//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

/// Annual income divided by monthly rent under the 30% rule
pub const AFFORDABILITY_MULTIPLIER: f64 = 30.0;
pub const CURRENCY_SYMBOL: &str = "£";
pub const RESULT_DECIMAL_PLACES: usize = 2;
pub const EVENT_POLL_INTERVAL_MS: u64 = 250;
pub const LOG_FILE_NAME: &str = "rent-calc-debug.log";

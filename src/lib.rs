//! Tally
//!
//! Tally validates retail receipts and scores them with a fixed, deterministic
//! set of points rules.

pub mod amount;
pub mod points;
pub mod prelude;
pub mod receipt;

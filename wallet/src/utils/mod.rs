//! # Utility Functions
//!
//! Pure helpers used across the wallet.
//!
//! ## Modules
//!
//! - **[`constants`]**: Protocol and timing constants
//! - **[`format`]**: Amount parsing and balance formatting
//! - **[`validation`]**: Transfer validation (amount, balance, recipient)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Address truncation for display

pub mod constants;
pub mod format;
pub mod validation;

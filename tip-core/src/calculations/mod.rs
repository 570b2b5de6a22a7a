//! Tip calculation modules.
//!
//! The numeric work is done in [`Decimal`](rust_decimal::Decimal) so that
//! percentages of currency amounts stay exact until the final formatting step.

pub mod common;
pub mod tip;

pub use tip::{calculate_tip, compute_tip};

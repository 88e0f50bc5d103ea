//! Holding enrichment: market value and gain/loss per position.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::*;
pub use valuation_model::*;

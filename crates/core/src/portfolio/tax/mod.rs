//! Short-term / long-term gain estimation.

mod tax_calculator;
mod tax_model;

pub use tax_calculator::*;
pub use tax_model::*;

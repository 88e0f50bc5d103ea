//! Portfolio risk heuristics: diversification score and concentration risk.

mod risk_calculator;
mod risk_model;

pub use risk_calculator::*;
pub use risk_model::*;

//! Portfolio summary: every aggregate for one holdings snapshot.

mod summary_calculator;
mod summary_model;
mod summary_service;


pub use summary_calculator::*;
pub use summary_model::*;
pub use summary_service::{PortfolioService, PortfolioServiceTrait};

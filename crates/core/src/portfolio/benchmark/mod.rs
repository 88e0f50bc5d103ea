//! Benchmark comparison against a fixed reference index return.

mod benchmark_calculator;
mod benchmark_model;

pub use benchmark_calculator::*;
pub use benchmark_model::*;

//! Portfolio analytics computed over holdings snapshots.

pub mod allocation;
pub mod benchmark;
pub mod risk;
pub mod summary;
pub mod tax;
pub mod valuation;

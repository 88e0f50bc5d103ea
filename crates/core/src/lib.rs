//! PortiFi Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio valuation engine (enrichment, allocation,
//! diversification, concentration risk, tax buckets, benchmark comparison) and
//! the holdings and watchlist services around it. Storage is external: services
//! talk to it through the repository traits defined here.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod settings;
pub mod utils;
pub mod watchlist;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Holdings module - domain models, CSV codec, services, and traits.

mod holdings_csv;
mod holdings_model;
mod holdings_service;
mod holdings_traits;

#[cfg(test)]
pub(crate) mod holdings_test_utils;
#[cfg(test)]
pub(crate) use holdings_test_utils as test_utils;

// Re-export the public interface
pub use holdings_csv::{
    holdings_to_csv, parse_holdings_csv, CsvImportResult, CsvRowIssue, ParsedHoldingsCsv,
    HOLDINGS_CSV_HEADERS,
};
pub use holdings_model::{normalize_symbol, Holding, HoldingUpdate, NewHolding};
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingsServiceTrait};

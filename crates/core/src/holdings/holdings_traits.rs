//! Holding repository and service traits.
//!
//! Persistence belongs to the hosted table store; these traits are the only
//! contact surface, so any backend (or an in-memory fake) can sit behind them.

use async_trait::async_trait;

use super::holdings_csv::CsvImportResult;
use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::errors::Result;
use crate::portfolio::valuation::EnrichedHolding;

/// Trait defining the contract for Holding repository operations.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Lists every holding owned by a user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Holding>>;

    /// Retrieves a holding by its ID.
    async fn get_by_id(&self, holding_id: &str) -> Result<Holding>;

    /// Creates a new holding.
    async fn create(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Creates several holdings at once (CSV import).
    async fn create_many(&self, new_holdings: Vec<NewHolding>) -> Result<Vec<Holding>>;

    /// Updates an existing holding.
    async fn update(&self, holding_update: HoldingUpdate) -> Result<Holding>;

    /// Deletes a holding by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, holding_id: &str) -> Result<usize>;
}

/// Trait for holding service operations.
#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    async fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;
    async fn get_enriched_holdings(&self, user_id: &str) -> Result<Vec<EnrichedHolding>>;
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(&self, holding_update: HoldingUpdate) -> Result<Holding>;
    async fn delete_holding(&self, holding_id: &str) -> Result<()>;

    /// Parses a CSV upload and persists every accepted row.
    async fn import_csv(&self, user_id: &str, content: &[u8]) -> Result<CsvImportResult>;

    /// Serializes the user's holdings to CSV text.
    async fn export_csv(&self, user_id: &str) -> Result<String>;
}

use log::{debug, info};
use std::sync::Arc;

use super::holdings_csv::{holdings_to_csv, parse_holdings_csv, CsvImportResult};
use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use super::holdings_traits::{HoldingRepositoryTrait, HoldingsServiceTrait};
use crate::errors::{Error, Result};
use crate::portfolio::valuation::{enrich_holdings, EnrichedHolding};

/// Service for managing a user's holdings
pub struct HoldingsService {
    repository: Arc<dyn HoldingRepositoryTrait>,
}

impl HoldingsService {
    /// Creates a new HoldingsService instance
    pub fn new(repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        self.repository.list_by_user(user_id).await
    }

    /// Lists the user's holdings with their valuation figures
    async fn get_enriched_holdings(&self, user_id: &str) -> Result<Vec<EnrichedHolding>> {
        let holdings = self.repository.list_by_user(user_id).await?;
        Ok(enrich_holdings(&holdings))
    }

    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let new_holding = new_holding.normalized();
        new_holding.validate()?;
        debug!(
            "Creating holding {} ({}) for user {}",
            new_holding.symbol, new_holding.asset_type, new_holding.user_id
        );
        self.repository.create(new_holding).await
    }

    async fn update_holding(&self, holding_update: HoldingUpdate) -> Result<Holding> {
        let holding_update = holding_update.normalized();
        holding_update.validate()?;
        self.repository.update(holding_update).await
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<()> {
        let deleted = self.repository.delete(holding_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Holding {}", holding_id)));
        }
        Ok(())
    }

    /// Parses an upload and stores every accepted row in one batch
    async fn import_csv(&self, user_id: &str, content: &[u8]) -> Result<CsvImportResult> {
        let parsed = parse_holdings_csv(content, user_id)?;
        info!(
            "CSV import for user {}: {} rows accepted, {} skipped",
            user_id,
            parsed.holdings.len(),
            parsed.issues.len()
        );

        let imported = if parsed.holdings.is_empty() {
            Vec::new()
        } else {
            self.repository.create_many(parsed.holdings).await?
        };

        Ok(CsvImportResult {
            imported,
            issues: parsed.issues,
        })
    }

    async fn export_csv(&self, user_id: &str) -> Result<String> {
        let holdings = self.repository.list_by_user(user_id).await?;
        holdings_to_csv(&holdings)
    }
}

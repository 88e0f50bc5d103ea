//! Service for computing portfolio summaries from stored holdings.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use crate::errors::Result;
use crate::holdings::HoldingRepositoryTrait;
use crate::portfolio::valuation::enrich_holdings;
use crate::settings::AnalysisConfig;

use super::{compute_portfolio_summary, PortfolioSummary};

/// Trait for portfolio summary service.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Computes the summary of a user's current holdings.
    async fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary>;

    /// Same as `get_portfolio_summary`, evaluated at a fixed instant.
    async fn get_portfolio_summary_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PortfolioSummary>;
}

/// Loads a holdings snapshot and runs the valuation engine over it.
pub struct PortfolioService {
    repository: Arc<dyn HoldingRepositoryTrait>,
    config: AnalysisConfig,
}

impl PortfolioService {
    /// Creates the service, rejecting out-of-range analysis thresholds.
    pub fn new(
        repository: Arc<dyn HoldingRepositoryTrait>,
        config: AnalysisConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { repository, config })
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        self.get_portfolio_summary_at(user_id, Utc::now()).await
    }

    async fn get_portfolio_summary_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PortfolioSummary> {
        let holdings = self.repository.list_by_user(user_id).await?;
        debug!(
            "Computing portfolio summary for user {} over {} holdings",
            user_id,
            holdings.len()
        );

        let enriched = enrich_holdings(&holdings);
        Ok(compute_portfolio_summary(&enriched, now, &self.config))
    }
}

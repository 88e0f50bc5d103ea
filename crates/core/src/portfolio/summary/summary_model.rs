use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::AssetAllocation;
use crate::portfolio::benchmark::BenchmarkComparison;
use crate::portfolio::risk::{ConcentrationRisk, DiversificationScore};
use crate::portfolio::tax::TaxBuckets;
use crate::portfolio::valuation::EnrichedHolding;

/// Every portfolio-level aggregate for one holdings snapshot.
///
/// Ephemeral: recomputed on demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost_basis: Decimal,
    /// Net unrealized gain/loss across all holdings
    pub total_gain_loss: Decimal,
    pub holding_count: usize,
    /// Sorted by value descending
    pub allocation: Vec<AssetAllocation>,
    pub diversification: DiversificationScore,
    /// Sorted by share descending
    pub concentration_risks: Vec<ConcentrationRisk>,
    pub tax_buckets: TaxBuckets,
    pub benchmark: BenchmarkComparison,
    /// Largest positions by value
    pub top_holdings: Vec<EnrichedHolding>,
    /// Largest absolute percentage movers
    pub top_movers: Vec<EnrichedHolding>,
    pub calculated_at: DateTime<Utc>,
}

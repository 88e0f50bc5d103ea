use chrono::{DateTime, Utc};

use crate::constants::TOP_HOLDINGS_LIMIT;
use crate::portfolio::allocation::calculate_asset_allocation;
use crate::portfolio::benchmark::compare_to_benchmark_with_return;
use crate::portfolio::risk::{
    calculate_diversification_score, detect_concentration_risks_with_threshold,
};
use crate::portfolio::tax::split_tax_buckets_with_period;
use crate::portfolio::valuation::{
    total_cost_basis, total_gain_loss, total_portfolio_value, EnrichedHolding,
};
use crate::settings::AnalysisConfig;

use super::PortfolioSummary;

/// The `limit` largest holdings by `total_value`.
pub fn top_holdings_by_value(holdings: &[EnrichedHolding], limit: usize) -> Vec<EnrichedHolding> {
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    sorted.truncate(limit);
    sorted
}

/// The `limit` holdings with the largest absolute `gain_loss_pct`.
pub fn top_movers(holdings: &[EnrichedHolding], limit: usize) -> Vec<EnrichedHolding> {
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| b.gain_loss_pct.abs().cmp(&a.gain_loss_pct.abs()));
    sorted.truncate(limit);
    sorted
}

/// Computes every aggregate over an enriched snapshot, evaluated at `now`.
pub fn compute_portfolio_summary(
    holdings: &[EnrichedHolding],
    now: DateTime<Utc>,
    config: &AnalysisConfig,
) -> PortfolioSummary {
    PortfolioSummary {
        total_value: total_portfolio_value(holdings),
        total_cost_basis: total_cost_basis(holdings),
        total_gain_loss: total_gain_loss(holdings),
        holding_count: holdings.len(),
        allocation: calculate_asset_allocation(holdings),
        diversification: calculate_diversification_score(holdings),
        concentration_risks: detect_concentration_risks_with_threshold(
            holdings,
            config.concentration_threshold_pct,
        ),
        tax_buckets: split_tax_buckets_with_period(holdings, now, config.long_term_holding_days),
        benchmark: compare_to_benchmark_with_return(holdings, config.benchmark_return_pct),
        top_holdings: top_holdings_by_value(holdings, TOP_HOLDINGS_LIMIT),
        top_movers: top_movers(holdings, TOP_HOLDINGS_LIMIT),
        calculated_at: now,
    }
}

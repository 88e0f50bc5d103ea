//! Diversification scoring and concentration-risk detection.

use std::collections::HashSet;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    CONCENTRATION_THRESHOLD_PCT, DIVERSIFICATION_BREADTH_WEIGHT,
    DIVERSIFICATION_CONCENTRATION_WEIGHT, DIVERSIFICATION_COUNT_WEIGHT,
    DIVERSIFICATION_HOLDING_CAP, DIVERSIFICATION_MAX_SCORE, RECOGNIZED_ASSET_TYPE_COUNT,
};
use crate::portfolio::valuation::{share_of_total, total_portfolio_value, EnrichedHolding};

use super::{ConcentrationRisk, DiversificationScore};

/// Largest single holding's share of total value, in percent.
///
/// Zero for an empty portfolio or when total value is not positive.
pub fn max_concentration_pct(holdings: &[EnrichedHolding]) -> Decimal {
    let total_value = total_portfolio_value(holdings);
    holdings
        .iter()
        .map(|h| share_of_total(h.total_value, total_value))
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Scores breadth, concentration and holding count on a 0-100 scale.
///
/// `round(min(100, 40·types/7 + 40·(1 − maxConcentration/100) + 20·min(count,10)/10))`,
/// clamped at zero. An empty portfolio scores 0.
pub fn calculate_diversification_score(holdings: &[EnrichedHolding]) -> DiversificationScore {
    let distinct_asset_types = holdings
        .iter()
        .map(|h| h.holding.asset_type)
        .collect::<HashSet<_>>()
        .len();
    let max_concentration = max_concentration_pct(holdings);
    let holding_count = holdings.len();

    if holdings.is_empty() {
        return DiversificationScore {
            score: 0,
            distinct_asset_types,
            max_concentration_pct: max_concentration,
            holding_count,
        };
    }

    let breadth = DIVERSIFICATION_BREADTH_WEIGHT * Decimal::from(distinct_asset_types as u64)
        / Decimal::from(RECOGNIZED_ASSET_TYPE_COUNT);
    let concentration = DIVERSIFICATION_CONCENTRATION_WEIGHT
        .saturating_mul(Decimal::ONE.saturating_sub(max_concentration / Decimal::ONE_HUNDRED));
    let count = DIVERSIFICATION_COUNT_WEIGHT
        * Decimal::from(holding_count.min(DIVERSIFICATION_HOLDING_CAP) as u64)
        / Decimal::from(DIVERSIFICATION_HOLDING_CAP as u64);

    let raw = concentration
        .saturating_add(breadth + count)
        .min(DIVERSIFICATION_MAX_SCORE);
    let score = raw
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
        .to_u32()
        .unwrap_or(0);

    DiversificationScore {
        score,
        distinct_asset_types,
        max_concentration_pct: max_concentration,
        holding_count,
    }
}

/// Holdings whose share of total value is strictly above `threshold_pct`,
/// sorted by share descending.
pub fn detect_concentration_risks_with_threshold(
    holdings: &[EnrichedHolding],
    threshold_pct: Decimal,
) -> Vec<ConcentrationRisk> {
    let total_value = total_portfolio_value(holdings);

    let mut risks: Vec<ConcentrationRisk> = holdings
        .iter()
        .map(|h| (h, share_of_total(h.total_value, total_value)))
        .filter(|(_, pct)| *pct > threshold_pct)
        .map(|(h, percentage)| ConcentrationRisk {
            holding_id: h.holding.id.clone(),
            name: h.holding.name.clone(),
            symbol: h.holding.symbol.clone(),
            value: h.total_value,
            percentage,
        })
        .collect();

    risks.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    risks
}

/// Concentration risks at the standard 20% threshold.
pub fn detect_concentration_risks(holdings: &[EnrichedHolding]) -> Vec<ConcentrationRisk> {
    detect_concentration_risks_with_threshold(holdings, CONCENTRATION_THRESHOLD_PCT)
}

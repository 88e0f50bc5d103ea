//! Groups enriched holdings by asset type.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::assets::AssetType;
use crate::portfolio::valuation::{share_of_total, total_portfolio_value, EnrichedHolding};

use super::AssetAllocation;

/// Computes the allocation breakdown by asset type.
///
/// Only types whose aggregated value is strictly positive are emitted.
/// Entries are sorted by value descending; equal values keep the canonical
/// `AssetType::ALL` order.
pub fn calculate_asset_allocation(holdings: &[EnrichedHolding]) -> Vec<AssetAllocation> {
    let total_value = total_portfolio_value(holdings);

    let mut grouped: HashMap<AssetType, (Decimal, usize)> = HashMap::new();
    for holding in holdings {
        let entry = grouped
            .entry(holding.holding.asset_type)
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(holding.total_value);
        entry.1 += 1;
    }

    let mut allocations: Vec<AssetAllocation> = AssetType::ALL
        .into_iter()
        .filter_map(|asset_type| {
            let (value, holding_count) = grouped.get(&asset_type).copied()?;
            if value <= Decimal::ZERO {
                return None;
            }
            Some(AssetAllocation {
                asset_type,
                label: asset_type.label().to_string(),
                color: asset_type.color().to_string(),
                value,
                percentage: share_of_total(value, total_value),
                holding_count,
            })
        })
        .collect();

    // Stable sort keeps canonical order among ties
    allocations.sort_by(|a, b| b.value.cmp(&a.value));
    allocations
}

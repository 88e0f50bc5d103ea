//! Allocation models for portfolio breakdown by asset type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetType;

/// Aggregated value of a single asset type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_type: AssetType,
    /// Display name of the asset type
    pub label: String,
    /// Color for visualization (hex code)
    pub color: String,
    /// Sum of `total_value` over holdings of this type
    pub value: Decimal,
    /// Percentage of total portfolio (0-100)
    pub percentage: Decimal,
    /// Number of holdings of this type
    pub holding_count: usize,
}

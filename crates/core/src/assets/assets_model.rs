//! Asset classification for holdings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Category of a recorded holding.
///
/// The set is closed: the diversification score divides by the number of
/// variants, so adding one changes every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    #[default]
    Stock,
    Crypto,
    RealEstate,
    Vehicle,
    Alternative,
    Metal,
    Cash,
}

impl AssetType {
    /// All recognized asset types in canonical display order.
    pub const ALL: [AssetType; 7] = [
        AssetType::Stock,
        AssetType::Crypto,
        AssetType::RealEstate,
        AssetType::Vehicle,
        AssetType::Alternative,
        AssetType::Metal,
        AssetType::Cash,
    ];

    /// Returns the wire/storage representation (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
            AssetType::RealEstate => "real_estate",
            AssetType::Vehicle => "vehicle",
            AssetType::Alternative => "alternative",
            AssetType::Metal => "metal",
            AssetType::Cash => "cash",
        }
    }

    /// Returns the plural label used in allocation breakdowns.
    pub const fn label(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stocks",
            AssetType::Crypto => "Crypto",
            AssetType::RealEstate => "Real Estate",
            AssetType::Vehicle => "Vehicles",
            AssetType::Alternative => "Alternatives",
            AssetType::Metal => "Metals",
            AssetType::Cash => "Cash",
        }
    }

    /// Returns the chart color (hex code).
    pub const fn color(&self) -> &'static str {
        match self {
            AssetType::Stock => "#0066FF",
            AssetType::Crypto => "#00C2A8",
            AssetType::RealEstate => "#FF6B35",
            AssetType::Vehicle => "#8B5CF6",
            AssetType::Alternative => "#F59E0B",
            AssetType::Metal => "#6B7280",
            AssetType::Cash => "#10B981",
        }
    }

    /// Parses an asset type from its wire name, ignoring case and surrounding whitespace.
    pub fn from_db_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        AssetType::ALL
            .into_iter()
            .find(|asset_type| asset_type.as_str() == normalized)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::from_db_str(s).ok_or_else(|| {
            Error::Validation(ValidationError::UnknownAssetType(s.trim().to_string()))
        })
    }
}

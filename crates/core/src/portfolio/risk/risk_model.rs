use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Heuristic 0-100 diversification score and the inputs it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationScore {
    pub score: u32,
    pub distinct_asset_types: usize,
    /// Largest single position as a share of total value (0-100)
    pub max_concentration_pct: Decimal,
    pub holding_count: usize,
}

impl DiversificationScore {
    pub fn rating(&self) -> DiversificationRating {
        DiversificationRating::from_score(self.score)
    }
}

/// Coarse band of a diversification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiversificationRating {
    /// 70 and above
    Strong,
    /// 40 to 69
    Moderate,
    /// Below 40
    Weak,
}

impl DiversificationRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => DiversificationRating::Strong,
            40..=69 => DiversificationRating::Moderate,
            _ => DiversificationRating::Weak,
        }
    }
}

/// A position whose share of total value exceeds the concentration threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationRisk {
    pub holding_id: String,
    pub name: String,
    pub symbol: String,
    pub value: Decimal,
    /// Share of total portfolio value (0-100)
    pub percentage: Decimal,
}

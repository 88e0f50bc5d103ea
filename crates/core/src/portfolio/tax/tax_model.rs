use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax holding-period classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingPeriod {
    /// Held for less than the long-term period
    ShortTerm,
    /// Held for the long-term period or longer
    LongTerm,
}

/// Positions in one holding-period bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxBucket {
    pub holding_count: usize,
    /// Sum of positive unrealized gains; losses contribute nothing
    pub gains: Decimal,
}

/// Short-term vs. long-term split of estimated gains.
///
/// Uses `created_at` as the acquisition date and current price as a
/// hypothetical exit price, so these are estimates rather than realized gains.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxBuckets {
    pub short_term: TaxBucket,
    pub long_term: TaxBucket,
}

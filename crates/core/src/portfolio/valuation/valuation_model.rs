use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Holding;

/// A holding plus its derived valuation figures.
///
/// Never persisted; rebuilt from the stored `Holding` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    /// `quantity × current_price`
    pub total_value: Decimal,
    /// `total_value − quantity × purchase_price`
    pub gain_loss: Decimal,
    /// Gain relative to cost basis, in percent. Exactly zero when the cost basis is not positive.
    pub gain_loss_pct: Decimal,
}

impl EnrichedHolding {
    /// Cost basis recomputed from the underlying holding.
    pub fn cost_basis(&self) -> Decimal {
        self.holding.cost_basis()
    }
}

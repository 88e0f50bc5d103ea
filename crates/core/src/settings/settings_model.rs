//! Tunable thresholds for portfolio analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BENCHMARK_RETURN_PCT, CONCENTRATION_THRESHOLD_PCT, LONG_TERM_HOLDING_DAYS,
    MAX_LONG_TERM_HOLDING_DAYS,
};
use crate::{Error, Result};

/// Thresholds used by the analysis calculators.
///
/// `Default` carries the standard product constants (24% benchmark, 20%
/// concentration threshold, 365-day holding period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// Reference index return in percent
    pub benchmark_return_pct: Decimal,
    /// Positions strictly above this share (percent) are flagged
    pub concentration_threshold_pct: Decimal,
    /// Holdings held at least this many days are long-term
    pub long_term_holding_days: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            benchmark_return_pct: BENCHMARK_RETURN_PCT,
            concentration_threshold_pct: CONCENTRATION_THRESHOLD_PCT,
            long_term_holding_days: LONG_TERM_HOLDING_DAYS,
        }
    }
}

impl AnalysisConfig {
    /// Validates the configured thresholds.
    pub fn validate(&self) -> Result<()> {
        if self.concentration_threshold_pct < Decimal::ZERO
            || self.concentration_threshold_pct > Decimal::ONE_HUNDRED
        {
            return Err(Error::invalid_input(format!(
                "Concentration threshold must be between 0 and 100, got {}",
                self.concentration_threshold_pct
            )));
        }
        if !(0..=MAX_LONG_TERM_HOLDING_DAYS).contains(&self.long_term_holding_days) {
            return Err(Error::invalid_input(format!(
                "Long-term holding period must be between 0 and {} days, got {}",
                MAX_LONG_TERM_HOLDING_DAYS, self.long_term_holding_days
            )));
        }
        Ok(())
    }
}

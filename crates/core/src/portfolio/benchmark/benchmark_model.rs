use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio aggregate return compared against a fixed reference index return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub benchmark_name: String,
    /// `Σgain_loss / Σcost_basis × 100`
    pub portfolio_return_pct: Decimal,
    pub benchmark_return_pct: Decimal,
    /// `portfolio_return_pct − benchmark_return_pct` (percentage points)
    pub difference_pct: Decimal,
}

impl BenchmarkComparison {
    pub fn new(
        benchmark_name: impl Into<String>,
        portfolio_return_pct: Decimal,
        benchmark_return_pct: Decimal,
    ) -> Self {
        Self {
            benchmark_name: benchmark_name.into(),
            portfolio_return_pct,
            benchmark_return_pct,
            difference_pct: portfolio_return_pct.saturating_sub(benchmark_return_pct),
        }
    }

    /// Matching the benchmark exactly counts as outperforming.
    pub fn verdict(&self) -> BenchmarkVerdict {
        if self.difference_pct >= Decimal::ZERO {
            BenchmarkVerdict::Outperforming {
                by_pct: self.difference_pct,
            }
        } else {
            BenchmarkVerdict::Underperforming {
                by_pct: -self.difference_pct,
            }
        }
    }
}

/// Direction and magnitude (percentage points, non-negative) of the benchmark delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenchmarkVerdict {
    Outperforming {
        #[serde(rename = "byPct")]
        by_pct: Decimal,
    },
    Underperforming {
        #[serde(rename = "byPct")]
        by_pct: Decimal,
    },
}

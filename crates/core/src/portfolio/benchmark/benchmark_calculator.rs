use rust_decimal::Decimal;

use crate::constants::{BENCHMARK_NAME, BENCHMARK_RETURN_PCT};
use crate::portfolio::valuation::{percent_of, total_cost_basis, total_gain_loss, EnrichedHolding};

use super::BenchmarkComparison;

/// Aggregate return of the portfolio in percent.
///
/// Zero for an empty portfolio or a zero total cost basis.
pub fn portfolio_return_pct(holdings: &[EnrichedHolding]) -> Decimal {
    if holdings.is_empty() {
        return Decimal::ZERO;
    }
    let cost_basis = total_cost_basis(holdings);
    if cost_basis.is_zero() {
        return Decimal::ZERO;
    }
    percent_of(total_gain_loss(holdings), cost_basis)
}

/// Compares the portfolio return against a given benchmark return.
pub fn compare_to_benchmark_with_return(
    holdings: &[EnrichedHolding],
    benchmark_return_pct: Decimal,
) -> BenchmarkComparison {
    BenchmarkComparison::new(
        BENCHMARK_NAME,
        portfolio_return_pct(holdings),
        benchmark_return_pct,
    )
}

/// Compares the portfolio return against the fixed 24% benchmark return.
pub fn compare_to_benchmark(holdings: &[EnrichedHolding]) -> BenchmarkComparison {
    compare_to_benchmark_with_return(holdings, BENCHMARK_RETURN_PCT)
}

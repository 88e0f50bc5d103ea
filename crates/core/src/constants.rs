use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of recognized asset types, the breadth divisor of the diversification score
pub const RECOGNIZED_ASSET_TYPE_COUNT: u32 = 7;

/// Holding count at which the diversification count term saturates
pub const DIVERSIFICATION_HOLDING_CAP: usize = 10;

/// Diversification score weights (breadth, concentration, count)
pub const DIVERSIFICATION_BREADTH_WEIGHT: Decimal = dec!(40);
pub const DIVERSIFICATION_CONCENTRATION_WEIGHT: Decimal = dec!(40);
pub const DIVERSIFICATION_COUNT_WEIGHT: Decimal = dec!(20);

/// Upper bound of the diversification score
pub const DIVERSIFICATION_MAX_SCORE: Decimal = dec!(100);

/// A position above this share (percent of total value) is a concentration risk
pub const CONCENTRATION_THRESHOLD_PCT: Decimal = dec!(20);

/// Holding period (days) at which gains count as long-term
pub const LONG_TERM_HOLDING_DAYS: i64 = 365;

/// Reference index return (percent) used for the benchmark comparison
pub const BENCHMARK_RETURN_PCT: Decimal = dec!(24);

/// Display name of the reference index
pub const BENCHMARK_NAME: &str = "S&P 500 (SPY)";

/// Number of entries in the top holdings / top movers lists
pub const TOP_HOLDINGS_LIMIT: usize = 5;

/// Largest accepted `quantity × price` of a single position.
///
/// Keeps every aggregate exact: a sum of up to 10^8 positions at this bound
/// stays far below `Decimal::MAX`.
pub const MAX_POSITION_VALUE: Decimal = dec!(100000000000000000000);

/// Longest configurable long-term holding period, in days (a century)
pub const MAX_LONG_TERM_HOLDING_DAYS: i64 = 36500;

//! Property-based integration tests for the valuation engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use portifi_core::holdings::{holdings_to_csv, parse_holdings_csv, Holding};
use portifi_core::portfolio::allocation::calculate_asset_allocation;
use portifi_core::portfolio::benchmark::{compare_to_benchmark_with_return, BenchmarkVerdict};
use portifi_core::portfolio::risk::{calculate_diversification_score, detect_concentration_risks};
use portifi_core::portfolio::tax::split_tax_buckets;
use portifi_core::portfolio::valuation::{
    enrich_holding, enrich_holdings, share_of_total, total_portfolio_value,
};
use portifi_core::AssetType;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn arb_asset_type() -> impl Strategy<Value = AssetType> {
    proptest::sample::select(AssetType::ALL.to_vec())
}

/// Non-negative price with cent precision.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Non-negative quantity with up to four decimals (fractional crypto).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|units| Decimal::new(units, 4))
}

/// Any quantity, negative included.
fn arb_signed_quantity() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000).prop_map(|units| Decimal::new(units, 4))
}

fn build_holding(
    index: usize,
    asset_type: AssetType,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    age_days: i64,
) -> Holding {
    Holding {
        id: format!("h-{}", index),
        user_id: "user-1".to_string(),
        name: format!("Holding {}", index),
        symbol: format!("SYM{}", index),
        quantity,
        purchase_price,
        current_price,
        asset_type,
        created_at: now() - Duration::days(age_days),
        updated_at: now(),
    }
}

fn arb_holding_with(quantity: impl Strategy<Value = Decimal>) -> impl Strategy<Value = Holding> {
    (
        arb_asset_type(),
        quantity,
        arb_price(),
        arb_price(),
        0i64..2000,
    )
        .prop_map(|(asset_type, quantity, purchase, current, age)| {
            build_holding(0, asset_type, quantity, purchase, current, age)
        })
}

/// Generates a portfolio of valid holdings with unique ids.
fn arb_portfolio(max_count: usize) -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::vec(arb_holding_with(arb_quantity()), 0..=max_count).prop_map(
        |holdings| {
            holdings
                .into_iter()
                .enumerate()
                .map(|(i, mut h)| {
                    h.id = format!("h-{}", i);
                    h.symbol = format!("SYM{}", i);
                    h
                })
                .collect()
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Enrichment is pure and total, negative quantities included.
    #[test]
    fn prop_enrichment_is_pure_and_total(holding in arb_holding_with(arb_signed_quantity())) {
        let before = holding.clone();
        let enriched = enrich_holding(&holding);

        prop_assert_eq!(&holding, &before);
        prop_assert_eq!(enriched.total_value, holding.quantity * holding.current_price);
        prop_assert_eq!(
            enriched.gain_loss,
            enriched.total_value - holding.quantity * holding.purchase_price
        );
        prop_assert_eq!(enrich_holding(&holding), enriched);
    }

    /// Zero cost basis always reports a gain percentage of exactly zero.
    #[test]
    fn prop_zero_cost_basis_guard(
        mut holding in arb_holding_with(arb_quantity()),
        zero_quantity in any::<bool>(),
    ) {
        if zero_quantity {
            holding.quantity = Decimal::ZERO;
        } else {
            holding.purchase_price = Decimal::ZERO;
        }
        prop_assert_eq!(enrich_holding(&holding).gain_loss_pct, Decimal::ZERO);
    }

    /// Total value is the sum of enriched values; enrichment keeps length and order.
    #[test]
    fn prop_aggregate_additivity(holdings in arb_portfolio(30)) {
        let enriched = enrich_holdings(&holdings);

        prop_assert_eq!(enriched.len(), holdings.len());
        for (e, h) in enriched.iter().zip(&holdings) {
            prop_assert_eq!(&e.holding.id, &h.id);
        }
        let expected: Decimal = enriched.iter().map(|h| h.total_value).sum();
        prop_assert_eq!(total_portfolio_value(&enriched), expected);
    }

    /// Allocation covers the whole portfolio and never emits empty groups.
    #[test]
    fn prop_allocation_completeness(holdings in arb_portfolio(30)) {
        let enriched = enrich_holdings(&holdings);
        let allocation = calculate_asset_allocation(&enriched);

        let allocated: Decimal = allocation.iter().map(|a| a.value).sum();
        prop_assert_eq!(allocated, total_portfolio_value(&enriched));
        prop_assert!(allocation.iter().all(|a| a.value > Decimal::ZERO));
        prop_assert!(allocation.windows(2).all(|w| w[0].value >= w[1].value));
    }

    /// The diversification score stays within 0..=100 for any input.
    #[test]
    fn prop_diversification_score_bounds(
        holdings in proptest::collection::vec(arb_holding_with(arb_signed_quantity()), 0..20),
    ) {
        let score = calculate_diversification_score(&enrich_holdings(&holdings));
        prop_assert!(score.score <= 100);
        if holdings.is_empty() {
            prop_assert_eq!(score.score, 0);
        }
    }

    /// A single valued holding scores on breadth and count only.
    #[test]
    fn prop_single_holding_score(holding in arb_holding_with(arb_quantity())) {
        let enriched = enrich_holdings(&[holding]);
        prop_assume!(enriched[0].total_value > Decimal::ZERO);

        let score = calculate_diversification_score(&enriched);
        prop_assert_eq!(score.max_concentration_pct, dec!(100));
        prop_assert_eq!(score.score, 8);
    }

    /// Flagged holdings are exactly those strictly above 20%, largest first.
    #[test]
    fn prop_concentration_threshold(holdings in arb_portfolio(12)) {
        let enriched = enrich_holdings(&holdings);
        let total = total_portfolio_value(&enriched);
        let risks = detect_concentration_risks(&enriched);

        for h in &enriched {
            let flagged = risks.iter().any(|r| r.holding_id == h.holding.id);
            prop_assert_eq!(flagged, share_of_total(h.total_value, total) > dec!(20));
        }
        prop_assert!(risks.windows(2).all(|w| w[0].percentage >= w[1].percentage));
    }

    /// Every holding lands in exactly one tax bucket; gains are never negative.
    #[test]
    fn prop_tax_bucket_exclusivity(holdings in arb_portfolio(30)) {
        let enriched = enrich_holdings(&holdings);
        let buckets = split_tax_buckets(&enriched, now());

        prop_assert_eq!(
            buckets.short_term.holding_count + buckets.long_term.holding_count,
            holdings.len()
        );
        let long_term = holdings
            .iter()
            .filter(|h| now() - h.created_at >= Duration::days(365))
            .count();
        prop_assert_eq!(buckets.long_term.holding_count, long_term);
        prop_assert!(buckets.short_term.gains >= Decimal::ZERO);
        prop_assert!(buckets.long_term.gains >= Decimal::ZERO);
    }

    /// Export writes a header plus one row per holding, and import reads every row back.
    #[test]
    fn prop_csv_shape(
        holdings in arb_portfolio(10),
        names in proptest::collection::vec("[A-Za-z][A-Za-z ,\"]{0,18}[A-Za-z]", 10),
    ) {
        let holdings: Vec<Holding> = holdings
            .into_iter()
            .zip(names)
            .map(|(mut h, name)| {
                h.name = name;
                h
            })
            .collect();

        let csv = holdings_to_csv(&holdings).unwrap();
        let parsed = parse_holdings_csv(csv.as_bytes(), "user-1").unwrap();

        prop_assert!(csv.starts_with("Name,Symbol,Type,"));
        prop_assert!(parsed.issues.is_empty());
        prop_assert_eq!(parsed.holdings.len(), holdings.len());
        for (draft, original) in parsed.holdings.iter().zip(&holdings) {
            prop_assert_eq!(&draft.name, &original.name);
            prop_assert_eq!(draft.asset_type, original.asset_type);
            prop_assert_eq!(draft.current_price, original.current_price);
        }
    }

    /// The benchmark verdict follows the sign of the difference.
    #[test]
    fn prop_benchmark_delta_sign(
        holdings in arb_portfolio(10),
        reference in (-5000i64..5000).prop_map(|bp| Decimal::new(bp, 2)),
    ) {
        let comparison = compare_to_benchmark_with_return(&enrich_holdings(&holdings), reference);

        prop_assert_eq!(
            comparison.difference_pct,
            comparison.portfolio_return_pct - reference
        );
        match comparison.verdict() {
            BenchmarkVerdict::Outperforming { by_pct } => {
                prop_assert!(comparison.difference_pct >= Decimal::ZERO);
                prop_assert_eq!(by_pct, comparison.difference_pct);
            }
            BenchmarkVerdict::Underperforming { by_pct } => {
                prop_assert!(comparison.difference_pct < Decimal::ZERO);
                prop_assert_eq!(by_pct, -comparison.difference_pct);
            }
        }
    }
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn two_holding_concentration_example() {
    let holdings = vec![
        build_holding(0, AssetType::Stock, dec!(1), dec!(100), dec!(800), 10),
        build_holding(1, AssetType::Stock, dec!(1), dec!(100), dec!(200), 10),
    ];
    let risks = detect_concentration_risks(&enrich_holdings(&holdings));

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].holding_id, "h-0");
    assert_eq!(risks[0].percentage, dec!(80));
}

#[test]
fn underperformance_example() {
    // 12% portfolio return against a 24% benchmark
    let holdings = vec![build_holding(0, AssetType::Stock, dec!(1), dec!(100), dec!(112), 10)];
    let comparison = compare_to_benchmark_with_return(&enrich_holdings(&holdings), dec!(24));

    assert_eq!(comparison.portfolio_return_pct, dec!(12));
    assert_eq!(
        comparison.verdict(),
        BenchmarkVerdict::Underperforming { by_pct: dec!(12) }
    );
}

#[test]
fn tax_boundary_is_long_term() {
    let holdings = vec![build_holding(0, AssetType::Crypto, dec!(1), dec!(1), dec!(2), 365)];
    let buckets = split_tax_buckets(&enrich_holdings(&holdings), now());

    assert_eq!(buckets.long_term.holding_count, 1);
    assert_eq!(buckets.short_term.holding_count, 0);
}

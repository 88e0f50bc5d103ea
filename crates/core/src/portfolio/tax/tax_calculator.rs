use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::LONG_TERM_HOLDING_DAYS;
use crate::portfolio::valuation::EnrichedHolding;
use crate::utils::time_utils::is_held_at_least;

use super::{HoldingPeriod, TaxBuckets};

/// Classifies a holding by how long it has been held at `now`.
pub fn classify_holding_period(
    holding: &EnrichedHolding,
    now: DateTime<Utc>,
    long_term_days: i64,
) -> HoldingPeriod {
    if is_held_at_least(holding.holding.created_at, now, long_term_days) {
        HoldingPeriod::LongTerm
    } else {
        HoldingPeriod::ShortTerm
    }
}

/// Partitions holdings into short/long-term buckets and sums their positive gains.
pub fn split_tax_buckets_with_period(
    holdings: &[EnrichedHolding],
    now: DateTime<Utc>,
    long_term_days: i64,
) -> TaxBuckets {
    let mut buckets = TaxBuckets::default();

    for holding in holdings {
        let bucket = match classify_holding_period(holding, now, long_term_days) {
            HoldingPeriod::ShortTerm => &mut buckets.short_term,
            HoldingPeriod::LongTerm => &mut buckets.long_term,
        };
        bucket.holding_count += 1;
        bucket.gains = bucket.gains.saturating_add(holding.gain_loss.max(Decimal::ZERO));
    }

    buckets
}

/// Tax buckets with the standard 365-day long-term period.
pub fn split_tax_buckets(holdings: &[EnrichedHolding], now: DateTime<Utc>) -> TaxBuckets {
    split_tax_buckets_with_period(holdings, now, LONG_TERM_HOLDING_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetType;
    use crate::holdings::Holding;
    use crate::portfolio::valuation::enrich_holdings;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 15, 0, 0).unwrap()
    }

    fn holding(id: &str, age: Duration, purchase: Decimal, current: Decimal) -> Holding {
        let created_at = now() - age;
        Holding {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            name: id.to_string(),
            symbol: id.to_uppercase(),
            quantity: dec!(10),
            purchase_price: purchase,
            current_price: current,
            asset_type: AssetType::Stock,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_buckets_split_by_age() {
        let enriched = enrich_holdings(&[
            holding("new", Duration::days(30), dec!(10), dec!(15)),
            holding("old", Duration::days(800), dec!(10), dec!(30)),
        ]);

        let buckets = split_tax_buckets(&enriched, now());

        assert_eq!(buckets.short_term.holding_count, 1);
        assert_eq!(buckets.short_term.gains, dec!(50));
        assert_eq!(buckets.long_term.holding_count, 1);
        assert_eq!(buckets.long_term.gains, dec!(200));
    }

    #[test]
    fn test_exactly_one_year_is_long_term() {
        let enriched = enrich_holdings(&[holding("edge", Duration::days(365), dec!(1), dec!(2))]);
        assert_eq!(
            classify_holding_period(&enriched[0], now(), 365),
            HoldingPeriod::LongTerm
        );

        let almost = enrich_holdings(&[holding(
            "almost",
            Duration::days(365) - Duration::seconds(1),
            dec!(1),
            dec!(2),
        )]);
        assert_eq!(
            classify_holding_period(&almost[0], now(), 365),
            HoldingPeriod::ShortTerm
        );
    }

    #[test]
    fn test_losses_excluded_from_gains() {
        let enriched = enrich_holdings(&[
            holding("winner", Duration::days(10), dec!(10), dec!(12)),
            holding("loser", Duration::days(10), dec!(10), dec!(4)),
        ]);

        let buckets = split_tax_buckets(&enriched, now());

        assert_eq!(buckets.short_term.holding_count, 2);
        assert_eq!(buckets.short_term.gains, dec!(20));
        assert_eq!(buckets.long_term, Default::default());
    }

    #[test]
    fn test_every_holding_lands_in_exactly_one_bucket() {
        let enriched = enrich_holdings(&[
            holding("a", Duration::days(1), dec!(1), dec!(1)),
            holding("b", Duration::days(364), dec!(1), dec!(1)),
            holding("c", Duration::days(365), dec!(1), dec!(1)),
            holding("d", Duration::days(-5), dec!(1), dec!(1)),
        ]);
        let buckets = split_tax_buckets(&enriched, now());
        assert_eq!(
            buckets.short_term.holding_count + buckets.long_term.holding_count,
            enriched.len()
        );
        assert_eq!(buckets.long_term.holding_count, 1);
    }
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::holdings::Holding;
use crate::portfolio::valuation::EnrichedHolding;

/// Computes the valuation figures of a single holding.
///
/// Pure and total: the input is borrowed, never mutated, and every decimal
/// input yields a result. A zero (or negative) cost basis reports a gain
/// percentage of exactly zero instead of dividing by it. Results outside the
/// `Decimal` range saturate at `Decimal::MIN`/`Decimal::MAX`.
pub fn enrich_holding(holding: &Holding) -> EnrichedHolding {
    let total_value = holding.market_value();
    let cost_basis = holding.cost_basis();
    let gain_loss = total_value.saturating_sub(cost_basis);
    let gain_loss_pct = if cost_basis > Decimal::ZERO {
        percent_of(gain_loss, cost_basis)
    } else {
        Decimal::ZERO
    };

    EnrichedHolding {
        holding: holding.clone(),
        total_value,
        gain_loss,
        gain_loss_pct,
    }
}

/// Enriches every holding, preserving length and order.
pub fn enrich_holdings(holdings: &[Holding]) -> Vec<EnrichedHolding> {
    holdings.iter().map(enrich_holding).collect()
}

/// Sum of `total_value`; zero for an empty slice.
pub fn total_portfolio_value(holdings: &[EnrichedHolding]) -> Decimal {
    saturating_sum(holdings.iter().map(|h| h.total_value))
}

/// Sum of `quantity × purchase_price`.
pub fn total_cost_basis(holdings: &[EnrichedHolding]) -> Decimal {
    saturating_sum(holdings.iter().map(|h| h.cost_basis()))
}

/// Sum of `gain_loss` (unrealized, gains and losses netted).
pub fn total_gain_loss(holdings: &[EnrichedHolding]) -> Decimal {
    saturating_sum(holdings.iter().map(|h| h.gain_loss))
}

/// Share of `value` in `total`, in percent. Zero when `total` is not positive.
pub fn share_of_total(value: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        percent_of(value, total)
    } else {
        Decimal::ZERO
    }
}

/// Sums decimals, clamping at the `Decimal` range instead of overflowing.
///
/// Positions that passed validation are bounded by `MAX_POSITION_VALUE`, so
/// the clamp only engages for snapshots that bypassed it.
pub(crate) fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `part / whole × 100` for a non-zero `whole`, saturating by the sign of the quotient.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(if part.is_sign_negative() != whole.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

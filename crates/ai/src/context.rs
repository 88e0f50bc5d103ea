//! Portfolio context and system prompt for the advisor.
//!
//! The context is a plain-text summary of the user's holdings that is embedded
//! in the system prompt, so the model can answer with specific numbers.

use portifi_core::constants::TOP_HOLDINGS_LIMIT;
use portifi_core::portfolio::allocation::calculate_asset_allocation;
use portifi_core::portfolio::summary::top_holdings_by_value;
use portifi_core::portfolio::valuation::{total_portfolio_value, EnrichedHolding};
use portifi_core::utils::format_utils::{format_currency, format_fixed};
use rust_decimal::Decimal;

/// Renders the `Portfolio Summary:` block for a holdings snapshot.
///
/// Allocation entries follow descending value; only categories holding value
/// are listed. Top holdings are the five largest positions.
pub fn build_portfolio_context(holdings: &[EnrichedHolding]) -> String {
    let total_value = total_portfolio_value(holdings);

    let allocation = calculate_asset_allocation(holdings)
        .iter()
        .map(|a| {
            let pct = if total_value > Decimal::ZERO {
                format_fixed(a.percentage, 1)
            } else {
                "0".to_string()
            };
            format!("{}: {} ({}%)", a.label, format_currency(a.value, false), pct)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let top_holdings = top_holdings_by_value(holdings, TOP_HOLDINGS_LIMIT)
        .iter()
        .map(|h| {
            let sign = if h.gain_loss >= Decimal::ZERO { "+" } else { "" };
            format!(
                "{} ({}) - {}, {}{}% gain/loss",
                h.holding.name,
                h.holding.symbol,
                format_currency(h.total_value, false),
                sign,
                format_fixed(h.gain_loss_pct, 2)
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Portfolio Summary:\n\
         - Total Value: {}\n\
         - Number of Holdings: {}\n\
         - Allocation: {}\n\
         - Top Holdings: {}",
        format_currency(total_value, false),
        holdings.len(),
        allocation,
        top_holdings
    )
}

/// Wraps the portfolio context in the advisor persona and answering rules.
pub fn build_system_prompt(assistant_name: &str, portfolio_context: &str) -> String {
    format!(
        "You are {}, an AI financial assistant with access to the user's portfolio data.\n\n\
         {}\n\n\
         Provide helpful, specific advice based on this data. Be concise and actionable. \
         Always include a brief disclaimer that this is for informational purposes only \
         and not financial advice.",
        assistant_name, portfolio_context
    )
}

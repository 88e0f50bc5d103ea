//! Display formatting for monetary amounts and percentages.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

const MILLION: Decimal = dec!(1000000);
const THOUSAND: Decimal = dec!(1000);

/// Formats a USD amount.
///
/// Full form is `$1,234.56` / `-$1,234.56`. In compact form, magnitudes of at
/// least a million render as `$1.23M` and of at least a thousand as `$12.3K`;
/// smaller values fall back to the full form.
pub fn format_currency(value: Decimal, compact: bool) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let magnitude = value.abs();

    if compact && magnitude >= MILLION {
        return format!("{}${}M", sign, format_fixed(magnitude / MILLION, 2));
    }
    if compact && magnitude >= THOUSAND {
        return format!("{}${}K", sign, format_fixed(magnitude / THOUSAND, 1));
    }

    let rounded = format_fixed(magnitude, DISPLAY_DECIMAL_PRECISION);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    if int_part == "0" && frac_part.bytes().all(|b| b == b'0') {
        return format!("$0.{}", frac_part);
    }
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Formats a percentage with an explicit `+` for non-negative values: `+12.34%`.
pub fn format_percent(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { "+" } else { "" };
    format!("{}{}%", sign, format_fixed(value, DISPLAY_DECIMAL_PRECISION))
}

/// Rounds half away from zero and pads to exactly `dp` decimals: `format_fixed(1.005, 2)` is `1.01`.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

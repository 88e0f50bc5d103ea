use chrono::{DateTime, Duration, Utc};

/// How long a position has been held at `now`.
///
/// Negative when `acquired_at` lies in the future.
pub fn holding_duration(acquired_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(acquired_at)
}

/// Whether a position acquired at `acquired_at` has been held for at least `days` at `now`.
///
/// The boundary counts as held: exactly `days` days returns `true`. A period
/// too long to represent is never reached.
pub fn is_held_at_least(acquired_at: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    Duration::try_days(days).is_some_and(|period| holding_duration(acquired_at, now) >= period)
}

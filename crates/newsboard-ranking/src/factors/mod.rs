pub mod activity;
pub mod engagement;
pub mod temporal;
pub mod votes;

use chrono::{DateTime, Utc};
use newsboard_core::constants::MILLIS_PER_HOUR;

/// Fractional hours from `from` to `to`. Negative when `from` is in the future.
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

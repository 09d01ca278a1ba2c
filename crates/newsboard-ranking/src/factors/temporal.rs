use chrono::{DateTime, Utc};
use newsboard_core::{FreshnessProfile, ScorableItem};

use super::hours_between;

/// Time freshness: `base × e^(-timeDecayRate × hoursSinceSubmission)`.
///
/// Range: (0.0, base] for items submitted before `now`. Items dated in the
/// future evaluate above `base` instead of failing.
pub fn calculate(item: &ScorableItem, profile: &FreshnessProfile, now: DateTime<Utc>) -> f64 {
    let hours = hours_between(item.created_at, now);
    profile.base * (-profile.time_decay_rate * hours).exp()
}

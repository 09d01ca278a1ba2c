use chrono::{DateTime, Utc};

use crate::models::ScorableItem;

/// Freshness score calculation.
pub trait IFreshnessScorer: Send + Sync {
    /// Score an item as of `now`. Always returns a value ≥ 0.0.
    fn score(&self, item: &ScorableItem, now: DateTime<Utc>) -> f64;

    /// Score an item against the wall clock.
    /// Not deterministic; tests should call [`IFreshnessScorer::score`].
    fn score_now(&self, item: &ScorableItem) -> f64 {
        self.score(item, Utc::now())
    }
}

use newsboard_core::{FreshnessProfile, ScorableItem};

/// Vote freshness: `points × voteWeight`. Negative for net-downvoted items.
pub fn calculate(item: &ScorableItem, profile: &FreshnessProfile) -> f64 {
    item.points as f64 * profile.vote_weight
}

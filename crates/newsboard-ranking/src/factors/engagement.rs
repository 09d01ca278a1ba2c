use newsboard_core::{FreshnessProfile, ScorableItem};

/// Engagement freshness: `engagementCount × engagementWeight`.
pub fn calculate(item: &ScorableItem, profile: &FreshnessProfile) -> f64 {
    item.engagement_count as f64 * profile.engagement_weight
}

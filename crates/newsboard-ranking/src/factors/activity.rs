use chrono::{DateTime, Utc};
use newsboard_core::{FreshnessProfile, ScorableItem};

use super::hours_between;

/// Recent activity boost: `recentVoteBoost × e^(-0.05 × hoursSinceLastVote)`.
///
/// Without vote history the last vote time is the submission time, so a new
/// item starts at the full boost.
pub fn calculate(item: &ScorableItem, profile: &FreshnessProfile, now: DateTime<Utc>) -> f64 {
    let hours = hours_since_last_vote(item, now);
    profile.recent_vote_boost * (-FreshnessProfile::ACTIVITY_DECAY_RATE * hours).exp()
}

pub fn hours_since_last_vote(item: &ScorableItem, now: DateTime<Utc>) -> f64 {
    hours_between(item.last_vote_time(), now)
}

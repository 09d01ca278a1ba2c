use chrono::{DateTime, Utc};
use newsboard_core::{FreshnessProfile, ScorableItem};
use serde::Serialize;

use crate::factors::{self, hours_between};

/// Additive freshness formula.
///
/// ```text
/// score = max(0, timeFreshness
///              + voteFreshness
///              + recentActivityBoost
///              + engagementFreshness)
/// ```
///
/// The profile is chosen by the item's kind. The clamp applies once, to the
/// sum, so negative points can pull an item down to zero but not below.
pub fn compute(item: &ScorableItem, now: DateTime<Utc>) -> f64 {
    compute_with_profile(item, item.kind.profile(), now)
}

/// [`compute`] with an explicit profile.
pub fn compute_with_profile(
    item: &ScorableItem,
    profile: &FreshnessProfile,
    now: DateTime<Utc>,
) -> f64 {
    compute_breakdown_with_profile(item, profile, now).score
}

/// Each factor of one score, for debugging/observability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessBreakdown {
    pub profile: &'static str,
    pub hours_since_submission: f64,
    pub hours_since_last_vote: f64,
    pub time_freshness: f64,
    pub vote_freshness: f64,
    pub recent_activity_boost: f64,
    pub engagement_freshness: f64,
    /// Sum of the factors before clamping. May be negative.
    pub raw_score: f64,
    pub score: f64,
}

/// Compute a score with a full breakdown of each factor.
pub fn compute_breakdown(item: &ScorableItem, now: DateTime<Utc>) -> FreshnessBreakdown {
    compute_breakdown_with_profile(item, item.kind.profile(), now)
}

pub fn compute_breakdown_with_profile(
    item: &ScorableItem,
    profile: &FreshnessProfile,
    now: DateTime<Utc>,
) -> FreshnessBreakdown {
    let time = factors::temporal::calculate(item, profile, now);
    let vote = factors::votes::calculate(item, profile);
    let activity = factors::activity::calculate(item, profile, now);
    let engagement = factors::engagement::calculate(item, profile);

    let raw = time + vote + activity + engagement;

    FreshnessBreakdown {
        profile: profile.name,
        hours_since_submission: hours_between(item.created_at, now),
        hours_since_last_vote: factors::activity::hours_since_last_vote(item, now),
        time_freshness: time,
        vote_freshness: vote,
        recent_activity_boost: activity,
        engagement_freshness: engagement,
        raw_score: raw,
        score: clamp_non_negative(raw),
    }
}

/// Negative sums (and NaN) become 0.0.
fn clamp_non_negative(raw: f64) -> f64 {
    if raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Tuning constants for one content class.
///
/// ```text
/// timeFreshness       = base × e^(-time_decay_rate × hoursSinceSubmission)
/// voteFreshness       = points × vote_weight
/// recentActivityBoost = recent_vote_boost × e^(-0.05 × hoursSinceLastVote)
/// engagementFreshness = engagementCount × engagement_weight
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessProfile {
    pub name: &'static str,
    /// Freshness of a brand-new item before any decay.
    pub base: f64,
    /// Per-hour exponential decay of the base freshness.
    pub time_decay_rate: f64,
    /// Contribution of each net point.
    pub vote_weight: f64,
    /// Peak boost for voting activity happening right now.
    pub recent_vote_boost: f64,
    /// Contribution of each comment (or reply).
    pub engagement_weight: f64,
}

impl FreshnessProfile {
    /// Per-hour decay of the recent-activity boost. Shared by every profile.
    pub const ACTIVITY_DECAY_RATE: f64 = 0.05;

    /// Stories, Show posts and Ask posts.
    pub const STORY: FreshnessProfile = FreshnessProfile {
        name: "story",
        base: 100.0,
        time_decay_rate: 0.10,
        vote_weight: 0.5,
        recent_vote_boost: 1.5,
        engagement_weight: 0.3,
    };

    /// Comments: decay faster, weigh votes and replies more.
    pub const COMMENT: FreshnessProfile = FreshnessProfile {
        name: "comment",
        base: 50.0,
        time_decay_rate: 0.15,
        vote_weight: 0.7,
        recent_vote_boost: 2.0,
        engagement_weight: 0.4,
    };
}

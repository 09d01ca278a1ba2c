//! Structured log events for ranking operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed listing request.
pub fn listing_ranked(
    sort: &str,
    total_count: usize,
    page: usize,
    page_size: usize,
    returned: usize,
) {
    tracing::info!(
        event = "listing_ranked",
        sort = %sort,
        total_count = total_count,
        page = page,
        page_size = page_size,
        returned = returned,
        "listing ranked"
    );
}

/// Log a page request past the end of the listing.
pub fn page_beyond_range(page: usize, total_pages: usize) {
    tracing::debug!(
        event = "page_beyond_range",
        page = page,
        total_pages = total_pages,
        "requested page is past the end of the listing"
    );
}

/// Log a single item's score with its factor breakdown.
#[allow(clippy::too_many_arguments)]
pub fn item_scored(
    item_id: &str,
    kind: &str,
    engagement_label: &str,
    engagement_count: u64,
    time_freshness: f64,
    vote_freshness: f64,
    recent_activity_boost: f64,
    engagement_freshness: f64,
    score: f64,
) {
    tracing::trace!(
        event = "item_scored",
        item_id = %item_id,
        kind = %kind,
        engagement_label = %engagement_label,
        engagement_count = engagement_count,
        time_freshness = time_freshness,
        vote_freshness = vote_freshness,
        recent_activity_boost = recent_activity_boost,
        engagement_freshness = engagement_freshness,
        score = score,
        "item scored"
    );
}

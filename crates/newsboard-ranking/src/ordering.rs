//! Listing orders over scored items. Both sorts are stable and return new
//! vectors; the input slice is never reordered.

use chrono::{DateTime, Utc};
use newsboard_core::{ScorableItem, ScoredItem, SortOrder};
use newsboard_observability::tracing_setup::events;

use crate::formula;

/// Score every item in input order, tracing each factor breakdown.
pub fn score_all(items: &[ScorableItem], now: DateTime<Utc>) -> Vec<ScoredItem> {
    items
        .iter()
        .map(|item| {
            let b = formula::compute_breakdown(item, now);
            events::item_scored(
                &item.id,
                item.kind.as_str(),
                item.kind.engagement_label(),
                item.engagement_count,
                b.time_freshness,
                b.vote_freshness,
                b.recent_activity_boost,
                b.engagement_freshness,
                b.score,
            );
            ScoredItem {
                item: item.clone(),
                freshness_score: b.score,
            }
        })
        .collect()
}

/// Score items and arrange them in `sort` order.
pub fn order(items: &[ScorableItem], sort: SortOrder, now: DateTime<Utc>) -> Vec<ScoredItem> {
    let mut scored = score_all(items, now);
    match sort {
        SortOrder::Freshness => order_by_score(&mut scored),
        SortOrder::Newest => order_by_newest(&mut scored),
    }
    scored
}

/// Highest freshness first. Equal scores keep their input order.
pub fn sort_by_freshness(items: &[ScorableItem], now: DateTime<Utc>) -> Vec<ScoredItem> {
    order(items, SortOrder::Freshness, now)
}

/// Newest submission first. Equal timestamps keep their input order.
pub fn sort_chronological(items: &[ScorableItem], now: DateTime<Utc>) -> Vec<ScoredItem> {
    order(items, SortOrder::Newest, now)
}

/// Stable descending sort on `freshness_score`.
pub fn order_by_score(scored: &mut [ScoredItem]) {
    scored.sort_by(|a, b| b.freshness_score.total_cmp(&a.freshness_score));
}

/// Stable descending sort on `created_at`.
pub fn order_by_newest(scored: &mut [ScoredItem]) {
    scored.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
}

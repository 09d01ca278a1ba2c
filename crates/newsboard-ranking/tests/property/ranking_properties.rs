use chrono::{DateTime, Duration, Utc};
use newsboard_core::traits::IFreshnessScorer;
use newsboard_core::{ContentKind, ScorableItem, VoteRecord};
use newsboard_ranking::pagination::{paginate, total_pages};
use newsboard_ranking::{sort_by_freshness, FreshnessEngine};
use proptest::prelude::*;
use test_fixtures::fixed_now;

fn arb_kind() -> impl Strategy<Value = ContentKind> {
    prop::sample::select(ContentKind::ALL.to_vec())
}

fn make_item(
    id: usize,
    kind: ContentKind,
    now: DateTime<Utc>,
    age_minutes: i64,
    points: i64,
    engagement: u64,
    vote_minutes_ago: &[i64],
) -> ScorableItem {
    let votes = vote_minutes_ago
        .iter()
        .map(|m| VoteRecord::new(now - Duration::minutes(*m)))
        .collect();
    ScorableItem::new(format!("item-{id}"), kind, now - Duration::minutes(age_minutes))
        .with_points(points)
        .with_engagement(engagement)
        .with_votes(votes)
}

fn arb_items(max: usize) -> impl Strategy<Value = Vec<ScorableItem>> {
    prop::collection::vec(
        (
            arb_kind(),
            0i64..10_000,
            -500i64..500,
            0u64..200,
            prop::collection::vec(0i64..10_000, 0..4),
        ),
        0..max,
    )
    .prop_map(|raw| {
        let now = fixed_now();
        raw.into_iter()
            .enumerate()
            .map(|(i, (kind, age, points, engagement, votes))| {
                make_item(i, kind, now, age, points, engagement, &votes)
            })
            .collect()
    })
}

// ── Newer beats older ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn newer_scores_higher(
        kind in arb_kind(),
        age in 0i64..5_000,
        gap in 1i64..5_000,
        points in -50i64..500,
        engagement in 0u64..100,
    ) {
        let engine = FreshnessEngine::new();
        let now = fixed_now();
        let newer = make_item(0, kind, now, age, points, engagement, &[]);
        let older = make_item(1, kind, now, age + gap, points, engagement, &[]);

        let a = engine.score(&newer, now);
        let b = engine.score(&older, now);
        // Both clamp to zero when downvotes outweigh everything.
        prop_assert!(a > b || (a == 0.0 && b == 0.0), "{} <= {}", a, b);
    }
}

// ── More points beats fewer ──────────────────────────────────────────────

proptest! {
    #[test]
    fn more_points_score_higher(
        kind in arb_kind(),
        age in 0i64..5_000,
        points in -100i64..500,
        extra in 1i64..500,
        engagement in 0u64..100,
    ) {
        let engine = FreshnessEngine::new();
        let now = fixed_now();
        let low = make_item(0, kind, now, age, points, engagement, &[]);
        let high = make_item(1, kind, now, age, points + extra, engagement, &[]);

        let a = engine.score(&high, now);
        let b = engine.score(&low, now);
        prop_assert!(a > b || (a == 0.0 && b == 0.0), "{} <= {}", a, b);
    }
}

// ── Non-negative ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_never_negative(items in arb_items(16)) {
        let engine = FreshnessEngine::new();
        let now = fixed_now();
        for item in &items {
            let score = engine.score(item, now);
            prop_assert!(score >= 0.0, "negative score {} for {:?}", score, item);
        }
    }
}

// ── Sort is consistent with score and idempotent ─────────────────────────

proptest! {
    #[test]
    fn sorted_scores_are_non_increasing(items in arb_items(40)) {
        let now = fixed_now();
        let sorted = sort_by_freshness(&items, now);
        prop_assert_eq!(sorted.len(), items.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].freshness_score >= pair[1].freshness_score);
        }
    }

    #[test]
    fn resorting_is_idempotent(items in arb_items(40)) {
        let now = fixed_now();
        let once = sort_by_freshness(&items, now);
        let again: Vec<ScorableItem> = once.iter().map(|s| s.item.clone()).collect();
        let twice = sort_by_freshness(&again, now);
        let once_ids: Vec<&str> = once.iter().map(|s| s.id()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|s| s.id()).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }
}

// ── Pages partition the collection ───────────────────────────────────────

proptest! {
    #[test]
    fn pages_partition_collection(len in 0usize..300, size in 1i64..120) {
        let ordered: Vec<usize> = (0..len).collect();
        let effective = size.min(100) as usize;
        let pages = total_pages(len, effective);

        let mut rebuilt = Vec::with_capacity(len);
        for page in 1..=pages {
            let p = paginate(&ordered, page as i64, size);
            prop_assert!(p.items.len() <= effective);
            prop_assert_eq!(p.total_count, len);
            rebuilt.extend(p.items);
        }
        prop_assert_eq!(rebuilt, ordered.clone());

        let past = paginate(&ordered, pages as i64 + 1, size);
        prop_assert!(past.items.is_empty());
    }
}

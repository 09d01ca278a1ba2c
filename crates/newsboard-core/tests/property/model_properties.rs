use chrono::{DateTime, Duration, TimeZone, Utc};
use newsboard_core::{ContentKind, ScorableItem, SortOrder, VoteRecord};
use proptest::prelude::*;

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn votes_at(minutes: &[i64]) -> Vec<VoteRecord> {
    minutes
        .iter()
        .map(|m| VoteRecord::new(created() + Duration::minutes(*m)))
        .collect()
}

/// Vote offsets (minutes after submission) paired with a shuffled copy.
fn arb_vote_minutes() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::vec(0i64..100_000, 1..40)
        .prop_flat_map(|minutes| (Just(minutes.clone()), Just(minutes).prop_shuffle()))
}

proptest! {
    #[test]
    fn last_vote_time_is_latest_vote((minutes, shuffled) in arb_vote_minutes()) {
        let item = ScorableItem::new("s", ContentKind::Story, created())
            .with_votes(votes_at(&minutes));
        let latest = created() + Duration::minutes(*minutes.iter().max().unwrap());
        prop_assert_eq!(item.last_vote_time(), latest);

        let reordered = item.clone().with_votes(votes_at(&shuffled));
        prop_assert_eq!(reordered.last_vote_time(), latest);
    }

    #[test]
    fn last_vote_time_never_precedes_votes(minutes in prop::collection::vec(0i64..100_000, 0..40)) {
        let item = ScorableItem::new("s", ContentKind::Comment, created())
            .with_votes(votes_at(&minutes));
        let last = item.last_vote_time();
        prop_assert!(item.votes.iter().all(|v| v.created_at <= last));
        if minutes.is_empty() {
            prop_assert_eq!(last, item.created_at);
        }
    }

    #[test]
    fn sort_order_parse_never_panics(raw in ".{0,16}") {
        if let Some(sort) = SortOrder::parse(&raw) {
            prop_assert_eq!(SortOrder::parse(sort.as_str()), Some(sort));
        }
    }
}

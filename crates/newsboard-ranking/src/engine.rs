use chrono::{DateTime, Utc};
use newsboard_core::config::RankingConfig;
use newsboard_core::traits::IFreshnessScorer;
use newsboard_core::{ScorableItem, ScoredItem, SortOrder};
use newsboard_observability::tracing_setup::events;

use crate::formula::{self, FreshnessBreakdown};
use crate::listing::{ListingPage, ListingQuery};
use crate::ordering;
use crate::pagination;

/// Ranking engine: scores items, orders them for a listing, and slices the
/// requested page.
///
/// Holds only immutable configuration, so one engine can serve concurrent
/// listing requests.
#[derive(Debug, Clone)]
pub struct FreshnessEngine {
    config: RankingConfig,
}

impl FreshnessEngine {
    /// Create an engine with the default listing configuration.
    pub fn new() -> Self {
        Self::with_config(RankingConfig::default())
    }

    pub fn with_config(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score with a full breakdown of each factor.
    pub fn breakdown(&self, item: &ScorableItem, now: DateTime<Utc>) -> FreshnessBreakdown {
        formula::compute_breakdown(item, now)
    }

    /// Score every item, keeping input order.
    pub fn score_all(&self, items: &[ScorableItem], now: DateTime<Utc>) -> Vec<ScoredItem> {
        ordering::score_all(items, now)
    }

    /// Highest freshness first, ties in input order.
    pub fn sort_by_freshness(
        &self,
        items: &[ScorableItem],
        now: DateTime<Utc>,
    ) -> Vec<ScoredItem> {
        self.order(items, SortOrder::Freshness, now)
    }

    /// Newest first, ties in input order.
    pub fn sort_chronological(
        &self,
        items: &[ScorableItem],
        now: DateTime<Utc>,
    ) -> Vec<ScoredItem> {
        self.order(items, SortOrder::Newest, now)
    }

    /// Score and order items for a listing.
    pub fn order(
        &self,
        items: &[ScorableItem],
        sort: SortOrder,
        now: DateTime<Utc>,
    ) -> Vec<ScoredItem> {
        ordering::order(items, sort, now)
    }

    /// Parse listing parameters against this engine's configuration.
    pub fn parse_query<I, K, V>(&self, pairs: I) -> ListingQuery
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        ListingQuery::from_pairs(pairs, &self.config)
    }

    /// Full listing pipeline: score → order → paginate.
    pub fn rank(
        &self,
        items: &[ScorableItem],
        query: &ListingQuery,
        now: DateTime<Utc>,
    ) -> ListingPage {
        let request = query.request.capped(self.config.max_page_size);
        let ordered = self.order(items, query.sort, now);
        let page = pagination::into_page(ordered, request);

        if page.is_past_end() {
            events::page_beyond_range(page.page, page.total_pages());
        }

        let listing = ListingPage::from_page(page, query.sort);
        events::listing_ranked(
            query.sort.as_str(),
            listing.total_count,
            listing.page,
            listing.page_size,
            listing.items.len(),
        );
        listing
    }
}

impl Default for FreshnessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IFreshnessScorer for FreshnessEngine {
    fn score(&self, item: &ScorableItem, now: DateTime<Utc>) -> f64 {
        formula::compute(item, now)
    }
}

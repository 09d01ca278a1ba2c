use newsboard_core::config::RankingConfig;
use newsboard_core::{ScoredItem, SortOrder};
use serde::Serialize;

use crate::page_window::{self, PageMarker};
use crate::pagination::{Page, PageRequest};

/// Parsed listing parameters: `sort`, `page` or `offset`, `limit` / `pageSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub sort: SortOrder,
    pub request: PageRequest,
}

impl ListingQuery {
    pub fn new(sort: SortOrder, page: i64, page_size: i64, config: &RankingConfig) -> Self {
        Self {
            sort,
            request: PageRequest::bounded(page, page_size, config.max_page_size),
        }
    }

    /// First page, default size, default order.
    pub fn defaults(config: &RankingConfig) -> Self {
        Self::new(
            config.default_sort,
            1,
            config.default_page_size as i64,
            config,
        )
    }

    /// Build a query from request parameters.
    ///
    /// Unknown keys are ignored. Missing or unparseable values fall back to
    /// the configured defaults; out-of-range numbers are clamped.
    ///
    /// `offset` selects the page holding that item index, rounding down to a
    /// page boundary. An explicit `page` takes precedence over it.
    pub fn from_pairs<I, K, V>(pairs: I, config: &RankingConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sort = config.default_sort;
        let mut page: Option<i64> = None;
        let mut offset: Option<i64> = None;
        let mut page_size = config.default_page_size as i64;

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "sort" => sort = SortOrder::parse(value).unwrap_or(config.default_sort),
                "page" => page = Some(value.parse().unwrap_or(1)),
                "offset" => offset = value.parse().ok(),
                "limit" | "pageSize" | "page_size" => {
                    page_size = value
                        .parse()
                        .unwrap_or(config.default_page_size as i64)
                }
                _ => {}
            }
        }

        let page = page.unwrap_or_else(|| {
            let size = page_size.clamp(1, config.max_page_size.max(1) as i64);
            offset.map_or(1, |offset| (offset.max(0) / size).saturating_add(1))
        });

        Self::new(sort, page, page_size, config)
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::defaults(&RankingConfig::default())
    }
}

/// A ranked page as returned to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub items: Vec<ScoredItem>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub sort: SortOrder,
}

impl ListingPage {
    pub fn from_page(page: Page<ScoredItem>, sort: SortOrder) -> Self {
        let total_pages = page.total_pages();
        Self {
            items: page.items,
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
            total_pages,
            sort,
        }
    }

    /// Page links for this listing.
    pub fn page_numbers(&self) -> Vec<PageMarker> {
        page_window::page_numbers(self.page, self.total_pages)
    }
}

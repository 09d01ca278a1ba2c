use newsboard_core::config::defaults::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use serde::Serialize;

/// A clamped page request. `page` and `page_size` are always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Clamp `page` to ≥ 1 and `page_size` to `1..=100`.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self::bounded(page, page_size, DEFAULT_MAX_PAGE_SIZE)
    }

    /// Clamp `page` to ≥ 1 and `page_size` to `1..=max_page_size`.
    pub fn bounded(page: i64, page_size: i64, max_page_size: usize) -> Self {
        let max = max_page_size.max(1);
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let page_size = usize::try_from(page_size.max(1))
            .unwrap_or(max)
            .min(max);
        Self { page, page_size }
    }

    /// Re-apply a (possibly tighter) page size bound.
    pub fn capped(self, max_page_size: usize) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One window of an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the full collection before slicing.
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// True when the requested page starts past the end of a non-empty collection.
    pub fn is_past_end(&self) -> bool {
        self.total_count > 0 && self.page > self.total_pages()
    }
}

/// `ceil(total_count / page_size)`; zero for an empty collection.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Slice `[(page-1)*page_size, page*page_size)` out of `ordered`.
///
/// Out-of-range values are clamped; a page past the end is empty.
pub fn paginate<T: Clone>(ordered: &[T], page: i64, page_size: i64) -> Page<T> {
    paginate_request(ordered, PageRequest::new(page, page_size))
}

pub fn paginate_request<T: Clone>(ordered: &[T], request: PageRequest) -> Page<T> {
    Page {
        items: ordered
            .iter()
            .skip(request.offset())
            .take(request.page_size)
            .cloned()
            .collect(),
        total_count: ordered.len(),
        page: request.page,
        page_size: request.page_size,
    }
}

/// [`paginate_request`] consuming the collection instead of cloning items.
pub fn into_page<T>(ordered: Vec<T>, request: PageRequest) -> Page<T> {
    let total_count = ordered.len();
    Page {
        items: ordered
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect(),
        total_count,
        page: request.page,
        page_size: request.page_size,
    }
}

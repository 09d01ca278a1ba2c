use newsboard_core::constants::MAX_VISIBLE_PAGES;
use serde::{Serialize, Serializer};

/// One slot in a listing's page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    LeftEllipsis,
    RightEllipsis,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u64(*n as u64),
            PageMarker::LeftEllipsis => serializer.serialize_str("left-ellipsis"),
            PageMarker::RightEllipsis => serializer.serialize_str("right-ellipsis"),
        }
    }
}

/// Page links to render around `current_page`.
///
/// Up to five pages are listed in full. Beyond that the first and last page
/// are always shown with the current page and its direct neighbours between
/// them; an ellipsis marks each gap that is not adjacent to page 1 or
/// `total_pages`. `current_page` is clamped into `1..=total_pages`.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut pages = vec![PageMarker::Page(1)];

    if current > 3 {
        pages.push(PageMarker::LeftEllipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    pages.extend((start..=end).map(PageMarker::Page));

    if current + 2 < total_pages {
        pages.push(PageMarker::RightEllipsis);
    }

    pages.push(PageMarker::Page(total_pages));
    pages
}

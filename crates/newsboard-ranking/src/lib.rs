//! # newsboard-ranking
//!
//! Additive freshness scoring for listings.
//! Factors: time since submission, net points, recent voting activity, engagement.
//! One formula serves every content kind, parameterized by its `FreshnessProfile`.
//! Scored items are ordered (freshness or newest first), paginated, and rendered
//! into page windows for listing views.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod listing;
pub mod ordering;
pub mod page_window;
pub mod pagination;

pub use engine::FreshnessEngine;
pub use formula::FreshnessBreakdown;
pub use listing::{ListingPage, ListingQuery};
pub use ordering::{sort_by_freshness, sort_chronological};
pub use page_window::{page_numbers, PageMarker};
pub use pagination::{paginate, Page, PageRequest};

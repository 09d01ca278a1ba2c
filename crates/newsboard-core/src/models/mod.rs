mod content_kind;
mod item;
mod profile;
mod sort_order;

pub use content_kind::ContentKind;
pub use item::{ScorableItem, ScoredItem, VoteRecord};
pub use profile::FreshnessProfile;
pub use sort_order::SortOrder;

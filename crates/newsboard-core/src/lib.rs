//! # newsboard-core
//!
//! Foundation crate for Newsboard listing and ranking.
//! Defines the item types, freshness profiles, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NewsboardConfig;
pub use errors::{NewsboardError, NewsboardResult};
pub use models::{
    ContentKind, FreshnessProfile, ScorableItem, ScoredItem, SortOrder, VoteRecord,
};

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PAGE_SIZE_CEILING;
use crate::errors::ConfigError;
use crate::models::SortOrder;

/// Listing and pagination configuration.
///
/// Freshness profiles are fixed constants and are not configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Page size used when a request does not name one.
    pub default_page_size: usize,
    /// Upper bound for any requested page size.
    pub max_page_size: usize,
    /// Order used when a request does not ask for `sort=freshness`.
    pub default_sort: SortOrder,
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 || self.max_page_size > PAGE_SIZE_CEILING {
            return Err(ConfigError::InvalidValue {
                field: "ranking.max_page_size".to_string(),
                value: self.max_page_size.to_string(),
                reason: format!("must be between 1 and {PAGE_SIZE_CEILING}"),
            });
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "ranking.default_page_size".to_string(),
                value: self.default_page_size.to_string(),
                reason: format!("must be between 1 and max_page_size ({})", self.max_page_size),
            });
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_page_size: defaults::DEFAULT_PAGE_SIZE,
            max_page_size: defaults::DEFAULT_MAX_PAGE_SIZE,
            default_sort: SortOrder::Newest,
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing order requested through the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest submission first.
    #[default]
    Newest,
    /// Highest freshness score first.
    Freshness,
}

impl SortOrder {
    /// Parse a `sort` parameter value. Returns `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "freshness" | "fresh" => Some(SortOrder::Freshness),
            "newest" | "new" | "chronological" => Some(SortOrder::Newest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Freshness => "freshness",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FreshnessProfile;

/// The content collections a listing can rank.
///
/// Stories, Show posts and Ask posts share the story profile; comments
/// decay on their own, faster profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    Story,
    Show,
    Ask,
    Comment,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Story,
        ContentKind::Show,
        ContentKind::Ask,
        ContentKind::Comment,
    ];

    /// Scoring profile for this kind.
    pub fn profile(self) -> &'static FreshnessProfile {
        match self {
            ContentKind::Story | ContentKind::Show | ContentKind::Ask => &FreshnessProfile::STORY,
            ContentKind::Comment => &FreshnessProfile::COMMENT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Story => "story",
            ContentKind::Show => "show",
            ContentKind::Ask => "ask",
            ContentKind::Comment => "comment",
        }
    }

    /// What the engagement count measures for this kind.
    pub fn engagement_label(self) -> &'static str {
        match self {
            ContentKind::Comment => "replies",
            _ => "comments",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

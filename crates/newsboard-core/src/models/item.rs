use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentKind;
use crate::errors::NewsboardResult;

/// A single vote cast on an item. Only its timestamp matters for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub created_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }
}

/// An item handed over by the storage layer for ranking.
///
/// `points` and `engagement_count` are owned by the vote and comment
/// collaborators; ranking only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorableItem {
    pub id: String,
    #[serde(default)]
    pub kind: ContentKind,
    pub created_at: DateTime<Utc>,
    /// Net vote tally. May be negative.
    pub points: i64,
    /// Comment count for posts, reply count for comments.
    #[serde(default)]
    pub engagement_count: u64,
    /// Vote history, possibly untracked (empty).
    #[serde(default)]
    pub votes: Vec<VoteRecord>,
}

impl ScorableItem {
    /// Create an item with no points, engagement, or votes.
    pub fn new(id: impl Into<String>, kind: ContentKind, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            kind,
            created_at,
            points: 0,
            engagement_count: 0,
            votes: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn with_engagement(mut self, engagement_count: u64) -> Self {
        self.engagement_count = engagement_count;
        self
    }

    pub fn with_votes(mut self, votes: Vec<VoteRecord>) -> Self {
        self.votes = votes;
        self
    }

    /// Most recent vote time, falling back to submission time when no votes
    /// are recorded.
    pub fn last_vote_time(&self) -> DateTime<Utc> {
        self.votes
            .iter()
            .map(|v| v.created_at)
            .max()
            .unwrap_or(self.created_at)
    }

    /// Decode a JSON array of items from a storage snapshot.
    pub fn list_from_json(json: &str) -> NewsboardResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An item with its freshness score for one ranking request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: ScorableItem,
    /// Always ≥ 0.0.
    pub freshness_score: f64,
}

impl ScoredItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

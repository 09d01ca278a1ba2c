//! Test fixture loader for Newsboard listing snapshots, plus item builders
//! shared by tests and benchmarks across crates.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use newsboard_core::{ContentKind, ScorableItem, VoteRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A storage snapshot of one listing with its expected orderings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub description: String,
    pub now: DateTime<Utc>,
    pub items: Vec<ScorableItem>,
    /// Item ids, highest freshness first.
    pub expected_freshness_order: Vec<String>,
    /// Item ids, newest first.
    pub expected_newest_order: Vec<String>,
}

/// Load a snapshot from `listings/`.
pub fn load_listing(name: &str) -> ListingSnapshot {
    load_fixture(&format!("listings/{name}.json"))
}

// ── Builders ─────────────────────────────────────────────────────────────

/// Fixed reference time so scores are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// A fresh random item id.
pub fn random_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// An item of `kind` submitted `age` before `now`.
pub fn make_item(
    kind: ContentKind,
    now: DateTime<Utc>,
    age: Duration,
    points: i64,
    engagement: u64,
) -> ScorableItem {
    ScorableItem::new(random_id(), kind, now - age)
        .with_points(points)
        .with_engagement(engagement)
}

pub fn story(now: DateTime<Utc>, age: Duration, points: i64, comments: u64) -> ScorableItem {
    make_item(ContentKind::Story, now, age, points, comments)
}

pub fn comment(now: DateTime<Utc>, age: Duration, points: i64, replies: u64) -> ScorableItem {
    make_item(ContentKind::Comment, now, age, points, replies)
}

/// Votes cast `ago` before `now`, one per entry.
pub fn votes_ago(now: DateTime<Utc>, ago: &[Duration]) -> Vec<VoteRecord> {
    ago.iter().map(|d| VoteRecord::new(now - *d)).collect()
}

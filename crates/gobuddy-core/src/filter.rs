//! Pure post filtering shared by the feed and the map.
//!
//! Filtering never mutates and never fails; the same collection with the
//! same filter always yields the same subset, in the same order.

use serde::{Deserialize, Serialize};

use crate::domain::{Post, sport};

/// Which screen a filtered subset is for. The map additionally scopes to
/// live posts that actually have a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Feed,
    Map,
}

/// Closed set of category chips.
///
/// Parsing is total: anything that is not `free`, `paid`, or a catalog
/// sport degrades to `All`, so a stale or garbled chip can narrow
/// nothing by accident.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Free,
    Paid,
    Sport(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        if raw.eq_ignore_ascii_case("free") {
            return Self::Free;
        }
        if raw.eq_ignore_ascii_case("paid") {
            return Self::Paid;
        }
        match sport::canonical(raw) {
            Some(name) => Self::Sport(name.to_string()),
            None => Self::All,
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Free => !post.is_paid,
            Self::Paid => post.is_paid,
            Self::Sport(name) => post.sport.eq_ignore_ascii_case(name),
        }
    }
}

/// One filtering pass: free-text query, category chip, surface scope.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub query: String,
    pub category: CategoryFilter,
    pub surface: Surface,
}

impl PostFilter {
    pub fn feed(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
            surface: Surface::Feed,
        }
    }

    pub fn map(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
            surface: Surface::Map,
        }
    }

    /// Apply to a collection, preserving input order.
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        posts.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if self.surface == Surface::Map && !post.is_mappable() {
            return false;
        }
        matches_query(post, &self.query) && self.category.matches(post)
    }
}

/// Case-insensitive substring match over content, sport, and venue name.
/// An empty query matches everything.
fn matches_query(post: &Post, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    post.content.to_lowercase().contains(&q)
        || post.sport.to_lowercase().contains(&q)
        || post.location_name.to_lowercase().contains(&q)
}

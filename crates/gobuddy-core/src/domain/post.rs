use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::User;

/// How a post's venue was chosen: the author's live position, or a
/// hand-typed venue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Live,
    Manual,
}

/// Self-assessed skill bracket, as the profile and composer forms label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Pro,
    #[serde(rename = "All Levels")]
    AllLevels,
}

impl SkillLevel {
    /// Parse a form label. Unknown labels are treated as unspecified
    /// rather than rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw {
            _ if raw.eq_ignore_ascii_case("beginner") => Some(Self::Beginner),
            _ if raw.eq_ignore_ascii_case("intermediate") => Some(Self::Intermediate),
            _ if raw.eq_ignore_ascii_case("advanced") => Some(Self::Advanced),
            _ if raw.eq_ignore_ascii_case("pro") => Some(Self::Pro),
            _ if raw.eq_ignore_ascii_case("all levels") => Some(Self::AllLevels),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Pro => "Pro",
            Self::AllLevels => "All Levels",
        }
    }
}

/// Geographic point carried by live posts and the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Post entity - an activity-partner request, the record everything else
/// revolves around.
///
/// The field set is the superset of both client variants, so a collection
/// persisted by either one deserializes here. Serde names match the JSON
/// the clients already store (`locationType`, `splitBill`, `isPaid`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user: User,
    pub content: String,
    pub sport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    pub date: DateTime<Utc>,
    pub location_type: LocationType,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub split_bill: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    pub likes: u32,
    pub comments: u32,
    /// Human-readable age label shown under the author name
    /// ("Just now", "1 hour ago").
    pub created_at: String,
}

impl Post {
    /// Whether this post was placed from the author's live position.
    pub fn is_live(&self) -> bool {
        self.location_type == LocationType::Live
    }

    /// Whether the post can be pinned on the map: live, with a position.
    pub fn is_mappable(&self) -> bool {
        self.is_live() && self.coordinates.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn serializes_with_client_field_names() {
        let post = seed::demo_posts().remove(0);
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("locationType").is_some());
        assert!(json.get("locationName").is_some());
        assert!(json.get("splitBill").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("location_type").is_none());
    }

    #[test]
    fn deserializes_blob_without_optional_fields() {
        // A minimal record the way the web variant stores one: no skill
        // level, no split-bill flag.
        let blob = r#"{
            "id": "1",
            "user": {"id": "u1", "name": "Sam", "avatar": "https://example.com/a.png"},
            "content": "Morning rally anyone?",
            "sport": "Tennis",
            "date": "2024-05-01T06:00:00Z",
            "locationType": "manual",
            "locationName": "Central Park Courts",
            "isPaid": true,
            "price": 500,
            "likes": 3,
            "comments": 1,
            "createdAt": "1 hour ago"
        }"#;
        let post: Post = serde_json::from_str(blob).unwrap();
        assert_eq!(post.sport, "Tennis");
        assert!(post.skill_level.is_none());
        assert!(!post.split_bill);
        assert!(post.is_paid);
        assert_eq!(post.price, Some(500));
        assert!(!post.is_mappable());
    }

    #[test]
    fn skill_level_labels_round_trip() {
        for level in [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
            SkillLevel::Pro,
            SkillLevel::AllLevels,
        ] {
            assert_eq!(SkillLevel::parse(level.label()), Some(level));
        }
        assert_eq!(SkillLevel::parse("grandmaster"), None);
    }
}

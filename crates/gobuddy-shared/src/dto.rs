//! Data Transfer Objects - request types for the API.
//!
//! Field names are camelCase where the client payloads are camelCase,
//! so existing clients keep working unchanged.

use serde::{Deserialize, Serialize};

/// Request to issue a sign-in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequest {
    pub phone: String,
}

/// Request to redeem a sign-in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub code: String,
}

/// Echo of an issued challenge. This is a demo flow: the code goes back
/// to the client, which shows it in an on-screen toast instead of
/// waiting for an SMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallengeResponse {
    pub phone: String,
    pub code: String,
    pub expires_in_secs: i64,
}

/// Current session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// A geographic point as clients send it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Unified post-creation payload; both client variants post this shape.
/// Everything beyond `content` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default)]
    pub is_live_location: bool,
    #[serde(default)]
    pub manual_location: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub split_bill: bool,
    #[serde(default)]
    pub is_paid: bool,
    /// Raw form value; the server parses it and coerces garbage to 0.
    #[serde(default)]
    pub price: Option<String>,
    /// ISO-8601 date-time from the picker; absent means "now".
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub coordinates: Option<CoordinatesDto>,
}

/// Query parameters shared by the feed and map endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    /// Free-text search over content, sport, and venue name.
    #[serde(default)]
    pub q: Option<String>,
    /// Category chip: `all`, `free`, `paid`, or a sport name.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Request to rewrite a draft post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub text: String,
}

/// Rewritten draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_accepts_the_minimal_client_payload() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"content": "anyone up for tennis?"}"#).unwrap();
        assert_eq!(req.content, "anyone up for tennis?");
        assert!(!req.is_live_location);
        assert!(req.price.is_none());
    }

    #[test]
    fn create_post_accepts_the_full_camel_case_payload() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{
                "content": "court booked for 7",
                "isLiveLocation": true,
                "manualLocation": null,
                "sport": "Badminton",
                "skillLevel": "Advanced",
                "splitBill": true,
                "isPaid": true,
                "price": "500",
                "date": "2024-06-10T19:00:00Z",
                "coordinates": {"latitude": 28.61, "longitude": 77.21}
            }"#,
        )
        .unwrap();
        assert!(req.is_live_location);
        assert!(req.split_bill);
        assert_eq!(req.price.as_deref(), Some("500"));
        assert!(req.coordinates.is_some());
    }
}

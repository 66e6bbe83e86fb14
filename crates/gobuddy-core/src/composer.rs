//! Post composer - turns a raw creation payload into a well-formed post
//! and hands it to the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::domain::{Coordinates, LocationType, Post, SkillLevel, User, sport};
use crate::error::DomainError;
use crate::filter::Surface;
use crate::geo;
use crate::ports::Locator;
use crate::store::PostStore;

/// Venue label for live posts.
const LIVE_LOCATION_LABEL: &str = "Current Location";
/// Venue label when a manual post leaves the field blank.
const UNKNOWN_LOCATION_LABEL: &str = "Unknown location";
const JUST_NOW: &str = "Just now";

/// Unified creation payload. Both client variants funnel into this one
/// shape; everything beyond `content` is optional and defaulted.
#[derive(Debug, Clone, Default)]
pub struct NewPostRequest {
    pub content: String,
    pub live_location: bool,
    pub manual_location: Option<String>,
    pub sport: Option<String>,
    pub skill_level: Option<SkillLevel>,
    pub split_bill: bool,
    pub paid: bool,
    /// Raw form value; parsed here so a garbled price becomes 0, never an
    /// error.
    pub price: Option<String>,
    /// ISO-8601 string from the date picker; empty or unparseable means
    /// "now".
    pub date: Option<String>,
    /// Explicit position, if the client already has one. Wins over the
    /// derived placement.
    pub coordinates: Option<Coordinates>,
}

/// A successful composition: the new post, the updated collection, and
/// the surface the UI should land on.
#[derive(Debug, Clone)]
pub struct ComposeOutcome {
    pub post: Post,
    pub posts: Vec<Post>,
    pub surface: Surface,
}

/// Builds posts on behalf of the signed-in author.
pub struct PostComposer {
    store: Arc<PostStore>,
    locator: Arc<dyn Locator>,
    author: User,
    last_id_ms: AtomicI64,
}

impl PostComposer {
    pub fn new(store: Arc<PostStore>, locator: Arc<dyn Locator>, author: User) -> Self {
        Self {
            store,
            locator,
            author,
            last_id_ms: AtomicI64::new(0),
        }
    }

    /// Validate, default, and append. The only rejection is blank content;
    /// every other odd input is normalized instead.
    pub async fn submit(&self, req: NewPostRequest) -> Result<ComposeOutcome, DomainError> {
        let content = req.content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyContent);
        }

        let id = self.next_id();

        let (location_type, location_name, coordinates) = if req.live_location {
            let center = match self.locator.current_position().await {
                Ok(position) => position,
                Err(e) => {
                    tracing::warn!(error = %e, "Position unavailable, using default center");
                    geo::DEFAULT_CENTER
                }
            };
            let coordinates = req
                .coordinates
                .unwrap_or_else(|| geo::displace(center, &id));
            (
                LocationType::Live,
                LIVE_LOCATION_LABEL.to_string(),
                Some(coordinates),
            )
        } else {
            let name = req
                .manual_location
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_LOCATION_LABEL)
                .to_string();
            (LocationType::Manual, name, None)
        };

        let sport = req
            .sport
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(sport::DEFAULT_SPORT)
            .to_string();

        let price = req.paid.then(|| parse_price(req.price.as_deref()));

        let mut author = self.author.clone();
        author.is_online = Some(true);

        let post = Post {
            id,
            user: author,
            content: content.to_string(),
            sport,
            skill_level: req.skill_level,
            date: parse_date(req.date.as_deref()),
            location_type,
            location_name,
            coordinates,
            split_bill: req.split_bill,
            is_paid: req.paid,
            price,
            likes: 0,
            comments: 0,
            created_at: JUST_NOW.to_string(),
        };

        let surface = if req.live_location {
            Surface::Map
        } else {
            Surface::Feed
        };

        tracing::info!(
            post_id = %post.id,
            sport = %post.sport,
            live = req.live_location,
            "Composed new post"
        );

        let posts = self.store.append(post.clone()).await;
        Ok(ComposeOutcome {
            post,
            posts,
            surface,
        })
    }

    /// Millisecond-timestamp id, forced strictly increasing so a burst of
    /// submissions inside one millisecond still gets unique ids.
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut seen = self.last_id_ms.load(Ordering::Relaxed);
        loop {
            let next = seen.max(now - 1) + 1;
            match self.last_id_ms.compare_exchange_weak(
                seen,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next.to_string(),
                Err(observed) => seen = observed,
            }
        }
    }
}

fn parse_price(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Accepts RFC 3339 as well as the zone-less strings HTML date and
/// datetime pickers produce; a bare `YYYY-MM-DD` means midnight UTC.
/// Anything else means "now".
fn parse_date(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Utc::now();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Utc.from_utc_datetime(&naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Utc.from_utc_datetime(&naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    }

    Utc::now()
}

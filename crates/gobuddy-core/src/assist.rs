//! Content assist - remote rewrite with a deterministic local fallback.
//!
//! The user always gets text back. A missing backend, an error, a
//! timeout, or an empty reply all degrade to the local rewrite, which is
//! a pure function of the draft.

use std::sync::Arc;
use std::time::Duration;

use crate::geo::byte_sum;
use crate::ports::ContentAssist;

/// One recognizable sport theme in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportTheme {
    pub sport: &'static str,
    pub emoji: &'static str,
    pub action: &'static str,
}

const DEFAULT_THEME: SportTheme = SportTheme {
    sport: "sports",
    emoji: "\u{1F3C6}",
    action: "Let's play",
};

/// Keyword table, first match wins. A draft naming several sports
/// resolves to the earliest group; the broad "run" substrings sit last
/// so they only catch drafts no other group claimed.
const KEYWORD_THEMES: &[(&[&str], SportTheme)] = &[
    (
        &["cricket"],
        SportTheme {
            sport: "Cricket",
            emoji: "\u{1F3CF}",
            action: "Hit some boundaries",
        },
    ),
    (
        &["football", "soccer"],
        SportTheme {
            sport: "Football",
            emoji: "\u{26BD}",
            action: "Score some goals",
        },
    ),
    (
        &["tennis"],
        SportTheme {
            sport: "Tennis",
            emoji: "\u{1F3BE}",
            action: "Ace it",
        },
    ),
    (
        &["badminton"],
        SportTheme {
            sport: "Badminton",
            emoji: "\u{1F3F8}",
            action: "Smash it",
        },
    ),
    (
        &["gym", "workout", "exercise"],
        SportTheme {
            sport: "Gym",
            emoji: "\u{1F4AA}",
            action: "Get fit",
        },
    ),
    (
        &["run", "hike", "jog"],
        SportTheme {
            sport: "Running",
            emoji: "\u{1F3C3}",
            action: "Go the distance",
        },
    ),
];

/// Detect the sport a draft is about.
pub fn detect_theme(text: &str) -> SportTheme {
    let lower = text.to_lowercase();
    for (keywords, theme) in KEYWORD_THEMES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *theme;
        }
    }
    DEFAULT_THEME
}

/// Local rewrite: one of three themed intros, then the draft untouched.
/// The intro pick hashes the draft, so the same input always produces
/// the same output.
pub fn fallback_rewrite(text: &str) -> String {
    let theme = detect_theme(text);
    let intros = [
        format!("Looking for a {} partner! {}", theme.sport, theme.emoji),
        format!("{} together! Anyone up for {}?", theme.action, theme.sport),
        format!("Ready for some {}? {} Need a buddy!", theme.sport, theme.emoji),
    ];
    let pick = (byte_sum(text) % intros.len() as u64) as usize;
    format!("{} {}", intros[pick], text)
}

/// Default time budget for the remote call.
pub const DEFAULT_ASSIST_TIMEOUT: Duration = Duration::from_secs(8);

/// Front door for enhancement requests. Infallible by contract.
pub struct AssistService {
    remote: Option<Arc<dyn ContentAssist>>,
    timeout: Duration,
}

impl AssistService {
    /// `None` means no backend is configured; every request uses the
    /// local rewrite.
    pub fn new(remote: Option<Arc<dyn ContentAssist>>) -> Self {
        Self {
            remote,
            timeout: DEFAULT_ASSIST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// One remote attempt inside the time budget, then the fallback.
    pub async fn enhance(&self, text: &str) -> String {
        let Some(remote) = &self.remote else {
            return fallback_rewrite(text);
        };

        match tokio::time::timeout(self.timeout, remote.enhance(text)).await {
            Ok(Ok(rewritten)) if !rewritten.trim().is_empty() => rewritten.trim().to_string(),
            Ok(Ok(_)) => {
                tracing::warn!("Assist backend returned empty text, using local rewrite");
                fallback_rewrite(text)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Assist backend failed, using local rewrite");
                fallback_rewrite(text)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Assist backend timed out, using local rewrite"
                );
                fallback_rewrite(text)
            }
        }
    }
}

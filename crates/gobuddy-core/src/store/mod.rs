//! Stores - stateful owners of the persisted app data.
//!
//! Each store keeps its working copy in memory and writes through an
//! injected [`crate::ports::KeyValueStore`]. Reads at startup fall back
//! to defaults; failed writes are logged and swallowed so the app keeps
//! serving from memory.

mod posts;
mod session;

pub use posts::{POSTS_KEY, PostStore};
pub use session::{AUTH_KEY, DEMO_OTP, OTP_TTL_SECS, OtpChallenge, SessionStore};

//! Session store - the persisted sign-in flag plus the demo OTP flow.
//!
//! This is mock authentication: any phone with enough digits gets the
//! fixed demo code, and the only secret state is a boolean.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::error::DomainError;
use crate::ports::KeyValueStore;

/// Storage slot holding the sign-in flag.
pub const AUTH_KEY: &str = "gobuddy_auth";
/// Only value ever written to the slot; anything else reads as signed out.
const AUTH_SET: &str = "true";

/// The fixed demo verification code, shown to the user in-app the way a
/// real one would arrive by SMS.
pub const DEMO_OTP: &str = "1234";
/// How long a challenge stays redeemable.
pub const OTP_TTL_SECS: i64 = 30;
const MIN_PHONE_DIGITS: usize = 10;

/// A pending verification challenge.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub phone: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn seconds_left(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// Holds the session flag and at most one pending challenge.
///
/// Expiry is checked when a code is redeemed, not by a background timer;
/// an abandoned challenge just sits until it is replaced or fails the
/// deadline check.
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
    authenticated: AtomicBool,
    challenge: RwLock<Option<OtpChallenge>>,
}

impl SessionStore {
    /// Open the store, restoring the persisted flag. An unreadable slot
    /// reads as signed out.
    pub async fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        let authenticated = matches!(kv.get(AUTH_KEY).await.as_deref(), Some(AUTH_SET));
        if authenticated {
            tracing::debug!(key = AUTH_KEY, "Restored signed-in session");
        }

        Self {
            kv,
            authenticated: AtomicBool::new(authenticated),
            challenge: RwLock::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Relaxed)
    }

    /// Issue a challenge for a phone number. Reissuing replaces any
    /// pending challenge and restarts the clock.
    pub async fn request_otp(&self, phone: &str) -> Result<OtpChallenge, DomainError> {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            return Err(DomainError::PhoneTooShort {
                min: MIN_PHONE_DIGITS,
            });
        }

        let now = Utc::now();
        let challenge = OtpChallenge {
            phone: phone.trim().to_string(),
            code: DEMO_OTP.to_string(),
            issued_at: now,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
        };

        *self.challenge.write().await = Some(challenge.clone());
        tracing::info!(phone = %challenge.phone, "Issued verification challenge");
        Ok(challenge)
    }

    /// Redeem a code. On success the pending challenge is consumed and the
    /// sign-in flag is set and persisted.
    ///
    /// A wrong code leaves the challenge in place so the user can retype
    /// it; only success, expiry, or sign-out clears it.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        let mut slot = self.challenge.write().await;
        let challenge = slot.as_ref().ok_or(DomainError::NoPendingChallenge)?;

        if challenge.is_expired_at(Utc::now()) {
            *slot = None;
            return Err(DomainError::CodeExpired);
        }

        if challenge.phone != phone.trim() || challenge.code != code.trim() {
            return Err(DomainError::CodeRejected);
        }

        *slot = None;
        drop(slot);

        self.log_in().await;
        Ok(())
    }

    /// Set the flag and persist it, best effort.
    pub async fn log_in(&self) {
        self.authenticated.store(true, Ordering::Relaxed);
        if let Err(e) = self.kv.set(AUTH_KEY, AUTH_SET).await {
            tracing::error!(key = AUTH_KEY, error = %e, "Failed to persist sign-in flag");
        }
    }

    /// Clear the flag and any pending challenge, best effort.
    pub async fn log_out(&self) {
        self.authenticated.store(false, Ordering::Relaxed);
        *self.challenge.write().await = None;
        if let Err(e) = self.kv.remove(AUTH_KEY).await {
            tracing::error!(key = AUTH_KEY, error = %e, "Failed to clear sign-in flag");
        }
    }

    /// Inspect the pending challenge (for status displays).
    pub async fn pending_challenge(&self) -> Option<OtpChallenge> {
        self.challenge.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::KvError;

    use async_trait::async_trait;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapBackend {
        slots: RwLock<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for MapBackend {
        async fn get(&self, key: &str) -> Option<String> {
            self.slots.read().await.get(key).cloned()
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
            self.slots
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), KvError> {
            self.slots.write().await.remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> bool {
            self.slots.read().await.contains_key(key)
        }
    }

    const PHONE: &str = "9876543210";

    #[tokio::test]
    async fn starts_signed_out_on_empty_backend() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn short_phone_is_rejected() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        let err = session.request_otp("12345").await.unwrap_err();
        assert!(matches!(err, DomainError::PhoneTooShort { .. }));
        assert!(session.pending_challenge().await.is_none());
    }

    #[tokio::test]
    async fn correct_code_signs_in_and_persists() {
        let kv = Arc::new(MapBackend::default());
        let session = SessionStore::open(kv.clone()).await;

        session.request_otp(PHONE).await.unwrap();
        session.verify_otp(PHONE, DEMO_OTP).await.unwrap();
        assert!(session.is_authenticated());
        assert!(session.pending_challenge().await.is_none());

        // a fresh store over the same backend sees the flag
        let restored = SessionStore::open(kv).await;
        assert!(restored.is_authenticated());
    }

    #[tokio::test]
    async fn wrong_code_keeps_the_challenge_alive() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        session.request_otp(PHONE).await.unwrap();

        let err = session.verify_otp(PHONE, "0000").await.unwrap_err();
        assert!(matches!(err, DomainError::CodeRejected));
        assert!(!session.is_authenticated());
        assert!(session.pending_challenge().await.is_some());

        // retyping the right code still works
        session.verify_otp(PHONE, DEMO_OTP).await.unwrap();
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn verify_without_request_is_rejected() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        let err = session.verify_otp(PHONE, DEMO_OTP).await.unwrap_err();
        assert!(matches!(err, DomainError::NoPendingChallenge));
    }

    #[tokio::test]
    async fn expired_code_is_rejected_and_consumed() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        session.request_otp(PHONE).await.unwrap();

        // age the challenge past its deadline by hand
        {
            let mut slot = session.challenge.write().await;
            if let Some(challenge) = slot.as_mut() {
                challenge.expires_at = Utc::now() - Duration::seconds(1);
            }
        }

        let err = session.verify_otp(PHONE, DEMO_OTP).await.unwrap_err();
        assert!(matches!(err, DomainError::CodeExpired));
        assert!(session.pending_challenge().await.is_none());

        // right code, no pending challenge anymore
        let err = session.verify_otp(PHONE, DEMO_OTP).await.unwrap_err();
        assert!(matches!(err, DomainError::NoPendingChallenge));
    }

    #[tokio::test]
    async fn reissuing_restarts_the_clock() {
        let session = SessionStore::open(Arc::new(MapBackend::default())).await;
        let first = session.request_otp(PHONE).await.unwrap();
        let second = session.request_otp(PHONE).await.unwrap();
        assert!(second.expires_at >= first.expires_at);
        assert!(second.seconds_left(Utc::now()) > 0);
    }

    #[tokio::test]
    async fn log_out_clears_flag_and_challenge() {
        let kv = Arc::new(MapBackend::default());
        let session = SessionStore::open(kv.clone()).await;
        session.request_otp(PHONE).await.unwrap();
        session.verify_otp(PHONE, DEMO_OTP).await.unwrap();

        session.log_out().await;
        assert!(!session.is_authenticated());
        assert!(session.pending_challenge().await.is_none());
        assert!(!kv.exists(AUTH_KEY).await);
    }

    #[tokio::test]
    async fn foreign_flag_values_read_as_signed_out() {
        let kv = Arc::new(MapBackend::default());
        kv.set(AUTH_KEY, "yes please").await.unwrap();
        let session = SessionStore::open(kv).await;
        assert!(!session.is_authenticated());
    }
}

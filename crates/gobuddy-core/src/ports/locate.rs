use async_trait::async_trait;

use crate::domain::Coordinates;

/// Locator trait - where the current user is right now.
///
/// Stands in for the device geolocation service the clients read from.
/// Callers must survive failure: a post composed without a position
/// falls back to the default map center.
#[async_trait]
pub trait Locator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocateError>;
}

/// Locator errors.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Permission denied")]
    Denied,
}

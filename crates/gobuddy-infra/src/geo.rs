//! Locator implementations.

use async_trait::async_trait;

use gobuddy_core::domain::Coordinates;
use gobuddy_core::geo;
use gobuddy_core::ports::{LocateError, Locator};

/// Locator pinned to one configured position.
///
/// The server has no GPS; this stands in for a real provider the same
/// way the demo seed stands in for real posts. Position comes from
/// `HOME_LATITUDE`/`HOME_LONGITUDE` or defaults to the demo city center.
pub struct FixedLocator {
    home: Coordinates,
}

impl FixedLocator {
    pub fn new(home: Coordinates) -> Self {
        Self { home }
    }

    pub fn from_env() -> Self {
        let latitude = std::env::var("HOME_LATITUDE")
            .ok()
            .and_then(|s| s.parse().ok());
        let longitude = std::env::var("HOME_LONGITUDE")
            .ok()
            .and_then(|s| s.parse().ok());

        let home = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Coordinates {
                latitude,
                longitude,
            },
            _ => geo::DEFAULT_CENTER,
        };

        Self::new(home)
    }
}

impl Default for FixedLocator {
    fn default() -> Self {
        Self::new(geo::DEFAULT_CENTER)
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        Ok(self.home)
    }
}

//! Map placement math.

use crate::domain::Coordinates;

/// Fallback map center when no position is known (the demo city center).
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 28.6139,
    longitude: 77.2090,
};

/// How far, in degrees, a derived marker may sit from its center.
const OFFSET_RADIUS_DEG: f64 = 0.008;

/// Byte-sum hash shared by marker placement and the assist template pick.
/// Stable across runs, which is the whole point.
pub(crate) fn byte_sum(s: &str) -> u64 {
    s.bytes().map(u64::from).sum()
}

/// Deterministic displacement of a center point, keyed off a post id.
///
/// The byte sum of the id picks an angle; sin/cos spread markers in a
/// ring of ~0.008 degrees around the center. The same id always lands
/// in the same spot.
pub fn displace(center: Coordinates, id: &str) -> Coordinates {
    let n = byte_sum(id) as f64;
    Coordinates {
        latitude: center.latitude + n.sin() * OFFSET_RADIUS_DEG,
        longitude: center.longitude + n.cos() * OFFSET_RADIUS_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_stable_per_id() {
        let a = displace(DEFAULT_CENTER, "1718000000000");
        let b = displace(DEFAULT_CENTER, "1718000000000");
        assert_eq!(a, b);
    }

    #[test]
    fn different_ids_land_in_different_spots() {
        let a = displace(DEFAULT_CENTER, "u1");
        let b = displace(DEFAULT_CENTER, "u2");
        assert_ne!(a, b);
    }

    #[test]
    fn displacement_stays_near_the_center() {
        let here = displace(DEFAULT_CENTER, "any-post-id");
        assert!((here.latitude - DEFAULT_CENTER.latitude).abs() <= OFFSET_RADIUS_DEG);
        assert!((here.longitude - DEFAULT_CENTER.longitude).abs() <= OFFSET_RADIUS_DEG);
    }
}

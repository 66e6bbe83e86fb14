//! The fixed sport catalog behind the composer picker and the filter chips.

/// Every sport the app offers. `General` is the catch-all the composer
/// falls back to when no sport is chosen.
pub const SPORTS: [&str; 17] = [
    "Badminton",
    "Basketball",
    "Boxing",
    "Cricket",
    "Cycling",
    "Football",
    "Golf",
    "Gym",
    "Hiking",
    "Hockey",
    "Running",
    "Soccer",
    "Swimming",
    "Tennis",
    "Volleyball",
    "Yoga",
    "General",
];

pub const DEFAULT_SPORT: &str = "General";

/// Emoji shown next to a sport name.
pub fn icon(sport: &str) -> &'static str {
    match sport {
        "Badminton" => "\u{1F3F8}",
        "Basketball" => "\u{1F3C0}",
        "Boxing" => "\u{1F94A}",
        "Cricket" => "\u{1F3CF}",
        "Cycling" => "\u{1F6B4}",
        "Football" => "\u{1F3C8}",
        "Golf" => "\u{26F3}",
        "Gym" => "\u{1F4AA}",
        "Hiking" => "\u{1F97E}",
        "Hockey" => "\u{1F3D1}",
        "Running" => "\u{1F3C3}",
        "Soccer" => "\u{26BD}",
        "Swimming" => "\u{1F3CA}",
        "Tennis" => "\u{1F3BE}",
        "Volleyball" => "\u{1F3D0}",
        "Yoga" => "\u{1F9D8}",
        _ => "\u{1F3C5}",
    }
}

/// Case-insensitive lookup into the catalog, returning the canonical
/// spelling. Names outside the catalog return `None`.
pub fn canonical(name: &str) -> Option<&'static str> {
    let name = name.trim();
    SPORTS.iter().find(|s| s.eq_ignore_ascii_case(name)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_is_case_insensitive() {
        assert_eq!(canonical("tennis"), Some("Tennis"));
        assert_eq!(canonical("  GYM "), Some("Gym"));
        assert_eq!(canonical("curling"), None);
    }

    #[test]
    fn every_catalog_sport_has_an_icon() {
        for sport in SPORTS {
            if sport == "General" {
                continue;
            }
            assert_ne!(icon(sport), icon("__unknown__"), "{sport} fell through to the default icon");
        }
    }
}

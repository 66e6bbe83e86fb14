//! Demo content: the current-user profile and the ten seed posts the app
//! starts with when nothing has been persisted yet.

use chrono::Utc;

use crate::domain::{Coordinates, Gender, LocationType, Post, SkillLevel, SportSkill, User};
use crate::geo;

fn avatar_url(photo_id: &str) -> String {
    format!("https://images.unsplash.com/{photo_id}?auto=format&fit=crop&w=150&h=150")
}

fn seed_author(
    id: &str,
    name: &str,
    photo_id: &str,
    online: bool,
    age: u8,
    gender: Gender,
    bio: &str,
    sports: &[(&str, SkillLevel)],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar_url(photo_id),
        is_online: online.then_some(true),
        bio: Some(bio.to_string()),
        age: Some(age),
        gender: Some(gender),
        sports: sports
            .iter()
            .map(|(sport, level)| SportSkill {
                sport: (*sport).to_string(),
                level: *level,
            })
            .collect(),
    }
}

fn near(dlat: f64, dlng: f64) -> Option<Coordinates> {
    Some(Coordinates {
        latitude: geo::DEFAULT_CENTER.latitude + dlat,
        longitude: geo::DEFAULT_CENTER.longitude + dlng,
    })
}

/// The signed-in demo user.
pub fn demo_user() -> User {
    User {
        id: "current-user".to_string(),
        name: "Sagar Sagar".to_string(),
        avatar: avatar_url("photo-1535713875002-d1d0cf377fde"),
        is_online: None,
        bio: Some(
            "Badminton enthusiast and weekend hiker. Always looking for a challenge!".to_string(),
        ),
        age: Some(24),
        gender: Some(Gender::Male),
        sports: vec![
            SportSkill {
                sport: "Badminton".to_string(),
                level: SkillLevel::Advanced,
            },
            SportSkill {
                sport: "Tennis".to_string(),
                level: SkillLevel::Intermediate,
            },
            SportSkill {
                sport: "Hiking".to_string(),
                level: SkillLevel::Beginner,
            },
        ],
    }
}

/// The ten demo posts. Built fresh per call so `date` reads as current,
/// the same way the client seeded its mock feed.
///
/// Two posts are manual-venue (one of them paid) so every filter chip
/// and both surfaces have something to show out of the box.
pub fn demo_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "1".to_string(),
            user: seed_author(
                "u1",
                "Srinjoy Chatterjee",
                "photo-1599566150163-29194dcaad36",
                true,
                22,
                Gender::Male,
                "Tennis enthusiast. Prefer early morning sessions to start the day right.",
                &[
                    ("Tennis", SkillLevel::Intermediate),
                    ("Badminton", SkillLevel::Beginner),
                ],
            ),
            content: "Looking for an intermediate Tennis partner for a morning rally. Available 6 AM - 8 AM."
                .to_string(),
            sport: "Tennis".to_string(),
            skill_level: Some(SkillLevel::Intermediate),
            date: now,
            location_type: LocationType::Live,
            location_name: "Central Park Courts".to_string(),
            coordinates: near(0.01, 0.01),
            split_bill: true,
            is_paid: false,
            price: None,
            likes: 12,
            comments: 4,
            created_at: "1 hour ago".to_string(),
        },
        Post {
            id: "2".to_string(),
            user: seed_author(
                "u2",
                "Ayesha Ijaz",
                "photo-1494790108377-be9c29b29330",
                false,
                26,
                Gender::Female,
                "Badminton lover. Competitive but fun. Let's elevate our game!",
                &[
                    ("Badminton", SkillLevel::Advanced),
                    ("Yoga", SkillLevel::Intermediate),
                ],
            ),
            content: "Badminton singles match? Advanced level preferred. Ready to play now!"
                .to_string(),
            sport: "Badminton".to_string(),
            skill_level: Some(SkillLevel::Advanced),
            date: now,
            location_type: LocationType::Manual,
            location_name: "City Sports Complex".to_string(),
            coordinates: None,
            split_bill: false,
            is_paid: true,
            price: Some(500),
            likes: 1,
            comments: 0,
            created_at: "2 hours ago".to_string(),
        },
        Post {
            id: "3".to_string(),
            user: seed_author(
                "u3",
                "Deepak Jaggupalli",
                "photo-1527980965255-d3b416303d12",
                true,
                29,
                Gender::Male,
                "Dedicated to fitness. Gym is my second home. Need a spotter?",
                &[
                    ("Gym", SkillLevel::Advanced),
                    ("Boxing", SkillLevel::Beginner),
                ],
            ),
            content: "Hitting the gym for chest day. Need a serious spotter for bench press."
                .to_string(),
            sport: "Gym".to_string(),
            skill_level: Some(SkillLevel::Advanced),
            date: now,
            location_type: LocationType::Live,
            location_name: "Gold's Gym".to_string(),
            coordinates: near(0.03, -0.01),
            split_bill: true,
            is_paid: false,
            price: None,
            likes: 45,
            comments: 12,
            created_at: "3 hours ago".to_string(),
        },
        Post {
            id: "4".to_string(),
            user: seed_author(
                "u4",
                "Sarah Chen",
                "photo-1438761681033-6461ffad8d80",
                false,
                24,
                Gender::Female,
                "Passionate Soccer goalie. Always looking for a team to play with.",
                &[
                    ("Soccer", SkillLevel::Pro),
                    ("Running", SkillLevel::Intermediate),
                ],
            ),
            content: "Our team needs a goalie for a friendly match this Sunday! Join us!"
                .to_string(),
            sport: "Soccer".to_string(),
            skill_level: Some(SkillLevel::Advanced),
            date: now,
            location_type: LocationType::Manual,
            location_name: "Riverside Park".to_string(),
            coordinates: None,
            split_bill: false,
            is_paid: false,
            price: None,
            likes: 8,
            comments: 2,
            created_at: "4 hours ago".to_string(),
        },
        Post {
            id: "5".to_string(),
            user: seed_author(
                "u5",
                "Rahul Verma",
                "photo-1500648767791-00dcc994a43e",
                false,
                32,
                Gender::Male,
                "Marathon runner. Love trail running and long distances.",
                &[
                    ("Running", SkillLevel::Advanced),
                    ("Cycling", SkillLevel::Beginner),
                ],
            ),
            content: "Going for a 10k run this evening. Pace 5:00 min/km. Join me?".to_string(),
            sport: "Running".to_string(),
            skill_level: Some(SkillLevel::Intermediate),
            date: now,
            location_type: LocationType::Live,
            location_name: "Lodi Gardens".to_string(),
            coordinates: near(0.005, 0.025),
            split_bill: false,
            is_paid: false,
            price: None,
            likes: 5,
            comments: 1,
            created_at: "30 mins ago".to_string(),
        },
        Post {
            id: "6".to_string(),
            user: seed_author(
                "u6",
                "Priya Singh",
                "photo-1544005313-94ddf0286df2",
                false,
                21,
                Gender::Female,
                "Certified Yoga instructor. Mindfulness and strength.",
                &[
                    ("Yoga", SkillLevel::Advanced),
                    ("Gym", SkillLevel::Intermediate),
                ],
            ),
            content: "Hosting a sunset Yoga session at the park. Open to all levels!".to_string(),
            sport: "Yoga".to_string(),
            skill_level: Some(SkillLevel::AllLevels),
            date: now,
            location_type: LocationType::Live,
            location_name: "Community Center".to_string(),
            coordinates: near(-0.03, -0.005),
            split_bill: true,
            is_paid: false,
            price: None,
            likes: 20,
            comments: 5,
            created_at: "1 hour ago".to_string(),
        },
        Post {
            id: "7".to_string(),
            user: seed_author(
                "u7",
                "Mike Ross",
                "photo-1506794778202-cad84cf45f1d",
                false,
                27,
                Gender::Male,
                "Avid Cyclist. Weekend rides are my therapy.",
                &[
                    ("Cycling", SkillLevel::Intermediate),
                    ("Swimming", SkillLevel::Beginner),
                ],
            ),
            content: "Planning a 50km ride this Sunday morning. Looking for riding buddies."
                .to_string(),
            sport: "Cycling".to_string(),
            skill_level: Some(SkillLevel::Intermediate),
            date: now,
            location_type: LocationType::Live,
            location_name: "Highway 1".to_string(),
            coordinates: near(0.04, 0.03),
            split_bill: false,
            is_paid: false,
            price: None,
            likes: 15,
            comments: 3,
            created_at: "5 hours ago".to_string(),
        },
        Post {
            id: "8".to_string(),
            user: seed_author(
                "u8",
                "Emily Blunt",
                "photo-1554151228-14d9def656ec",
                false,
                25,
                Gender::Female,
                "New to Cricket and eager to learn the basics.",
                &[("Cricket", SkillLevel::Beginner)],
            ),
            content: "Beginner looking for a Cricket coach or a friendly practice group."
                .to_string(),
            sport: "Cricket".to_string(),
            skill_level: Some(SkillLevel::Beginner),
            date: now,
            location_type: LocationType::Live,
            location_name: "Local Stadium".to_string(),
            coordinates: near(-0.015, 0.035),
            split_bill: true,
            is_paid: false,
            price: None,
            likes: 3,
            comments: 0,
            created_at: "2 hours ago".to_string(),
        },
        Post {
            id: "9".to_string(),
            user: seed_author(
                "u9",
                "David Beckham",
                "photo-1560250097-0b93528c311a",
                false,
                35,
                Gender::Male,
                "Football is passion. Play hard, play fair.",
                &[
                    ("Football", SkillLevel::Pro),
                    ("Golf", SkillLevel::Intermediate),
                ],
            ),
            content: "Organizing a casual 5-a-side Football match. We need 2 more players."
                .to_string(),
            sport: "Football".to_string(),
            skill_level: Some(SkillLevel::Pro),
            date: now,
            location_type: LocationType::Live,
            location_name: "Turf Ground".to_string(),
            coordinates: near(0.02, -0.03),
            split_bill: true,
            is_paid: false,
            price: None,
            likes: 100,
            comments: 20,
            created_at: "10 mins ago".to_string(),
        },
        Post {
            id: "10".to_string(),
            user: seed_author(
                "u10",
                "Jessica Jones",
                "photo-1573496359142-b8d87734a5a2",
                false,
                28,
                Gender::Female,
                "Kickboxing and strength training. Let's sparring!",
                &[
                    ("Boxing", SkillLevel::Advanced),
                    ("Gym", SkillLevel::Advanced),
                ],
            ),
            content: "Looking for a sparring partner for Boxing. Safety gear required.".to_string(),
            sport: "Boxing".to_string(),
            skill_level: Some(SkillLevel::Advanced),
            date: now,
            location_type: LocationType::Live,
            location_name: "Fight Club".to_string(),
            coordinates: near(-0.025, -0.015),
            split_bill: false,
            is_paid: false,
            price: None,
            likes: 7,
            comments: 2,
            created_at: "45 mins ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let posts = demo_posts();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn live_seed_posts_carry_coordinates() {
        for post in demo_posts() {
            if post.is_live() {
                assert!(post.coordinates.is_some(), "post {} is live without a position", post.id);
            } else {
                assert!(!post.location_name.is_empty());
            }
        }
    }

    #[test]
    fn seed_covers_both_surfaces_and_price_tiers() {
        let posts = demo_posts();
        assert!(posts.iter().any(|p| p.is_mappable()));
        assert!(posts.iter().any(|p| !p.is_live()));
        assert!(posts.iter().any(|p| p.is_paid && p.price.is_some()));
        assert!(posts.iter().any(|p| !p.is_paid));
    }

    #[test]
    fn seed_sports_come_from_the_catalog() {
        use crate::domain::sport;
        for post in demo_posts() {
            assert!(sport::canonical(&post.sport).is_some(), "{} not in catalog", post.sport);
        }
    }
}

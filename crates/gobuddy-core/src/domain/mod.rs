//! Domain entities - the core business objects.

mod post;
mod user;

pub mod sport;

pub use post::{Coordinates, LocationType, Post, SkillLevel};
pub use user::{Gender, SportSkill, User};

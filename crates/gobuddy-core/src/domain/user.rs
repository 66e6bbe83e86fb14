use serde::{Deserialize, Serialize};

use crate::domain::SkillLevel;

/// Gender options offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// One sport on a profile, with the self-assessed level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSkill {
    pub sport: String,
    pub level: SkillLevel,
}

/// User entity - the author snapshot embedded in every post.
///
/// Posts own their author copy outright; there is no separate user table
/// to join against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sports: Vec<SportSkill>,
}

impl User {
    /// Create a bare user with just identity and avatar; profile fields
    /// stay unset.
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            is_online: None,
            bio: None,
            age: None,
            gender: None,
            sports: Vec::new(),
        }
    }
}

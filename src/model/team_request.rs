use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A posting from a captain looking for more players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub id: String,
    pub captain_name: String,
    pub team_name: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub players_needed: u32,
    pub skill_level: SkillLevel,
    pub description: String,
    pub contact: String,
    pub status: TeamRequestStatus,
    pub current_players: Vec<String>,
}

impl TeamRequest {
    /// Whether the request still has open slots.
    pub fn can_join(&self) -> bool {
        self.status == TeamRequestStatus::Open && self.players_needed > 0
    }
}

/// Lifecycle of a team request. `Open` becomes `Full` when the last slot is taken.
///
/// `Completed` is part of the data model but no operation produces it yet.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TeamRequestStatus {
    #[default]
    Open,
    Full,
    Completed,
}

/// Skill level a captain is looking for.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum SkillLevel {
    #[default]
    Any,
    Beginner,
    Intermediate,
    Advanced,
}

/// The "create team request" form as submitted.
#[derive(Debug, Clone)]
pub struct TeamRequestForm {
    pub team_name: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub players_needed: u32,
    pub skill_level: SkillLevel,
    pub description: String,
}

impl Default for TeamRequestForm {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            location: String::new(),
            date: NaiveDate::default(),
            time: String::new(),
            players_needed: 2,
            skill_level: SkillLevel::Any,
            description: String::new(),
        }
    }
}

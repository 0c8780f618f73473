use serde::{Deserialize, Serialize};

/// A registered player account.
///
/// `email` is unique across the account store. The password itself is never
/// kept; `password_hash` holds an argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub batting_style: Option<BattingStyle>,
    pub bowling_style: Option<BowlingStyle>,
    pub experience: Option<Experience>,
}

/// The registration form as submitted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub batting_style: Option<BattingStyle>,
    pub bowling_style: Option<BowlingStyle>,
    pub experience: Option<Experience>,
}

#[derive(
    Debug,
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
pub enum BattingStyle {
    #[serde(rename = "Right Hand")]
    #[strum(serialize = "Right Hand")]
    RightHand,
    #[serde(rename = "Left Hand")]
    #[strum(serialize = "Left Hand")]
    LeftHand,
}

#[derive(
    Debug,
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
pub enum BowlingStyle {
    Fast,
    Spin,
    Medium,
}

/// Self-reported playing experience.
#[derive(
    Debug,
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
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

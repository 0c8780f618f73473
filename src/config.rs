use serde::Deserialize;

use crate::connect::password::PasswordConfig;
use crate::error::{ConnectError, Result};

/// Tunables for a [`CricketConnect`](crate::CricketConnect) session.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// let config = cricket_connect::Config::from_json(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.storage_key, "cricketUsers");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage slot holding the registered account list.
    pub storage_key: String,
    /// Probability that a ground starts the session `Available`.
    pub availability_ratio: f64,
    /// Time recorded on every booking.
    pub booking_slot: String,
    pub password: PasswordConfig,
    /// Seed for the availability draw. Seeded from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "cricketUsers".to_string(),
            availability_ratio: 0.7,
            booking_slot: "10:00 AM".to_string(),
            password: PasswordConfig::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values a session cannot start with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.availability_ratio) {
            return Err(ConnectError::InvalidConfig(
                "availability_ratio must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

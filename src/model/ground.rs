use serde::{Deserialize, Serialize};

/// A bookable cricket venue, derived from one fixture record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ground {
    pub id: String,
    pub name: String,
    pub location: String,
    pub availability: Availability,
    pub capacity: u32,
    pub price_per_hour: f64,
    pub amenities: Vec<String>,
    pub owner_id: String,
    pub description: String,
    pub contact: String,
    #[serde(rename = "type")]
    pub ground_type: GroundType,
}

impl Ground {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Whether a ground can still be booked this session.
///
/// Only ever moves from `Available` to `Booked`.
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
pub enum Availability {
    Available,
    Booked,
}

/// The two kinds of venue listed in the catalog.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GroundType {
    FullGround,
    BoxCricket,
}

/// Type filter applied when browsing the catalog.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GroundFilter {
    #[default]
    All,
    FullGround,
    BoxCricket,
}

impl GroundFilter {
    pub fn matches(self, ground_type: GroundType) -> bool {
        match self {
            GroundFilter::All => true,
            GroundFilter::FullGround => ground_type == GroundType::FullGround,
            GroundFilter::BoxCricket => ground_type == GroundType::BoxCricket,
        }
    }
}

/// The fixture document as shipped: a spreadsheet export with one sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSheet {
    #[serde(rename = "Sheet1")]
    pub records: Vec<FixtureRecord>,
}

/// A raw ground row from the fixture.
///
/// The price may be keyed `"Price per Hour"` or `"Price per Hour "`, but a row
/// carrying both is rejected as a duplicate field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(
        rename = "Price per Hour",
        alias = "Price per Hour ",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_hour: Option<f64>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_ground_filter_parses_kebab_case() {
        assert_eq!(
            GroundFilter::from_str("full-ground").unwrap(),
            GroundFilter::FullGround
        );
        assert_eq!(GroundFilter::from_str("all").unwrap(), GroundFilter::All);
        assert_eq!(GroundType::BoxCricket.to_string(), "box-cricket");
    }

    #[test]
    fn test_fixture_record_accepts_both_price_keys() {
        let sheet: FixtureSheet = serde_json::from_str(
            r#"{"Sheet1": [
                {"Name": "A", "Location": "X", "Price per Hour ": 1500},
                {"Name": "B", "Location": "Y", "Price per Hour": 800},
                {"Name": "C", "Location": "Z", "Price per Hour": null},
                {"Name": "D", "Location": "W"}
            ]}"#,
        )
        .unwrap();

        let prices: Vec<Option<f64>> = sheet.records.iter().map(|r| r.price_per_hour).collect();
        assert_eq!(prices, vec![Some(1500.0), Some(800.0), None, None]);
    }

    #[test]
    fn test_fixture_record_rejects_both_price_keys() {
        let err = serde_json::from_str::<FixtureRecord>(
            r#"{"Name": "A", "Location": "X", "Price per Hour": 1500, "Price per Hour ": 900}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate field"), "{err}");
    }
}

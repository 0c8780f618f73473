use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::model::{Availability, FixtureRecord, FixtureSheet, Ground, GroundType};
use crate::utils::contact_address;

/// Grounds priced above this per hour are full grounds; the rest are box cricket.
pub(crate) const FULL_GROUND_PRICE_THRESHOLD: f64 = 1000.0;

const FULL_GROUND_CAPACITY: u32 = 200;
const BOX_CRICKET_CAPACITY: u32 = 50;

const FULL_GROUND_AMENITIES: &[&str] = &["Parking", "Changing Rooms", "Cafeteria", "Night Lights"];
const BOX_CRICKET_AMENITIES: &[&str] = &["Indoor Facility", "AC", "Equipment"];

const FULL_GROUND_DESCRIPTION: &str = "Professional cricket ground with turf wickets";
const BOX_CRICKET_DESCRIPTION: &str = "Box cricket facility with modern amenities";

/// Parse a fixture document of the form `{"Sheet1": [...]}`.
pub fn parse_fixture(json: &str) -> Result<Vec<FixtureRecord>> {
    let sheet: FixtureSheet = serde_json::from_str(json)?;
    Ok(sheet.records)
}

/// Turn raw fixture rows into catalog grounds.
///
/// Ids are the 1-based row position. Each ground independently starts out
/// `Available` with probability `availability_ratio`.
pub fn load_grounds<R: Rng + ?Sized>(
    records: &[FixtureRecord],
    availability_ratio: f64,
    rng: &mut R,
) -> Vec<Ground> {
    // f64::max discards NaN, so a NaN ratio loads every ground as booked.
    let ratio = availability_ratio.max(0.0).min(1.0);
    let grounds: Vec<Ground> = records
        .iter()
        .enumerate()
        .map(|(index, record)| derive_ground(index + 1, record, rng.gen_bool(ratio)))
        .collect();

    debug!(
        count = grounds.len(),
        available = grounds.iter().filter(|g| g.is_available()).count(),
        "loaded grounds from fixture"
    );
    grounds
}

fn derive_ground(position: usize, record: &FixtureRecord, available: bool) -> Ground {
    let price = record.price_per_hour.unwrap_or_default();
    let full_ground = price > FULL_GROUND_PRICE_THRESHOLD;

    let (ground_type, capacity, amenities, description) = if full_ground {
        (
            GroundType::FullGround,
            FULL_GROUND_CAPACITY,
            FULL_GROUND_AMENITIES,
            FULL_GROUND_DESCRIPTION,
        )
    } else {
        (
            GroundType::BoxCricket,
            BOX_CRICKET_CAPACITY,
            BOX_CRICKET_AMENITIES,
            BOX_CRICKET_DESCRIPTION,
        )
    };

    Ground {
        id: position.to_string(),
        name: record.name.clone(),
        location: record.location.clone(),
        availability: if available {
            Availability::Available
        } else {
            Availability::Booked
        },
        capacity,
        price_per_hour: price,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        owner_id: format!("owner{position}"),
        description: description.to_string(),
        contact: contact_address(&record.name),
        ground_type,
    }
}

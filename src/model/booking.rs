use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A confirmed reservation.
///
/// `ground_name` is a copy taken at booking time, not a reference into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub ground_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub total_price: f64,
}

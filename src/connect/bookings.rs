use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::connect::catalog::Catalog;
use crate::error::{ConnectError, Result};
use crate::model::{Booking, Notice};
use crate::utils::next_id;

/// Result of a booking attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(Booking),
    /// The ground was already booked; nothing changed.
    Unavailable,
}

impl BookingOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            BookingOutcome::Booked(booking) => Notice::GroundBooked {
                ground_name: booking.ground_name.clone(),
                price_per_hour: booking.total_price,
            },
            BookingOutcome::Unavailable => Notice::GroundUnavailable,
        }
    }
}

/// Bookings made this session, in the order they were made.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Book a ground for `date` at `time`.
    ///
    /// A booked ground stays unavailable for the rest of the session,
    /// whatever the slot.
    pub fn book(
        &mut self,
        catalog: &mut Catalog,
        ground_id: &str,
        date: NaiveDate,
        time: &str,
    ) -> Result<BookingOutcome> {
        let ground = catalog
            .get(ground_id)
            .ok_or_else(|| ConnectError::GroundNotFound {
                id: ground_id.to_owned(),
            })?;

        if !ground.is_available() {
            warn!(ground_id, name = %ground.name, "ground already booked");
            return Ok(BookingOutcome::Unavailable);
        }

        let booking = Booking {
            id: next_id(),
            ground_name: ground.name.clone(),
            date,
            time: time.to_owned(),
            total_price: ground.price_per_hour,
        };
        let marked = catalog.mark_booked(ground_id);
        debug_assert!(marked, "ground {ground_id} resolved but not marked");
        self.bookings.push(booking.clone());
        debug!(ground_id, booking_id = %booking.id, "ground booked");

        Ok(BookingOutcome::Booked(booking))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::connect::fixture::load_grounds;
    use crate::model::{Availability, FixtureRecord};

    fn catalog(availability_ratio: f64) -> Catalog {
        let records = vec![FixtureRecord {
            name: "City Arena".to_string(),
            location: "Gachibowli".to_string(),
            price_per_hour: Some(1500.0),
        }];
        Catalog::new(load_grounds(
            &records,
            availability_ratio,
            &mut StdRng::seed_from_u64(0),
        ))
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_book_available_ground() {
        let mut catalog = catalog(1.0);
        let mut ledger = BookingLedger::default();

        let outcome = ledger.book(&mut catalog, "1", day(), "10:00 AM").unwrap();
        let BookingOutcome::Booked(booking) = &outcome else {
            panic!("expected a booking, got {outcome:?}");
        };
        assert_eq!(booking.ground_name, "City Arena");
        assert_eq!(booking.total_price, 1500.0);
        assert_eq!(booking.date, day());
        assert_eq!(booking.time, "10:00 AM");
        assert_eq!(ledger.bookings(), &[booking.clone()]);
        assert_eq!(catalog.get("1").unwrap().availability, Availability::Booked);
        assert_eq!(
            outcome.notice().to_string(),
            "Successfully booked City Arena for ₹1500/hour!"
        );
    }

    #[test]
    fn test_booked_ground_is_unavailable() {
        let mut catalog = catalog(0.0);
        let mut ledger = BookingLedger::default();

        let outcome = ledger.book(&mut catalog, "1", day(), "10:00 AM").unwrap();
        assert_eq!(outcome, BookingOutcome::Unavailable);
        assert_eq!(outcome.notice(), Notice::GroundUnavailable);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_second_booking_of_same_ground_is_rejected() {
        let mut catalog = catalog(1.0);
        let mut ledger = BookingLedger::default();

        ledger.book(&mut catalog, "1", day(), "10:00 AM").unwrap();
        let outcome = ledger.book(&mut catalog, "1", day(), "6:00 PM").unwrap();
        assert_eq!(outcome, BookingOutcome::Unavailable);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unknown_ground() {
        let mut catalog = catalog(1.0);
        let mut ledger = BookingLedger::default();
        assert!(matches!(
            ledger.book(&mut catalog, "7", day(), "10:00 AM"),
            Err(ConnectError::GroundNotFound { ref id }) if id == "7"
        ));
    }
}

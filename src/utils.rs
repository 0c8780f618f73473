use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use itertools::Itertools;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-based identifier: milliseconds since the epoch as a decimal string.
///
/// Bumped past the previous value when two ids are requested within the same
/// millisecond, so ids handed out by one process never repeat.
pub(crate) fn next_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// Contact address derived from a ground name: lowercased, whitespace dropped.
pub(crate) fn contact_address(name: &str) -> String {
    let slug = name.to_lowercase().split_whitespace().join("");
    format!("contact@{slug}.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let ids: Vec<i64> = (0..50).map(|_| next_id().parse().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_contact_address() {
        assert_eq!(
            contact_address("Gachibowli  Cricket Stadium"),
            "contact@gachibowlicricketstadium.com"
        );
    }
}

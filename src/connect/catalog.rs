use tracing::debug;

use crate::model::{Availability, Ground, GroundFilter};

/// The session's ground collection, in fixture order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    grounds: Vec<Ground>,
}

impl Catalog {
    pub fn new(grounds: Vec<Ground>) -> Self {
        Self { grounds }
    }

    pub fn grounds(&self) -> &[Ground] {
        &self.grounds
    }

    pub fn get(&self, id: &str) -> Option<&Ground> {
        self.grounds.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.grounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grounds.is_empty()
    }

    /// Grounds matching `search` and `filter`. See [`filter_grounds`].
    pub fn filter(&self, search: &str, filter: GroundFilter) -> Vec<&Ground> {
        filter_grounds(&self.grounds, search, filter)
    }

    /// Flip a ground to `Booked`. Returns false if the id is unknown.
    pub(crate) fn mark_booked(&mut self, id: &str) -> bool {
        match self.grounds.iter_mut().find(|g| g.id == id) {
            Some(ground) => {
                ground.availability = Availability::Booked;
                debug!(id, name = %ground.name, "ground marked booked");
                true
            }
            None => false,
        }
    }
}

/// Grounds whose name or location contains `search` (case-insensitive) and
/// whose type passes `filter`, in collection order.
pub fn filter_grounds<'a>(
    grounds: &'a [Ground],
    search: &str,
    filter: GroundFilter,
) -> Vec<&'a Ground> {
    let needle = search.to_lowercase();
    grounds
        .iter()
        .filter(|g| {
            g.name.to_lowercase().contains(&needle) || g.location.to_lowercase().contains(&needle)
        })
        .filter(|g| filter.matches(g.ground_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::connect::fixture::load_grounds;
    use crate::model::{FixtureRecord, GroundType};

    fn catalog() -> Catalog {
        let records = vec![
            FixtureRecord {
                name: "City Arena".to_string(),
                location: "Gachibowli".to_string(),
                price_per_hour: Some(1500.0),
            },
            FixtureRecord {
                name: "Box Zone".to_string(),
                location: "Madhapur".to_string(),
                price_per_hour: Some(800.0),
            },
            FixtureRecord {
                name: "Boxwood Oval".to_string(),
                location: "Kondapur".to_string(),
                price_per_hour: Some(2500.0),
            },
        ];
        Catalog::new(load_grounds(&records, 1.0, &mut StdRng::seed_from_u64(0)))
    }

    fn names(grounds: Vec<&Ground>) -> Vec<&str> {
        grounds.into_iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let catalog = catalog();
        assert_eq!(
            names(catalog.filter("box", GroundFilter::All)),
            vec!["Box Zone", "Boxwood Oval"]
        );
        assert_eq!(
            names(catalog.filter("BOX", GroundFilter::BoxCricket)),
            vec!["Box Zone"]
        );
    }

    #[test]
    fn test_search_matches_location() {
        assert_eq!(
            names(catalog().filter("gachi", GroundFilter::All)),
            vec!["City Arena"]
        );
    }

    #[test]
    fn test_type_filter_with_empty_search() {
        let catalog = catalog();
        let full = catalog.filter("", GroundFilter::FullGround);
        assert_eq!(names(full.clone()), vec!["City Arena", "Boxwood Oval"]);
        assert!(full.iter().all(|g| g.ground_type == GroundType::FullGround));
        assert_eq!(catalog.filter("", GroundFilter::All).len(), 3);
    }

    #[test]
    fn test_two_ground_example() {
        let grounds: Vec<Ground> = catalog().grounds()[..2].to_vec();
        assert_eq!(
            names(filter_grounds(&grounds, "box", GroundFilter::All)),
            vec!["Box Zone"]
        );
        assert_eq!(
            names(filter_grounds(&grounds, "", GroundFilter::FullGround)),
            vec!["City Arena"]
        );
    }

    #[test]
    fn test_mark_booked() {
        let mut catalog = catalog();
        assert!(catalog.mark_booked("2"));
        assert_eq!(catalog.get("2").unwrap().availability, Availability::Booked);
        assert!(!catalog.mark_booked("99"));
    }
}

//! Predicate engine deciding which listings satisfy a [`FilterCriteria`].
//!
//! Every predicate whose criterion is at its default is skipped. Active predicates are ANDed and
//! fail closed when the listing has no value for the field they read.

use super::criteria::FilterCriteria;
use super::domain::{College, Pg};

/// Read-only view of the fields the engine filters on.
pub trait Listing {
    /// Plural noun used in result summaries.
    const NOUN: &'static str;

    /// Fields searched by the free-text box.
    fn search_targets(&self) -> Vec<&str>;
    fn city(&self) -> Option<&str>;
    fn state(&self) -> Option<&str>;
    /// Category label for colleges, occupancy label for PGs.
    fn kind_label(&self) -> Option<&'static str>;
    fn courses(&self) -> Option<&[String]>;
    /// Annual fee for colleges, monthly rent for PGs.
    fn price(&self) -> Option<u64>;
    fn rating(&self) -> Option<f32>;
    fn package(&self) -> Option<u64>;
}

impl Listing for College {
    const NOUN: &'static str = "colleges";

    fn search_targets(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    fn kind_label(&self) -> Option<&'static str> {
        self.category.map(|category| category.label())
    }

    fn courses(&self) -> Option<&[String]> {
        Some(&self.courses)
    }

    fn price(&self) -> Option<u64> {
        self.fees
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn package(&self) -> Option<u64> {
        self.avg_package
    }
}

impl Listing for Pg {
    const NOUN: &'static str = "PGs";

    fn search_targets(&self) -> Vec<&str> {
        let mut targets = Vec::with_capacity(2 + self.nearby_colleges.len());
        targets.push(self.name.as_str());
        targets.push(self.location.as_str());
        targets.extend(self.nearby_colleges.iter().map(String::as_str));
        targets
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn state(&self) -> Option<&str> {
        None
    }

    fn kind_label(&self) -> Option<&'static str> {
        self.occupancy.map(|occupancy| occupancy.label())
    }

    fn courses(&self) -> Option<&[String]> {
        None
    }

    fn price(&self) -> Option<u64> {
        self.rent
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn package(&self) -> Option<u64> {
        None
    }
}

pub fn matches<E: Listing + ?Sized>(entity: &E, criteria: &FilterCriteria) -> bool {
    if !criteria.is_satisfiable() {
        return false;
    }

    matches_search(entity, criteria.search())
        && matches_exact(entity.city(), criteria.city())
        && matches_exact(entity.state(), criteria.state())
        && matches_exact(entity.kind_label(), criteria.kind())
        && matches_course(entity.courses(), criteria.course())
        && matches_price(entity.price(), criteria)
        && matches_rating(entity.rating(), criteria)
        && matches_package(entity.package(), criteria)
}

/// Keeps the listings that satisfy `criteria`, in input order.
pub fn filter_all<'a, E: Listing>(entities: &'a [E], criteria: &FilterCriteria) -> Vec<&'a E> {
    if !criteria.is_satisfiable() {
        return Vec::new();
    }
    entities
        .iter()
        .filter(|entity| matches(*entity, criteria))
        .collect()
}

pub fn filter_owned<E: Listing + Clone>(entities: &[E], criteria: &FilterCriteria) -> Vec<E> {
    filter_all(entities, criteria).into_iter().cloned().collect()
}

fn matches_search<E: Listing + ?Sized>(entity: &E, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    entity
        .search_targets()
        .iter()
        .any(|target| target.to_lowercase().contains(&needle))
}

fn matches_exact(value: Option<&str>, wanted: &str) -> bool {
    wanted.is_empty() || value == Some(wanted)
}

fn matches_course(courses: Option<&[String]>, wanted: &str) -> bool {
    if wanted.is_empty() {
        return true;
    }
    courses.is_some_and(|courses| courses.iter().any(|course| course == wanted))
}

fn matches_price(price: Option<u64>, criteria: &FilterCriteria) -> bool {
    let check_min = criteria.min_fees_active();
    let check_max = criteria.max_fees_active();
    if !check_min && !check_max {
        return true;
    }
    price.is_some_and(|price| {
        (!check_min || price >= criteria.min_fees()) && (!check_max || price <= criteria.max_fees())
    })
}

fn matches_rating(rating: Option<f32>, criteria: &FilterCriteria) -> bool {
    if !criteria.min_rating_active() {
        return true;
    }
    rating.is_some_and(|rating| rating >= criteria.min_rating())
}

fn matches_package(package: Option<u64>, criteria: &FilterCriteria) -> bool {
    if !criteria.min_package_active() {
        return true;
    }
    package.is_some_and(|package| package >= criteria.min_package())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::criteria::CriteriaField;
    use crate::directory::domain::{ContactDetails, EntityId, Occupancy};

    fn pg(rent: Option<u64>) -> Pg {
        Pg {
            id: EntityId::from("1"),
            name: "Elite Boys PG".to_string(),
            location: "Near IIT Delhi".to_string(),
            city: Some("Delhi".to_string()),
            rent,
            occupancy: Some(Occupancy::Boys),
            facilities: vec!["WiFi".to_string()],
            nearby_colleges: vec!["IIT Delhi".to_string(), "JNU".to_string()],
            rating: Some(4.2),
            contact: ContactDetails::default(),
        }
    }

    #[test]
    fn pg_search_reaches_nearby_colleges() {
        let criteria = FilterCriteria::new().with(CriteriaField::Search("jnu".to_string()));
        assert!(matches(&pg(Some(12_000)), &criteria));
    }

    #[test]
    fn missing_rent_fails_active_budget_only() {
        let listing = pg(None);
        assert!(matches(&listing, &FilterCriteria::new()));

        let criteria = FilterCriteria::new().with(CriteriaField::MaxFees(15_000));
        assert!(!matches(&listing, &criteria));
    }

    #[test]
    fn pg_has_no_state_so_state_filter_rejects() {
        let criteria = FilterCriteria::new().with(CriteriaField::State("Delhi".to_string()));
        assert!(!matches(&pg(Some(12_000)), &criteria));
    }

    #[test]
    fn occupancy_uses_kind_label() {
        let boys = FilterCriteria::new().with(CriteriaField::Kind("Boys".to_string()));
        let girls = FilterCriteria::new().with(CriteriaField::Kind("Girls".to_string()));
        let lowercase = FilterCriteria::new().with(CriteriaField::Kind("boys".to_string()));
        assert!(matches(&pg(Some(12_000)), &boys));
        assert!(!matches(&pg(Some(12_000)), &girls));
        assert!(!matches(&pg(Some(12_000)), &lowercase));
    }

    #[test]
    fn nan_rating_matches_nothing() {
        let criteria = FilterCriteria::new().with(CriteriaField::MinRating(f32::NAN));
        assert!(!matches(&pg(Some(12_000)), &criteria));
    }
}

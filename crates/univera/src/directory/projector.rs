use serde::Serialize;
use std::fmt;

use super::criteria::FilterCriteria;
use super::domain::{College, ContactDetails, EntityId, Pg};
use super::engine::{filter_all, Listing};

/// Course badges shown on a compact college card.
pub const COMPACT_BADGE_CAP: usize = 2;
/// Badges shown per list on a college detail card.
pub const DETAIL_BADGE_CAP: usize = 4;

const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Renders a rupee amount in lakhs with one decimal, e.g. `250000` becomes `"2.5"`.
///
/// The quotient is rounded from its exact binary value and a tie on the half-tenth rounds up,
/// so `25000` gives `"0.3"` while `15000` (stored as 0.1499...) gives `"0.1"`.
pub fn lakhs(amount: u64) -> String {
    let value = amount as f64 / RUPEES_PER_LAKH;
    // Only quotients ending in .25 or .75 sit exactly on a half-tenth; scaling by 4 is exact.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (value * 10.0).floor() + 1.0;
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Groups digits the Indian way: last three, then pairs (`120000` becomes `"1,20,000"`).
pub fn rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// A badge row cut to a display cap, with the "+N more" marker for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeList {
    pub shown: Vec<String>,
    pub hidden: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_label: Option<String>,
}

impl BadgeList {
    pub fn truncate(items: &[String], cap: usize) -> Self {
        let shown: Vec<String> = items.iter().take(cap).cloned().collect();
        let hidden = items.len() - shown.len();
        let overflow_label = (hidden > 0).then(|| format!("+{hidden} more"));
        Self {
            shown,
            hidden,
            overflow_label,
        }
    }

    pub fn full(items: &[String]) -> Self {
        Self::truncate(items, items.len())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeCardView {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_lakhs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_package_lakhs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_percentage: Option<u8>,
    pub courses: BadgeList,
}

impl From<&College> for CollegeCardView {
    fn from(college: &College) -> Self {
        Self {
            id: college.id.clone(),
            name: college.name.clone(),
            location: college.location.clone(),
            category: college.category.map(|category| category.label()),
            rating: college.rating,
            fees_lakhs: college.fees.map(lakhs),
            avg_package_lakhs: college.avg_package.map(lakhs),
            placement_percentage: college.placement_percentage,
            courses: BadgeList::truncate(&college.courses, COMPACT_BADGE_CAP),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeDetailView {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_lakhs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_package_lakhs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_package_lakhs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_percentage: Option<u8>,
    pub courses: BadgeList,
    pub facilities: BadgeList,
    pub recruiters: BadgeList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_area: Option<String>,
    pub contact: ContactDetails,
}

impl From<&College> for CollegeDetailView {
    fn from(college: &College) -> Self {
        Self {
            id: college.id.clone(),
            name: college.name.clone(),
            location: college.location.clone(),
            city: college.city.clone(),
            state: college.state.clone(),
            category: college.category.map(|category| category.label()),
            rating: college.rating,
            fees_lakhs: college.fees.map(lakhs),
            avg_package_lakhs: college.avg_package.map(lakhs),
            highest_package_lakhs: college.highest_package.map(lakhs),
            placement_percentage: college.placement_percentage,
            courses: BadgeList::truncate(&college.courses, DETAIL_BADGE_CAP),
            facilities: BadgeList::truncate(&college.facilities, DETAIL_BADGE_CAP),
            recruiters: BadgeList::truncate(&college.recruiters, DETAIL_BADGE_CAP),
            campus_area: college.campus_area.clone(),
            contact: college.contact.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PgCardView {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Monthly rent with Indian digit grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<String>,
    pub facilities: BadgeList,
    pub nearby_colleges: BadgeList,
    pub contact: ContactDetails,
}

impl From<&Pg> for PgCardView {
    fn from(pg: &Pg) -> Self {
        Self {
            id: pg.id.clone(),
            name: pg.name.clone(),
            location: pg.location.clone(),
            occupancy: pg.occupancy.map(|occupancy| occupancy.label()),
            rating: pg.rating,
            rent: pg.rent.map(rupees),
            facilities: BadgeList::full(&pg.facilities),
            nearby_colleges: BadgeList::full(&pg.nearby_colleges),
            contact: pg.contact.clone(),
        }
    }
}

/// Listing types that know how to render their result card.
pub trait Project: Listing {
    type View: Serialize + Clone + fmt::Debug + Send + Sync + 'static;

    fn project(&self) -> Self::View;
}

impl Project for College {
    type View = CollegeCardView;

    fn project(&self) -> Self::View {
        CollegeCardView::from(self)
    }
}

impl Project for Pg {
    type View = PgCardView;

    fn project(&self) -> Self::View {
        PgCardView::from(self)
    }
}

/// Filters `entities` and renders the survivors, preserving input order.
pub fn compute_results<E: Project>(entities: &[E], criteria: &FilterCriteria) -> Vec<E::View> {
    filter_all(entities, criteria)
        .into_iter()
        .map(|entity| entity.project())
        .collect()
}

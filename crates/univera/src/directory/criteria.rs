use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper end of the fee range; leaving `max_fees` here means "no ceiling".
pub const FEES_RANGE_MAX: u64 = u64::MAX;

/// Immutable filter state for a listing view.
///
/// Fields are only changed through [`FilterCriteria::with`], which hands back a new value. For PG
/// listings the fee bounds constrain monthly rent and `kind` holds the occupancy label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    search: String,
    city: String,
    state: String,
    #[serde(rename = "type")]
    kind: String,
    course: String,
    min_fees: u64,
    max_fees: u64,
    min_rating: f32,
    min_package: u64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: String::new(),
            state: String::new(),
            kind: String::new(),
            course: String::new(),
            min_fees: 0,
            max_fees: FEES_RANGE_MAX,
            min_rating: 0.0,
            min_package: 0,
        }
    }
}

/// One edit coming from the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaField {
    Search(String),
    City(String),
    State(String),
    Kind(String),
    Course(String),
    FeeRange { min: u64, max: u64 },
    MinFees(u64),
    MaxFees(u64),
    MinRating(f32),
    MinPackage(u64),
    /// `None` is the "All Budgets" choice.
    Budget(Option<BudgetBucket>),
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a single field (or the fee pair) replaced.
    #[must_use]
    pub fn with(&self, change: CriteriaField) -> Self {
        let mut next = self.clone();
        match change {
            CriteriaField::Search(value) => next.search = value,
            CriteriaField::City(value) => next.city = value,
            CriteriaField::State(value) => next.state = value,
            CriteriaField::Kind(value) => next.kind = value,
            CriteriaField::Course(value) => next.course = value,
            CriteriaField::FeeRange { min, max } => {
                next.min_fees = min;
                next.max_fees = max;
            }
            CriteriaField::MinFees(value) => next.min_fees = value,
            CriteriaField::MaxFees(value) => next.max_fees = value,
            CriteriaField::MinRating(value) => next.min_rating = value,
            CriteriaField::MinPackage(value) => next.min_package = value,
            CriteriaField::Budget(bucket) => {
                let (min, max) = bucket.map_or((0, FEES_RANGE_MAX), BudgetBucket::bounds);
                next.min_fees = min;
                next.max_fees = max;
            }
        }
        next
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn min_fees(&self) -> u64 {
        self.min_fees
    }

    pub fn max_fees(&self) -> u64 {
        self.max_fees
    }

    pub fn min_rating(&self) -> f32 {
        self.min_rating
    }

    pub fn min_package(&self) -> u64 {
        self.min_package
    }

    /// True when every field sits at its reset value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// An inverted fee range can never be satisfied.
    pub fn is_satisfiable(&self) -> bool {
        self.min_fees <= self.max_fees
    }

    pub(crate) fn min_fees_active(&self) -> bool {
        self.min_fees > 0
    }

    pub(crate) fn max_fees_active(&self) -> bool {
        self.max_fees != FEES_RANGE_MAX
    }

    // Non-positive bounds admit every rating, so they stay inactive. NaN stays active and rejects
    // everything.
    pub(crate) fn min_rating_active(&self) -> bool {
        self.min_rating > 0.0 || self.min_rating.is_nan()
    }

    pub(crate) fn min_package_active(&self) -> bool {
        self.min_package > 0
    }
}

/// Rent buckets offered on the PG listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBucket {
    #[serde(rename = "under_10k")]
    Under10k,
    #[serde(rename = "10k_15k")]
    TenToFifteen,
    #[serde(rename = "15k_20k")]
    FifteenToTwenty,
    #[serde(rename = "above_20k")]
    Above20k,
}

impl BudgetBucket {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Under10k,
            Self::TenToFifteen,
            Self::FifteenToTwenty,
            Self::Above20k,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under10k => "Under ₹10k",
            Self::TenToFifteen => "₹10k - ₹15k",
            Self::FifteenToTwenty => "₹15k - ₹20k",
            Self::Above20k => "Above ₹20k",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Under10k => "under_10k",
            Self::TenToFifteen => "10k_15k",
            Self::FifteenToTwenty => "15k_20k",
            Self::Above20k => "above_20k",
        }
    }

    /// Inclusive rent bounds. The strict `< 10000` and `> 20000` edges become 9999 and 20001;
    /// 15000 and 20000 belong to both neighbouring buckets.
    pub const fn bounds(self) -> (u64, u64) {
        match self {
            Self::Under10k => (0, 9_999),
            Self::TenToFifteen => (10_000, 15_000),
            Self::FifteenToTwenty => (15_000, 20_000),
            Self::Above20k => (20_001, FEES_RANGE_MAX),
        }
    }

    pub fn contains(self, rent: u64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&rent)
    }
}

impl FromStr for BudgetBucket {
    type Err = CriteriaParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|bucket| bucket.key() == trimmed || bucket.label() == trimmed)
            .ok_or_else(|| CriteriaParseError::UnknownBudget(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaParseError {
    #[error("'{value}' is not a valid value for {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown budget bucket '{0}'")]
    UnknownBudget(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_only_the_named_field() {
        let base = FilterCriteria::new().with(CriteriaField::City("Mumbai".to_string()));
        let next = base.with(CriteriaField::MinRating(4.0));

        assert_eq!(base.min_rating(), 0.0);
        assert_eq!(next.city(), "Mumbai");
        assert_eq!(next.min_rating(), 4.0);
        assert!(!next.is_default());
    }

    #[test]
    fn budget_choice_sets_rent_bounds() {
        let criteria =
            FilterCriteria::new().with(CriteriaField::Budget(Some(BudgetBucket::TenToFifteen)));
        assert_eq!((criteria.min_fees(), criteria.max_fees()), (10_000, 15_000));

        let cleared = criteria.with(CriteriaField::Budget(None));
        assert!(cleared.is_default());
    }

    #[test]
    fn bucket_edges_follow_listing_page() {
        assert!(BudgetBucket::Under10k.contains(9_999));
        assert!(!BudgetBucket::Under10k.contains(10_000));
        assert!(BudgetBucket::TenToFifteen.contains(15_000));
        assert!(BudgetBucket::FifteenToTwenty.contains(15_000));
        assert!(BudgetBucket::FifteenToTwenty.contains(20_000));
        assert!(!BudgetBucket::Above20k.contains(20_000));
        assert!(BudgetBucket::Above20k.contains(20_001));
    }

    #[test]
    fn buckets_parse_from_label_or_key() {
        assert_eq!(
            "₹10k - ₹15k".parse::<BudgetBucket>(),
            Ok(BudgetBucket::TenToFifteen)
        );
        assert_eq!("above_20k".parse::<BudgetBucket>(), Ok(BudgetBucket::Above20k));
        assert!(matches!(
            "cheap".parse::<BudgetBucket>(),
            Err(CriteriaParseError::UnknownBudget(_))
        ));
    }

    #[test]
    fn inverted_fee_range_is_unsatisfiable() {
        let criteria = FilterCriteria::new().with(CriteriaField::FeeRange {
            min: 300_000,
            max: 100_000,
        });
        assert!(!criteria.is_satisfiable());
    }

    #[test]
    fn deserializes_partial_criteria_with_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"city":"Delhi","type":"Engineering"}"#).expect("parses");
        assert_eq!(criteria.city(), "Delhi");
        assert_eq!(criteria.kind(), "Engineering");
        assert_eq!(criteria.max_fees(), FEES_RANGE_MAX);
    }
}

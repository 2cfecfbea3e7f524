//! College and PG listings: the entity store, the predicate engine, result projection, and the
//! listing view that ties them together.

mod controller;
pub mod criteria;
pub mod domain;
pub mod engine;
pub mod projector;
pub mod router;
pub mod seed;
mod service;
pub mod session;
pub mod store;

pub use controller::DirectoryView;
pub use criteria::{
    BudgetBucket, CriteriaField, CriteriaParseError, FilterCriteria, FEES_RANGE_MAX,
};
pub use domain::{
    College, CollegeCategory, ContactDetails, DomainError, EntityId, Occupancy, Pg, Role,
};
pub use engine::{filter_all, filter_owned, matches, Listing};
pub use projector::{
    compute_results, lakhs, rupees, BadgeList, CollegeCardView, CollegeDetailView, PgCardView,
    Project, COMPACT_BADGE_CAP, DETAIL_BADGE_CAP,
};
pub use router::directory_router;
pub use service::{DirectoryService, ListingPage};
pub use session::{SessionProvider, ROLE_HEADER};
pub use store::{
    CollegeUpdate, DirectoryAdmin, DirectoryProvider, DirectorySnapshot, EntityStore,
    InMemoryDirectory, ProviderError,
};

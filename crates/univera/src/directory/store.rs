use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::controller::DirectoryView;
use super::domain::{College, CollegeCategory, DomainError, EntityId, Pg};

/// Source of full directory snapshots. Each call is a one-shot load of every record.
pub trait DirectoryProvider: Send + Sync {
    fn load_colleges(&self) -> impl Future<Output = Result<Vec<College>, ProviderError>> + Send;
    fn load_pgs(&self) -> impl Future<Output = Result<Vec<Pg>, ProviderError>> + Send;
}

/// Admin mutations. Changes show up on the next full load; unknown ids are reported, not errors.
pub trait DirectoryAdmin: DirectoryProvider {
    fn add_college(
        &self,
        college: College,
    ) -> impl Future<Output = Result<EntityId, ProviderError>> + Send;
    fn add_pg(&self, pg: Pg) -> impl Future<Output = Result<EntityId, ProviderError>> + Send;
    /// Returns `false` when no college has `id`.
    fn update_college(
        &self,
        id: EntityId,
        update: CollegeUpdate,
    ) -> impl Future<Output = Result<bool, ProviderError>> + Send;
    /// Returns `false` when no college has `id`.
    fn delete_college(&self, id: EntityId)
        -> impl Future<Output = Result<bool, ProviderError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error("duplicate record id {0}")]
    DuplicateId(EntityId),
    #[error("failed to read directory snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed directory snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Partial college edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollegeUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<CollegeCategory>,
    pub rating: Option<f32>,
    pub fees: Option<u64>,
    pub avg_package: Option<u64>,
    pub highest_package: Option<u64>,
    pub placement_percentage: Option<u8>,
    pub courses: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub recruiters: Option<Vec<String>>,
    pub campus_area: Option<String>,
}

impl CollegeUpdate {
    pub fn apply_to(self, college: &mut College) {
        if let Some(name) = self.name {
            college.name = name;
        }
        if let Some(location) = self.location {
            college.location = location;
        }
        if self.city.is_some() {
            college.city = self.city;
        }
        if self.state.is_some() {
            college.state = self.state;
        }
        if self.category.is_some() {
            college.category = self.category;
        }
        if self.rating.is_some() {
            college.rating = self.rating;
        }
        if self.fees.is_some() {
            college.fees = self.fees;
        }
        if self.avg_package.is_some() {
            college.avg_package = self.avg_package;
        }
        if self.highest_package.is_some() {
            college.highest_package = self.highest_package;
        }
        if self.placement_percentage.is_some() {
            college.placement_percentage = self.placement_percentage;
        }
        if let Some(courses) = self.courses {
            college.courses = courses;
        }
        if let Some(facilities) = self.facilities {
            college.facilities = facilities;
        }
        if let Some(recruiters) = self.recruiters {
            college.recruiters = recruiters;
        }
        if self.campus_area.is_some() {
            college.campus_area = self.campus_area;
        }
    }
}

/// On-disk snapshot layout: `{ "colleges": [...], "pgs": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySnapshot {
    pub colleges: Vec<College>,
    pub pgs: Vec<Pg>,
}

/// Mock data store backed by in-process vectors, with optional simulated latency.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    colleges: RwLock<Vec<College>>,
    pgs: RwLock<Vec<Pg>>,
    latency: Duration,
    sequence: AtomicU64,
}

impl InMemoryDirectory {
    pub fn new(colleges: Vec<College>, pgs: Vec<Pg>) -> Result<Self, ProviderError> {
        validate_records(&colleges, College::validate, |college| &college.id)?;
        validate_records(&pgs, Pg::validate, |pg| &pg.id)?;
        Ok(Self {
            colleges: RwLock::new(colleges),
            pgs: RwLock::new(pgs),
            ..Self::default()
        })
    }

    pub fn seeded() -> Self {
        Self {
            colleges: RwLock::new(super::seed::seed_colleges()),
            pgs: RwLock::new(super::seed::seed_pgs()),
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: DirectorySnapshot) -> Result<Self, ProviderError> {
        Self::new(snapshot.colleges, snapshot.pgs)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProviderError> {
        let snapshot: DirectorySnapshot = serde_json::from_str(raw)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProviderError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProviderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json(&raw)?;
        info!(path = %path.display(), "directory snapshot loaded from file");
        Ok(directory)
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Next `{prefix}-NNNNNN` id from this directory's sequence that no stored record holds.
    fn next_free_id<T>(
        &self,
        prefix: &str,
        records: &[T],
        id_of: impl Fn(&T) -> &EntityId,
    ) -> EntityId {
        loop {
            let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let id = EntityId(format!("{prefix}-{n:06}"));
            if !records.iter().any(|record| id_of(record) == &id) {
                return id;
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn validate_records<T>(
    records: &[T],
    validate: impl Fn(&T) -> Result<(), DomainError>,
    id_of: impl Fn(&T) -> &EntityId,
) -> Result<(), ProviderError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        validate(record)?;
        let id = id_of(record);
        if !seen.insert(id) {
            return Err(ProviderError::DuplicateId(id.clone()));
        }
    }
    Ok(())
}

impl DirectoryProvider for InMemoryDirectory {
    async fn load_colleges(&self) -> Result<Vec<College>, ProviderError> {
        self.simulate_latency().await;
        Ok(self.colleges.read().await.clone())
    }

    async fn load_pgs(&self) -> Result<Vec<Pg>, ProviderError> {
        self.simulate_latency().await;
        Ok(self.pgs.read().await.clone())
    }
}

impl DirectoryAdmin for InMemoryDirectory {
    async fn add_college(&self, mut college: College) -> Result<EntityId, ProviderError> {
        self.simulate_latency().await;
        let mut colleges = self.colleges.write().await;
        college.id = self.next_free_id("college", colleges.as_slice(), |stored| &stored.id);
        college.validate()?;

        let id = college.id.clone();
        colleges.push(college);
        info!(%id, "college added");
        Ok(id)
    }

    async fn add_pg(&self, mut pg: Pg) -> Result<EntityId, ProviderError> {
        self.simulate_latency().await;
        let mut pgs = self.pgs.write().await;
        pg.id = self.next_free_id("pg", pgs.as_slice(), |stored| &stored.id);
        pg.validate()?;

        let id = pg.id.clone();
        pgs.push(pg);
        info!(%id, "pg added");
        Ok(id)
    }

    async fn update_college(
        &self,
        id: EntityId,
        update: CollegeUpdate,
    ) -> Result<bool, ProviderError> {
        self.simulate_latency().await;
        let mut colleges = self.colleges.write().await;
        let Some(stored) = colleges.iter_mut().find(|college| college.id == id) else {
            debug!(%id, "update skipped; college not found");
            return Ok(false);
        };

        let mut candidate = stored.clone();
        update.apply_to(&mut candidate);
        candidate.validate()?;
        *stored = candidate;
        info!(%id, "college updated");
        Ok(true)
    }

    async fn delete_college(&self, id: EntityId) -> Result<bool, ProviderError> {
        self.simulate_latency().await;
        let mut colleges = self.colleges.write().await;
        let before = colleges.len();
        colleges.retain(|college| college.id != id);
        let removed = colleges.len() != before;
        if removed {
            info!(%id, "college deleted");
        } else {
            debug!(%id, "delete skipped; college not found");
        }
        Ok(removed)
    }
}

/// Loaded directory snapshot handed to listing views.
#[derive(Debug, Clone)]
pub struct EntityStore {
    colleges: Arc<[College]>,
    pgs: Arc<[Pg]>,
    loaded_at: DateTime<Utc>,
}

impl EntityStore {
    /// Loads colleges and PGs concurrently; either failure fails the whole load.
    pub async fn load<P: DirectoryProvider>(provider: &P) -> Result<Self, ProviderError> {
        let (colleges, pgs) = tokio::try_join!(provider.load_colleges(), provider.load_pgs())?;
        let store = Self::from_parts(colleges, pgs);
        debug!(
            colleges = store.colleges.len(),
            pgs = store.pgs.len(),
            "directory snapshot loaded"
        );
        Ok(store)
    }

    pub fn from_parts(colleges: Vec<College>, pgs: Vec<Pg>) -> Self {
        Self {
            colleges: colleges.into(),
            pgs: pgs.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn pgs(&self) -> &[Pg] {
        &self.pgs
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn college(&self, id: &EntityId) -> Option<&College> {
        self.colleges.iter().find(|college| &college.id == id)
    }

    pub fn college_view(&self) -> DirectoryView<College> {
        DirectoryView::new(Arc::clone(&self.colleges))
    }

    pub fn pg_view(&self) -> DirectoryView<Pg> {
        DirectoryView::new(Arc::clone(&self.pgs))
    }
}

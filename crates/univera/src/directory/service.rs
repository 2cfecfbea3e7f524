use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::controller::DirectoryView;
use super::criteria::FilterCriteria;
use super::domain::{College, EntityId, Pg};
use super::projector::{CollegeCardView, CollegeDetailView, PgCardView, Project};
use super::store::{
    CollegeUpdate, DirectoryAdmin, DirectoryProvider, EntityStore, ProviderError,
};

/// Result envelope for one listing query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<V> {
    pub total: usize,
    pub shown: usize,
    pub summary: String,
    pub criteria: FilterCriteria,
    pub results: Vec<V>,
}

impl<V> ListingPage<V> {
    pub fn from_view<E>(view: DirectoryView<E>) -> Self
    where
        E: Project<View = V>,
    {
        let total = view.total();
        let summary = view.summary();
        let criteria = view.criteria().clone();
        let results = view.into_results();
        Self {
            total,
            shown: results.len(),
            summary,
            criteria,
            results,
        }
    }
}

/// Loads a fresh snapshot per request and runs it through a listing view.
pub struct DirectoryService<P> {
    provider: Arc<P>,
}

impl<P> DirectoryService<P>
where
    P: DirectoryProvider + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub async fn snapshot(&self) -> Result<EntityStore, ProviderError> {
        EntityStore::load(self.provider.as_ref()).await
    }

    pub async fn search_colleges(
        &self,
        criteria: Option<FilterCriteria>,
    ) -> Result<ListingPage<CollegeCardView>, ProviderError> {
        let store = self.snapshot().await?;
        Ok(page_for(store.college_view(), criteria))
    }

    pub async fn search_pgs(
        &self,
        criteria: Option<FilterCriteria>,
    ) -> Result<ListingPage<PgCardView>, ProviderError> {
        let store = self.snapshot().await?;
        Ok(page_for(store.pg_view(), criteria))
    }

    pub async fn college_detail(
        &self,
        id: &EntityId,
    ) -> Result<Option<CollegeDetailView>, ProviderError> {
        let store = self.snapshot().await?;
        Ok(store.college(id).map(CollegeDetailView::from))
    }
}

impl<P> DirectoryService<P>
where
    P: DirectoryAdmin + 'static,
{
    pub async fn add_college(&self, college: College) -> Result<EntityId, ProviderError> {
        self.provider.add_college(college).await
    }

    pub async fn add_pg(&self, pg: Pg) -> Result<EntityId, ProviderError> {
        self.provider.add_pg(pg).await
    }

    pub async fn update_college(
        &self,
        id: EntityId,
        update: CollegeUpdate,
    ) -> Result<bool, ProviderError> {
        self.provider.update_college(id, update).await
    }

    pub async fn delete_college(&self, id: EntityId) -> Result<bool, ProviderError> {
        self.provider.delete_college(id).await
    }
}

fn page_for<E: Project>(
    mut view: DirectoryView<E>,
    criteria: Option<FilterCriteria>,
) -> ListingPage<E::View> {
    match criteria {
        Some(criteria) => {
            view.replace_criteria(criteria);
        }
        None => {
            debug!(noun = E::NOUN, "unparseable criteria; returning no results");
            view.on_rejected_criteria();
        }
    }
    ListingPage::from_view(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::store::InMemoryDirectory;

    #[tokio::test]
    async fn rejected_criteria_yield_an_empty_page() {
        let service = DirectoryService::new(Arc::new(InMemoryDirectory::seeded()));

        let page = service.search_pgs(None).await.expect("pgs load");
        assert_eq!(page.summary, "Showing 0 of 3 PGs");
        assert_eq!((page.total, page.shown), (3, 0));
        assert!(page.results.is_empty());
        assert!(page.criteria.is_default());

        let page = service
            .search_colleges(Some(FilterCriteria::default()))
            .await
            .expect("colleges load");
        assert_eq!(page.summary, "Showing 4 of 4 colleges");
    }
}

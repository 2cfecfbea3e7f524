use std::sync::Arc;

use tracing::debug;

use super::criteria::{CriteriaField, FilterCriteria};
use super::projector::{compute_results, Project};

/// Listing view state: an immutable snapshot, the current criteria, and the rendered results.
///
/// Every change recomputes the whole result set synchronously.
#[derive(Debug, Clone)]
pub struct DirectoryView<E: Project> {
    entities: Arc<[E]>,
    criteria: FilterCriteria,
    results: Vec<E::View>,
}

impl<E: Project> DirectoryView<E> {
    pub fn new(entities: impl Into<Arc<[E]>>) -> Self {
        Self::with_criteria(entities, FilterCriteria::default())
    }

    pub fn with_criteria(entities: impl Into<Arc<[E]>>, criteria: FilterCriteria) -> Self {
        let entities = entities.into();
        let results = compute_results(&entities, &criteria);
        Self {
            entities,
            criteria,
            results,
        }
    }

    pub fn on_field_change(&mut self, change: CriteriaField) -> &[E::View] {
        let next = self.criteria.with(change);
        self.replace_criteria(next)
    }

    pub fn replace_criteria(&mut self, criteria: FilterCriteria) -> &[E::View] {
        self.criteria = criteria;
        self.recompute();
        &self.results
    }

    pub fn on_reset(&mut self) -> &[E::View] {
        self.replace_criteria(FilterCriteria::default())
    }

    /// Criteria that could not be understood: back to defaults with nothing shown.
    pub fn on_rejected_criteria(&mut self) -> &[E::View] {
        self.criteria = FilterCriteria::default();
        self.results.clear();
        &self.results
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn results(&self) -> &[E::View] {
        &self.results
    }

    pub fn into_results(self) -> Vec<E::View> {
        self.results
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn total(&self) -> usize {
        self.entities.len()
    }

    /// "Showing 1 of 2 colleges"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} {}",
            self.results.len(),
            self.entities.len(),
            E::NOUN
        )
    }

    fn recompute(&mut self) {
        self.results = compute_results(&self.entities, &self.criteria);
        debug!(
            shown = self.results.len(),
            total = self.entities.len(),
            noun = E::NOUN,
            "listing results recomputed"
        );
    }
}

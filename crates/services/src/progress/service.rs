use std::sync::Arc;

use course_core::model::{Catalog, CourseId};
use storage::repository::{KeyValueStore, progress_key};

use super::widget::CourseProgress;
use crate::error::ProgressError;

/// Opens progress widgets for catalog courses.
#[derive(Clone)]
pub struct ProgressService {
    catalog: Arc<Catalog>,
    store: Arc<dyn KeyValueStore>,
}

impl ProgressService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { catalog, store }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Load the progress widget for a course.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownCourse` if the course is not in the catalog.
    pub async fn open(&self, course_id: CourseId) -> Result<CourseProgress, ProgressError> {
        let course = self
            .catalog
            .get(course_id)
            .cloned()
            .ok_or(ProgressError::UnknownCourse(course_id))?;
        Ok(CourseProgress::load(course, Arc::clone(&self.store)).await)
    }

    /// Remove stored progress for a course, surfacing storage failures.
    ///
    /// Ids outside the catalog are accepted so stale keys can be cleaned up.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the key cannot be removed.
    pub async fn clear_stored(&self, course_id: CourseId) -> Result<(), ProgressError> {
        let key = progress_key(course_id);
        self.store.remove(&key).await?;
        tracing::info!(%key, "cleared stored progress");
        Ok(())
    }
}

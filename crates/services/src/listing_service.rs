use std::sync::Arc;

use chrono::{DateTime, Utc};
use course_core::expansion::{ExpansionController, ExpansionState, SelectOutcome};
use course_core::model::{Catalog, CourseId, CourseInfoRow};

use crate::Clock;
use crate::error::ListingError;

/// Card-level view of one course in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub info: Vec<CourseInfoRow>,
    pub skills: Vec<String>,
    pub highlighted: bool,
    pub expanded: bool,
}

/// The course section: catalog plus the single expanded-course state.
#[derive(Clone)]
pub struct CourseListing {
    catalog: Arc<Catalog>,
    clock: Clock,
    expansion: ExpansionController,
}

impl CourseListing {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        Self {
            catalog,
            clock,
            expansion: ExpansionController::new(),
        }
    }

    #[must_use]
    pub fn with_expansion(mut self, expansion: ExpansionController) -> Self {
        self.expansion = expansion;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> ExpansionState {
        self.expansion.state()
    }

    #[must_use]
    pub fn is_expanded(&self, id: CourseId) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Toggle the details of a course, honoring the click cooldown.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::UnknownCourse` if the course is not listed.
    pub fn select(&mut self, id: CourseId) -> Result<SelectOutcome, ListingError> {
        let now = self.clock.now();
        self.select_at(id, now)
    }

    /// Same as `select`, at an explicit instant.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::UnknownCourse` if the course is not listed.
    pub fn select_at(
        &mut self,
        id: CourseId,
        now: DateTime<Utc>,
    ) -> Result<SelectOutcome, ListingError> {
        if self.catalog.get(id).is_none() {
            return Err(ListingError::UnknownCourse(id));
        }
        let outcome = self.expansion.select(id, now);
        if outcome == SelectOutcome::Dropped {
            tracing::debug!(course_id = %id, "select dropped during cooldown");
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.catalog
            .iter()
            .map(|course| CourseSummary {
                id: course.id(),
                title: course.title().to_string(),
                subtitle: course.subtitle().map(ToString::to_string),
                description: course.description().to_string(),
                price: course.price().map(ToString::to_string),
                image_url: course.image_url().map(ToString::to_string),
                info: course.info_rows(),
                skills: course.skills().to_vec(),
                highlighted: course.is_highlighted(),
                expanded: self.expansion.is_expanded(course.id()),
            })
            .collect()
    }
}

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::course::{Course, CourseDraft, CourseError};
use crate::model::ids::CourseId;

const BUILTIN_CATALOG: &str = include_str!("../../data/courses.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course id {0} appears more than once")]
    DuplicateCourse(CourseId),
    #[error("invalid course {id}: {source}")]
    InvalidCourse {
        id: CourseId,
        #[source]
        source: CourseError,
    },
    #[error("catalog document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only, ordered collection of courses.
///
/// Courses are shared behind `Arc` so widgets can hold one without
/// borrowing the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Arc<Course>>,
}

impl Catalog {
    /// Build a catalog from validated courses.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCourse` if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for course in &courses {
            if !seen.insert(course.id()) {
                return Err(CatalogError::DuplicateCourse(course.id()));
            }
        }
        Ok(Self {
            courses: courses.into_iter().map(Arc::new).collect(),
        })
    }

    /// Validate drafts and build a catalog from them.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for invalid courses or duplicate ids.
    pub fn from_drafts(drafts: Vec<CourseDraft>) -> Result<Self, CatalogError> {
        let courses = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id;
                draft
                    .validate()
                    .map_err(|source| CatalogError::InvalidCourse { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(courses)
    }

    /// Parse a JSON array of course drafts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or validation errors.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<CourseDraft> = serde_json::from_str(raw)?;
        Self::from_drafts(drafts)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog document is invalid.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("embedded catalog should be valid")
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Arc<Course>> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn courses(&self) -> &[Arc<Course>] {
        &self.courses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Course>> {
        self.courses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

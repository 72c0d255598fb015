//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::{CatalogError, CourseId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
///
/// Widget operations never fail; these cover lookups and the explicit
/// maintenance entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("course {0} is not in the catalog")]
    UnknownCourse(CourseId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CourseListing`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ListingError {
    #[error("course {0} is not in the catalog")]
    UnknownCourse(CourseId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("cannot read catalog file {path}: {source}")]
    CatalogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

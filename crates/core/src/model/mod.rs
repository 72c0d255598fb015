mod catalog;
mod course;
mod ids;
mod progress;

pub use ids::{CourseId, ModuleId, ParseIdError};

pub use catalog::{Catalog, CatalogError};
pub use course::{Course, CourseDraft, CourseError, CourseInfoRow, CourseModule, InfoIcon};
pub use progress::{CompletionSet, progress_percent};

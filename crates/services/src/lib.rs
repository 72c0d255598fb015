#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod listing_service;
pub mod progress;

pub use course_core::Clock;

pub use app_services::{AppServices, CatalogSource};
pub use error::{AppServicesError, ListingError, ProgressError};
pub use listing_service::{CourseListing, CourseSummary};
pub use progress::{CourseProgress, Persistence, ProgressNotice, ProgressService, ToggleOutcome};

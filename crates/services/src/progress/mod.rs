mod service;
mod widget;

pub use service::ProgressService;
pub use widget::{CourseProgress, Persistence, ProgressNotice, ToggleOutcome};

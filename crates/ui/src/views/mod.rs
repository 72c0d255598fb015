mod courses;
mod header;
mod landing;
mod reveal;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use courses::{BackToTop, CourseCard, CourseDetails, CoursesSection};
pub use header::Header;
pub use landing::LandingView;
pub use reveal::use_staggered_reveal;
pub use state::{ViewError, ViewState, view_state_from_resource};

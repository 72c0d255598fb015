use std::sync::Arc;

use services::{CourseListing, ProgressService};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;

    /// A collapsed listing for a newly mounted course section.
    fn listing(&self) -> CourseListing;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    listing: CourseListing,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            listing: app.listing(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn listing(&self) -> CourseListing {
        self.listing.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

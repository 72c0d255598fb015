use std::path::{Path, PathBuf};
use std::sync::Arc;

use course_core::model::Catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::listing_service::CourseListing;
use crate::progress::ProgressService;

/// Where the course catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the file cannot be read or is not a valid catalog.
    pub fn load(&self) -> Result<Catalog, AppServicesError> {
        match self {
            CatalogSource::Builtin => Ok(Catalog::builtin()),
            CatalogSource::File(path) => load_catalog_file(path),
        }
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog, AppServicesError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppServicesError::CatalogFile {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = Catalog::from_json(&raw)?;
    tracing::info!(path = %path.display(), courses = catalog.len(), "loaded catalog file");
    Ok(catalog)
}

/// Assembles app-facing services over one catalog and one store.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<Catalog>,
    storage: Storage,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or catalog loading fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        catalog: &CatalogSource,
    ) -> Result<Self, AppServicesError> {
        let catalog = catalog.load()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, clock, catalog))
    }

    /// Build services over in-memory storage; nothing survives the process.
    #[must_use]
    pub fn in_memory(clock: Clock, catalog: Catalog) -> Self {
        Self::from_storage(Storage::in_memory(), clock, catalog)
    }

    #[must_use]
    pub fn from_storage(storage: Storage, clock: Clock, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressService::new(
            Arc::clone(&catalog),
            Arc::clone(&storage.kv),
        ));
        Self {
            clock,
            catalog,
            storage,
            progress,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    /// A fresh listing, collapsed, for one mounted course section.
    #[must_use]
    pub fn listing(&self) -> CourseListing {
        CourseListing::new(Arc::clone(&self.catalog), self.clock)
    }
}

use std::sync::Arc;

use course_core::model::{Catalog, CourseDraft, CourseId, ModuleId};
use course_core::time::fixed_clock;
use services::{AppServices, Persistence, ProgressNotice};
use storage::repository::{KeyValueStore, Storage, StorageError};

fn catalog_with_course_two() -> Catalog {
    let course = CourseDraft::new(CourseId::new(2), "Counselling methods")
        .with_module(10, "Lesson 1", "Ethics")
        .with_module(11, "Lesson 2", "Rapport")
        .with_module(12, "Lesson 3", "Contract")
        .validate()
        .unwrap();
    let empty = CourseDraft::new(CourseId::new(9), "Coming soon")
        .validate()
        .unwrap();
    Catalog::new(vec![course, empty]).unwrap()
}

#[tokio::test]
async fn progress_survives_a_reload_over_sqlite() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    let services = AppServices::from_storage(storage, fixed_clock(), catalog_with_course_two());
    let progress_svc = services.progress();

    let mut progress = progress_svc.open(CourseId::new(2)).await.unwrap();
    assert_eq!(progress.progress_percent(), 0);
    progress.toggle(ModuleId::new(10)).await.unwrap();
    assert_eq!(progress.progress_percent(), 33);
    progress.toggle(ModuleId::new(11)).await.unwrap();
    assert_eq!(progress.progress_percent(), 67);
    drop(progress);

    let reloaded = progress_svc.open(CourseId::new(2)).await.unwrap();
    assert!(reloaded.is_completed(ModuleId::new(10)));
    assert!(reloaded.is_completed(ModuleId::new(11)));
    assert!(!reloaded.is_completed(ModuleId::new(12)));

    let mut reloaded = reloaded;
    assert_eq!(reloaded.reset().await, Persistence::Saved);
    assert_eq!(reloaded.progress_percent(), 0);
    let stored = services.storage().kv.get("course_2_progress").await.unwrap();
    assert_eq!(stored, None);
}

#[tokio::test]
async fn course_without_modules_is_always_zero_percent() {
    let services = AppServices::in_memory(fixed_clock(), catalog_with_course_two());
    let mut progress = services.progress().open(CourseId::new(9)).await.unwrap();
    assert_eq!(progress.progress_percent(), 0);
    assert_eq!(progress.toggle(ModuleId::new(1)).await, None);
    assert_eq!(progress.progress_percent(), 0);
}

struct BrokenStore;

#[async_trait::async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::QuotaExceeded)
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test]
async fn broken_storage_never_breaks_the_widget() {
    let storage = Storage {
        kv: Arc::new(BrokenStore),
    };
    let services = AppServices::from_storage(storage, fixed_clock(), catalog_with_course_two());
    let mut progress = services.progress().open(CourseId::new(2)).await.unwrap();
    assert!(!progress.has_progress());

    let outcome = progress.toggle(ModuleId::new(12)).await.unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.persistence, Persistence::MemoryOnly);
    assert_eq!(progress.progress_percent(), 33);
    assert_eq!(progress.notice(), Some(ProgressNotice::SaveFailed));

    assert_eq!(progress.reset().await, Persistence::MemoryOnly);
    assert_eq!(progress.progress_percent(), 0);
    assert_eq!(
        progress.notice().map(ProgressNotice::message),
        Some("Could not reset progress. Please try again later.")
    );
}

#[tokio::test]
async fn widgets_for_different_courses_use_separate_keys() {
    let services = AppServices::in_memory(fixed_clock(), Catalog::builtin());
    let svc = services.progress();

    let mut art = svc.open(CourseId::new(1)).await.unwrap();
    let mut crisis = svc.open(CourseId::new(4)).await.unwrap();
    art.toggle(ModuleId::new(1)).await.unwrap();
    crisis.toggle(ModuleId::new(1)).await.unwrap();
    crisis.toggle(ModuleId::new(2)).await.unwrap();

    let kv = &services.storage().kv;
    assert_eq!(kv.get("course_1_progress").await.unwrap().as_deref(), Some("[1]"));
    assert_eq!(kv.get("course_4_progress").await.unwrap().as_deref(), Some("[1,2]"));
}

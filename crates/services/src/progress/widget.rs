use std::sync::Arc;

use course_core::model::{CompletionSet, Course, CourseId, ModuleId, progress_percent};
use storage::repository::{KeyValueStore, progress_key};

/// Whether a change reached persistent storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    /// Kept in memory for this session only.
    MemoryOnly,
}

/// Result of toggling a known module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub completed: bool,
    pub persistence: Persistence,
}

/// Inline, dismissible message shown under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressNotice {
    SaveFailed,
    ResetFailed,
}

impl ProgressNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ProgressNotice::SaveFailed => {
                "Progress could not be saved. It will be kept until you leave the page."
            }
            ProgressNotice::ResetFailed => "Could not reset progress. Please try again later.",
        }
    }
}

/// Completed-module checklist for one course.
///
/// Owns the course's `CompletionSet` and writes every change through to the
/// key-value store. Storage failures degrade to in-memory state and are
/// logged; no operation returns an error.
pub struct CourseProgress {
    course: Arc<Course>,
    key: String,
    completed: CompletionSet,
    store: Arc<dyn KeyValueStore>,
    notice: Option<ProgressNotice>,
}

impl CourseProgress {
    /// Read the stored set for `course`. Missing, unreadable, or corrupt
    /// values yield an empty set.
    pub async fn load(course: Arc<Course>, store: Arc<dyn KeyValueStore>) -> Self {
        let key = progress_key(course.id());
        let completed = match store.get(&key).await {
            Ok(Some(raw)) => match CompletionSet::from_json(&raw) {
                Ok(set) => set,
                Err(err) => {
                    tracing::warn!(%key, error = %err, "stored progress is corrupt, starting empty");
                    CompletionSet::new()
                }
            },
            Ok(None) => CompletionSet::new(),
            Err(err) => {
                tracing::warn!(%key, error = %err, "failed to read progress, starting empty");
                CompletionSet::new()
            }
        };

        let mut progress = Self {
            course,
            key,
            completed,
            store,
            notice: None,
        };
        let dropped = progress.completed.retain_known(&progress.course);
        if !dropped.is_empty() {
            tracing::debug!(key = %progress.key, ?dropped, "dropped unknown module ids");
        }
        progress
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course.id()
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, module_id: ModuleId) -> bool {
        self.completed.contains(module_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.course.module_count()
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.completed.is_empty()
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.completed.len(), self.course.module_count())
    }

    #[must_use]
    pub fn notice(&self) -> Option<ProgressNotice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Flip `module_id` and persist the whole set.
    ///
    /// Returns `None` for ids that are not modules of this course.
    pub async fn toggle(&mut self, module_id: ModuleId) -> Option<ToggleOutcome> {
        if !self.course.has_module(module_id) {
            tracing::debug!(key = %self.key, %module_id, "ignoring toggle of unknown module");
            return None;
        }

        let completed = self.completed.toggle(module_id);
        let persistence = self.persist().await;
        Some(ToggleOutcome {
            completed,
            persistence,
        })
    }

    /// Clear the set and remove the stored key.
    pub async fn reset(&mut self) -> Persistence {
        self.completed.clear();
        match self.store.remove(&self.key).await {
            Ok(()) => {
                self.notice = None;
                Persistence::Saved
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to remove progress");
                self.notice = Some(ProgressNotice::ResetFailed);
                Persistence::MemoryOnly
            }
        }
    }

    async fn persist(&mut self) -> Persistence {
        let encoded = match self.completed.to_json() {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to encode progress");
                self.notice = Some(ProgressNotice::SaveFailed);
                return Persistence::MemoryOnly;
            }
        };

        match self.store.set(&self.key, &encoded).await {
            Ok(()) => {
                if self.notice == Some(ProgressNotice::SaveFailed) {
                    self.notice = None;
                }
                Persistence::Saved
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to save progress");
                self.notice = Some(ProgressNotice::SaveFailed);
                Persistence::MemoryOnly
            }
        }
    }
}

use course_core::model::{Course, ModuleId};
use services::CourseProgress;

/// Snapshot of a progress widget for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: Vec<ModuleId>,
    pub completed_count: usize,
    pub module_count: usize,
    pub percent: u8,
    pub notice: Option<&'static str>,
}

impl ProgressVm {
    #[must_use]
    pub fn from_progress(progress: &CourseProgress) -> Self {
        Self {
            completed: progress.completed().iter().collect(),
            completed_count: progress.completed_count(),
            module_count: progress.module_count(),
            percent: progress.progress_percent(),
            notice: progress.notice().map(|notice| notice.message()),
        }
    }

    #[must_use]
    pub fn is_completed(&self, id: ModuleId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.completed_count > 0
    }

    #[must_use]
    pub fn stats_label(&self) -> String {
        format!(
            "{} of {} ({}%)",
            self.completed_count, self.module_count, self.percent
        )
    }

    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: ModuleId,
    pub title: String,
    pub content: String,
}

#[must_use]
pub fn map_module_rows(course: &Course) -> Vec<ModuleRowVm> {
    course
        .modules()
        .iter()
        .map(|module| ModuleRowVm {
            id: module.id(),
            title: module.title().to_string(),
            content: module.content().to_string(),
        })
        .collect()
}

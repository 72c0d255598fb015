use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, ModuleId};

/// One lesson or topic unit within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    id: ModuleId,
    title: String,
    #[serde(default)]
    content: String,
}

impl CourseModule {
    #[must_use]
    pub fn new(id: ModuleId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Unvalidated course input, as authored in the catalog document.
///
/// Field names follow the catalog JSON (`nextStart`, `imageUrl`, `type`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub next_start: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,
    #[error("module {0} has an empty title")]
    EmptyModuleTitle(ModuleId),
    #[error("module id {0} appears more than once")]
    DuplicateModule(ModuleId),
}

impl CourseDraft {
    /// Start a draft with only the required fields set.
    #[must_use]
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: None,
            description: String::new(),
            duration: None,
            kind: None,
            format: None,
            next_start: None,
            price: None,
            image_url: None,
            modules: Vec::new(),
            benefits: Vec::new(),
            skills: Vec::new(),
            highlighted: false,
        }
    }

    #[must_use]
    pub fn with_module(mut self, id: u64, title: &str, content: &str) -> Self {
        self.modules
            .push(CourseModule::new(ModuleId::new(id), title, content));
        self
    }

    /// Validate and normalize the draft into an immutable course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the title is blank, a module title is blank,
    /// or module ids repeat.
    pub fn validate(self) -> Result<Course, CourseError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }

        let mut seen = BTreeSet::new();
        let mut modules = Vec::with_capacity(self.modules.len());
        for module in self.modules {
            if !seen.insert(module.id) {
                return Err(CourseError::DuplicateModule(module.id));
            }
            let module_title = module.title.trim();
            if module_title.is_empty() {
                return Err(CourseError::EmptyModuleTitle(module.id));
            }
            modules.push(CourseModule::new(
                module.id,
                module_title,
                module.content.trim(),
            ));
        }

        Ok(Course {
            id: self.id,
            title,
            subtitle: normalize_optional(self.subtitle),
            description: self.description.trim().to_string(),
            duration: normalize_optional(self.duration),
            kind: normalize_optional(self.kind),
            format: normalize_optional(self.format),
            next_start: normalize_optional(self.next_start),
            price: normalize_optional(self.price),
            image_url: normalize_optional(self.image_url),
            modules,
            benefits: normalize_list(self.benefits),
            skills: normalize_list(self.skills),
            highlighted: self.highlighted,
        })
    }
}

/// A catalog entry describing one educational offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    subtitle: Option<String>,
    description: String,
    duration: Option<String>,
    kind: Option<String>,
    format: Option<String>,
    next_start: Option<String>,
    price: Option<String>,
    image_url: Option<String>,
    modules: Vec<CourseModule>,
    benefits: Vec<String>,
    skills: Vec<String>,
    highlighted: bool,
}

/// Icon shown next to a row of the course info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoIcon {
    Clock,
    Graduation,
    Laptop,
    Calendar,
}

/// One labelled row of the course info card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseInfoRow {
    pub icon: InfoIcon,
    pub label: &'static str,
    pub value: String,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    #[must_use]
    pub fn next_start(&self) -> Option<&str> {
        self.next_start.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn has_module(&self, id: ModuleId) -> bool {
        self.modules.iter().any(|module| module.id == id)
    }

    #[must_use]
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Rows for the info card, skipping metadata the course does not declare.
    #[must_use]
    pub fn info_rows(&self) -> Vec<CourseInfoRow> {
        [
            (InfoIcon::Clock, "Duration", &self.duration),
            (InfoIcon::Graduation, "Type", &self.kind),
            (InfoIcon::Laptop, "Format", &self.format),
            (InfoIcon::Calendar, "Start", &self.next_start),
        ]
        .into_iter()
        .filter_map(|(icon, label, value)| {
            value.as_ref().map(|value| CourseInfoRow {
                icon,
                label,
                value: value.clone(),
            })
        })
        .collect()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn normalize_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .collect()
}

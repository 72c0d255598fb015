use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::course::Course;
use crate::model::ids::ModuleId;

/// Module ids a visitor has marked done for one course.
///
/// Serialized as a JSON array of integers in ascending order. Parsing accepts
/// any order and collapses duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<ModuleId>);

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: ModuleId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` if the module is now completed.
    pub fn toggle(&mut self, id: ModuleId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.0.iter().copied()
    }

    /// Drop ids that are not modules of `course`, returning what was removed.
    pub fn retain_known(&mut self, course: &Course) -> Vec<ModuleId> {
        let unknown: Vec<ModuleId> = self
            .0
            .iter()
            .copied()
            .filter(|id| !course.has_module(*id))
            .collect();
        for id in &unknown {
            self.0.remove(id);
        }
        unknown
    }

    /// Encode as the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` for anything that is not an array of
    /// non-negative integers.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl FromIterator<ModuleId> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `round(100 * completed / total)`, half rounding up; `0` when `total` is 0.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let percent = (200 * completed + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

//! Listing-wide "at most one expanded course" state machine.

use chrono::{DateTime, Duration, Utc};

use crate::model::CourseId;

/// Requests arriving this soon after an accepted one are dropped.
pub const SELECT_COOLDOWN_MS: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded(CourseId),
}

impl ExpansionState {
    #[must_use]
    pub fn expanded(self) -> Option<CourseId> {
        match self {
            ExpansionState::Collapsed => None,
            ExpansionState::Expanded(id) => Some(id),
        }
    }
}

/// What happened to a `select` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Applied(ExpansionState),
    /// Arrived during the cooldown window; state unchanged.
    Dropped,
}

#[derive(Debug, Clone)]
pub struct ExpansionController {
    state: ExpansionState,
    cooldown: Duration,
    last_accepted_at: Option<DateTime<Utc>>,
}

impl Default for ExpansionController {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ExpansionState::Collapsed,
            cooldown: Duration::milliseconds(SELECT_COOLDOWN_MS),
            last_accepted_at: None,
        }
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    #[must_use]
    pub fn expanded(&self) -> Option<CourseId> {
        self.state.expanded()
    }

    #[must_use]
    pub fn is_expanded(&self, id: CourseId) -> bool {
        self.state == ExpansionState::Expanded(id)
    }

    #[must_use]
    pub fn in_cooldown(&self, now: DateTime<Utc>) -> bool {
        match self.last_accepted_at {
            // A clock that moved backwards never locks the controller.
            Some(last) => {
                let elapsed = now.signed_duration_since(last);
                elapsed >= Duration::zero() && elapsed < self.cooldown
            }
            None => false,
        }
    }

    /// Expand `id`, or collapse it if it is the expanded course.
    pub fn select(&mut self, id: CourseId, now: DateTime<Utc>) -> SelectOutcome {
        if self.in_cooldown(now) {
            return SelectOutcome::Dropped;
        }
        self.last_accepted_at = Some(now);
        self.state = if self.is_expanded(id) {
            ExpansionState::Collapsed
        } else {
            ExpansionState::Expanded(id)
        };
        SelectOutcome::Applied(self.state)
    }
}

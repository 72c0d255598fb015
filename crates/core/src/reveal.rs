//! Staggered reveal of list rows.
//!
//! `RevealSchedule` answers "when does row `i` appear"; `RevealState` holds
//! the per-row flags and a generation counter so that a reveal scheduled
//! before the container was hidden can never land afterwards.

use std::time::Duration;

/// Delay between two consecutive rows.
pub const ROW_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEntry {
    pub index: usize,
    pub offset: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    rows: usize,
    delay: Duration,
}

impl RevealSchedule {
    #[must_use]
    pub fn new(rows: usize, delay: Duration) -> Self {
        Self { rows, delay }
    }

    #[must_use]
    pub fn for_rows(rows: usize) -> Self {
        Self::new(rows, ROW_DELAY)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Offset of row `index` from the moment the container became visible.
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<Duration> {
        if index >= self.rows {
            return None;
        }
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        Some(self.delay.saturating_mul(factor))
    }

    /// `(index, offset)` pairs in reveal order.
    pub fn entries(&self) -> impl Iterator<Item = RevealEntry> + '_ {
        (0..self.rows).filter_map(|index| {
            self.offset(index)
                .map(|offset| RevealEntry { index, offset })
        })
    }

    /// How many rows are due after `elapsed` has passed.
    #[must_use]
    pub fn due_count(&self, elapsed: Duration) -> usize {
        if self.rows == 0 {
            return 0;
        }
        if self.delay.is_zero() {
            return self.rows;
        }
        let steps = elapsed.as_nanos() / self.delay.as_nanos();
        usize::try_from(steps)
            .map_or(self.rows, |steps| steps.saturating_add(1))
            .min(self.rows)
    }
}

/// Token identifying one visibility period of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGeneration(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    schedule: RevealSchedule,
    revealed: Vec<bool>,
    visible: bool,
    generation: u64,
}

impl RevealState {
    #[must_use]
    pub fn new(schedule: RevealSchedule) -> Self {
        Self {
            revealed: vec![false; schedule.rows()],
            schedule,
            visible: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn schedule(&self) -> RevealSchedule {
        self.schedule
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }

    /// The container became visible. Rows stay hidden until revealed.
    pub fn show(&mut self) -> RevealGeneration {
        if !self.visible {
            self.visible = true;
            self.generation += 1;
        }
        RevealGeneration(self.generation)
    }

    /// The container was hidden: every row goes back at once and any
    /// outstanding generation becomes stale.
    pub fn hide(&mut self) {
        self.visible = false;
        self.generation += 1;
        self.revealed.iter_mut().for_each(|flag| *flag = false);
    }

    /// Reveal every row due at `elapsed`. Stale generations are ignored.
    ///
    /// Returns the number of rows newly revealed.
    pub fn advance(&mut self, generation: RevealGeneration, elapsed: Duration) -> usize {
        if !self.visible || generation.0 != self.generation {
            return 0;
        }
        let due = self.schedule.due_count(elapsed);
        let mut newly = 0;
        for flag in self.revealed.iter_mut().take(due) {
            if !*flag {
                *flag = true;
                newly += 1;
            }
        }
        newly
    }
}

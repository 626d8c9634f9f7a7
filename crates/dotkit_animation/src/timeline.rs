//! Timeline orchestration for running tweens
//!
//! The timeline owns a clock that only moves when [`Timeline::tick`] is
//! called. Each tween is stamped with the clock time at which it was
//! added, and its pose is sampled relative to that.
//!
//! The clock is kept in f64 and each entry's elapsed time is folded back
//! into its tween's loop span before sampling, so frame-sized ticks keep
//! moving looping tweens however long the timeline runs.

use slotmap::{new_key_type, SlotMap};

use crate::pose::Pose;
use crate::tween::Tween;

new_key_type! {
    pub struct TimelineEntryId;
}

/// An entry in a timeline
struct TimelineEntry {
    tween: Tween,
    /// Clock time (seconds) at which the tween started
    started_at: f64,
}

/// A set of tweens advanced by a shared clock
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, TimelineEntry>,
    current_time: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            current_time: 0.0,
        }
    }

    /// Start a tween at the current clock time
    pub fn add(&mut self, tween: Tween) -> TimelineEntryId {
        let id = self.entries.insert(TimelineEntry {
            tween,
            started_at: self.current_time,
        });
        tracing::trace!(
            ?id,
            started_at = self.current_time,
            delay = tween.delay_secs(),
            "timeline entry added"
        );
        id
    }

    /// Remove a tween; its id stops resolving
    pub fn remove(&mut self, id: TimelineEntryId) -> Option<Tween> {
        let removed = self.entries.remove(id).map(|entry| entry.tween);
        if removed.is_some() {
            tracing::trace!(?id, "timeline entry removed");
        }
        removed
    }

    /// Remove every tween
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: TimelineEntryId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current clock time in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Advance the clock by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if dt > 0.0 {
            self.current_time += dt as f64;
        }
    }

    /// Seconds the entry has been running
    pub fn elapsed(&self, id: TimelineEntryId) -> Option<f64> {
        let entry = self.entries.get(id)?;
        Some(self.current_time - entry.started_at)
    }

    /// Get the current pose for an entry
    pub fn value(&self, id: TimelineEntryId) -> Option<Pose> {
        let entry = self.entries.get(id)?;
        let elapsed = self.current_time - entry.started_at;
        Some(entry.tween.sample(entry.tween.fold_elapsed(elapsed)))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

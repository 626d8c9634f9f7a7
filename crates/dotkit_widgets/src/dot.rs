//! A single dot in a row

use dotkit_animation::{TimelineEntryId, Tween};

use crate::widget::WidgetId;

/// One dot, its looping tween, and its lifecycle state.
///
/// `entered` starts false and flips to true the first time the dot
/// appears. It is never reset; a fresh row is built instead.
#[derive(Debug)]
pub struct Dot {
    id: WidgetId,
    index: usize,
    /// Rest → active tween, resolved once when the row is built
    tween: Tween,
    entered: bool,
    /// Running tween, once entered and until torn down
    entry: Option<TimelineEntryId>,
}

impl Dot {
    pub fn new(index: usize, tween: Tween) -> Self {
        Self {
            id: WidgetId::next(),
            index,
            tween,
            entered: false,
            entry: None,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Flip the entered flag. Returns true only on the first call.
    pub fn enter(&mut self) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn entry(&self) -> Option<TimelineEntryId> {
        self.entry
    }

    pub(crate) fn attach(&mut self, entry: TimelineEntryId) {
        self.entry = Some(entry);
    }

    pub(crate) fn detach(&mut self) -> Option<TimelineEntryId> {
        self.entry.take()
    }
}

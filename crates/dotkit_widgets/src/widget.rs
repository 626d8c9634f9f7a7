//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use dotkit_core::{Event, Layer};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique widget identifier, matched against [`Event::target`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Allocate a process-unique id
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Render the widget into a layer tree. Must not change widget state.
    fn render(&self) -> Layer;

    /// Handle a lifecycle event
    fn handle_event(&mut self, event: &Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert_eq!(WidgetId(a.raw()), a);
    }
}

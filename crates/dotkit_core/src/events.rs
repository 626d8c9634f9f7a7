//! Lifecycle events
//!
//! Hosts tell widgets when they (or their parts) are mounted, become
//! visible, and are torn down.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
    /// Element became visible for the first time since mounting
    pub const APPEAR: EventType = 62;
}

/// A lifecycle event addressed to a widget
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
}

impl Event {
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self { event_type, target }
    }

    pub fn mount(target: u64) -> Self {
        Self::new(event_types::MOUNT, target)
    }

    pub fn appear(target: u64) -> Self {
        Self::new(event_types::APPEAR, target)
    }

    pub fn unmount(target: u64) -> Self {
        Self::new(event_types::UNMOUNT, target)
    }
}

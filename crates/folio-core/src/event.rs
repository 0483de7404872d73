#![forbid(unsafe_code)]

//! Canonical host event types.
//!
//! The host (a browser shim, a test harness, a replay file) translates its
//! native input into these values and hands them to the dock.
//!
//! # Design Notes
//!
//! - Pointer coordinates are viewport pixels, the same space as
//!   [`Rect`](crate::geometry::Rect) values from the geometry host.
//! - `Scroll` carries no offset; listeners read the live offset from the
//!   layout host, the way a scroll handler reads `window.scrollY`.
//! - Pointer events are scoped to the dock element: the host only delivers
//!   `PointerMove` while the pointer is over the dock, followed by exactly
//!   one `PointerLeave` when it exits.

/// Canonical host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The document scrolled.
    Scroll,

    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f64,
        /// New viewport height in pixels.
        height: f64,
    },

    /// Pointer moved inside the dock.
    PointerMove {
        /// Viewport x coordinate.
        x: f64,
        /// Viewport y coordinate.
        y: f64,
    },

    /// Pointer left the dock's bounding region.
    PointerLeave,

    /// A dock entry was clicked or otherwise activated.
    Activate {
        /// Id of the activated entry.
        target: String,
    },
}

impl Event {
    /// The listener bucket this event is dispatched to.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Scroll => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerLeave => EventKind::PointerLeave,
            Self::Activate { .. } => EventKind::Activate,
        }
    }
}

/// Discriminant of [`Event`], used to register listeners per event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    PointerMove,
    PointerLeave,
    Activate,
}

impl EventKind {
    /// Stable lowercase name, matching the host's wire format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::PointerMove => "pointer_move",
            Self::PointerLeave => "pointer_leave",
            Self::Activate => "activate",
        }
    }
}

/// Whether the host should still run its default action for an event
/// (for an anchor click: follow the link).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultAction {
    /// Let the host perform its default behavior.
    #[default]
    Allow,
    /// The handler took care of the event; suppress the default.
    Prevent,
}

impl DefaultAction {
    /// Combine two handler verdicts: any `Prevent` wins.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Allow, Self::Allow) => Self::Allow,
            _ => Self::Prevent,
        }
    }

    #[must_use]
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Event::Scroll.kind(), EventKind::Scroll);
        assert_eq!(Event::PointerLeave.kind(), EventKind::PointerLeave);
        assert_eq!(
            Event::PointerMove { x: 1.0, y: 2.0 }.kind(),
            EventKind::PointerMove
        );
        assert_eq!(
            Event::Activate {
                target: "home".into()
            }
            .kind(),
            EventKind::Activate
        );
        assert_eq!(EventKind::PointerMove.as_str(), "pointer_move");
    }

    #[test]
    fn prevent_wins_merge() {
        assert_eq!(
            DefaultAction::Allow.merge(DefaultAction::Allow),
            DefaultAction::Allow
        );
        assert!(DefaultAction::Allow.merge(DefaultAction::Prevent).is_prevented());
        assert!(DefaultAction::Prevent.merge(DefaultAction::Allow).is_prevented());
    }
}

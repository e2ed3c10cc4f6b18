//! Gesture state machine - explicit per-instance interaction state.
//!
//! A single enum replaces scattered boolean flags, making impossible states
//! unrepresentable: there is no "moved but never started" and no stale start
//! position outliving its gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle   -> Active(not-moved)   (touch-start accepted by arbiter + capture)
//! Active(not-moved) -> Active(moved)
//!                               (touch-move past time or distance threshold)
//! Active -> Idle                (touch-end, touch-cancel, or long-press fire)
//! ```

use crate::types::{Contact, Point, TouchEvent};
use std::time::Duration;

/// Per-instance gesture state.
///
/// `Active` carries everything recorded at touch-start plus the most recent
/// contact, so the long-press path can finish the gesture at the last known
/// position without a closing touch event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in flight.
    #[default]
    Idle,

    /// A single contact is being tracked.
    Active {
        /// Timestamp of the touch-start event.
        start_time: Duration,
        /// Client position at touch-start, for displacement thresholds.
        start: Point,
        /// True once the gesture crossed a drag threshold; a moved gesture
        /// emits no `click` or `contextmenu` at end.
        moved: bool,
        /// Most recent contact data, updated on every touch-move.
        contact: Contact,
    },
}

impl GestureState {
    /// Enter `Active` from a touch-start event.
    pub fn begin(event: &TouchEvent) -> Self {
        Self::Active {
            start_time: event.timestamp,
            start: event.contact.client,
            moved: false,
            contact: event.contact,
        }
    }

    /// Returns true if no gesture is in flight.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in flight.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Returns true if the active gesture crossed a drag threshold.
    pub fn has_moved(&self) -> bool {
        matches!(self, Self::Active { moved: true, .. })
    }

    /// Client position recorded at touch-start, if active.
    pub fn start_position(&self) -> Option<Point> {
        match self {
            Self::Active { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Most recent contact, if active.
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Active { contact, .. } => Some(contact),
            _ => None,
        }
    }

    /// Reset to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

//! Touch end handling - gesture completion and flag release.
//!
//! Three paths converge here: an explicit touch-end, a touch-cancel (treated
//! the same so an interrupted contact can never leave the arbiter locked),
//! and the long-press timer firing through [`TouchTranslator::poll`]. All of
//! them release the arbiter unconditionally.

use super::{GestureState, TouchTranslator};
use crate::synth::{EventSink, synthesize};
use crate::types::{Disposition, PointerEventKind, TouchEvent};
use std::time::Duration;
use tracing::debug;

impl TouchTranslator {
    /// Handle a touch-end for the tracked contact.
    ///
    /// Ignored unless this instance holds the gesture. Synthesizes `up` then
    /// `out` (a mouse leaves the element when the press ends), plus a `click`
    /// when the gesture never crossed a drag threshold. Cancels the pending
    /// long-press timer and releases the arbiter.
    pub fn on_touch_end(&mut self, event: &TouchEvent, sink: &mut dyn EventSink) -> Disposition {
        if !self.arbiter.is_held_by(self.id) || !self.state.is_active() {
            return Disposition::Ignored;
        }

        // End events carry the contact's final coordinates; the target stays
        // the element the contact started on.
        if let GestureState::Active { contact, .. } = &mut self.state {
            contact.screen = event.contact.screen;
            contact.client = event.contact.client;
        }

        self.finish_gesture(event.active_contacts, false, sink)
    }

    /// Handle a touch-cancel (contact taken over by the system).
    ///
    /// Runs the touch-end path: the completion event for an unmoved gesture
    /// still fires, and the arbiter is released so the interruption cannot
    /// lock out every other instance.
    pub fn on_touch_cancel(&mut self, event: &TouchEvent, sink: &mut dyn EventSink) -> Disposition {
        self.on_touch_end(event, sink)
    }

    /// Drive the long-press timer.
    ///
    /// Hosts call this when the wakeup scheduled for
    /// [`TouchTranslator::long_press_deadline`] arrives. If the deadline has
    /// passed while the gesture is still unmoved, the gesture completes as a
    /// long-tap (`contextmenu` instead of `click`) with no touch-end
    /// required; returns true in that case. A due timer on a moved gesture
    /// disarms with no effect.
    pub fn poll(&mut self, now: Duration, sink: &mut dyn EventSink) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        if !self.arbiter.is_held_by(self.id) || self.state.has_moved() {
            return false;
        }
        if !self.state.is_active() {
            return false;
        }

        debug!(id = self.id.0, "long-press deadline reached");
        self.finish_gesture(1, true, sink);
        true
    }

    /// Shared end-of-gesture path for touch-end, touch-cancel, and the
    /// long-press fire. The only place the arbiter is released during normal
    /// operation, and it releases unconditionally.
    fn finish_gesture(
        &mut self,
        active_contacts: usize,
        long_tap: bool,
        sink: &mut dyn EventSink,
    ) -> Disposition {
        let state = std::mem::take(&mut self.state);
        let GestureState::Active { moved, contact, .. } = state else {
            // Callers check is_active first.
            self.timer.cancel();
            self.arbiter.release(self.id);
            return Disposition::Ignored;
        };

        let disposition = synthesize(&contact, active_contacts, PointerEventKind::Up, sink);
        synthesize(&contact, active_contacts, PointerEventKind::Out, sink);

        if !moved {
            let completion = if long_tap {
                PointerEventKind::ContextMenu
            } else {
                PointerEventKind::Click
            };
            synthesize(&contact, active_contacts, completion, sink);
        }

        self.timer.cancel();
        self.arbiter.release(self.id);
        debug!(id = self.id.0, moved, long_tap, "gesture finished");

        disposition
    }
}

//! Touch move handling - drag classification and move synthesis.
//!
//! Touch move arrives at display rate during a drag, so the handler does the
//! minimum: one threshold check while still unclassified, one contact update,
//! one synthesized `move`.

use super::{GestureState, TouchTranslator};
use crate::synth::{EventSink, synthesize};
use crate::types::{Disposition, PointerEventKind, TouchEvent};
use tracing::debug;

impl TouchTranslator {
    /// Handle a touch-move for the tracked contact.
    ///
    /// Ignored unless this instance holds the gesture. Marks the gesture as
    /// moved once elapsed time exceeds the drag-ignore time or displacement
    /// on either axis exceeds the drag-ignore distance, separating a
    /// deliberate drag from a stationary tap whose coordinates jitter. A
    /// `move` is synthesized regardless of classification.
    pub fn on_touch_move(&mut self, event: &TouchEvent, sink: &mut dyn EventSink) -> Disposition {
        if !self.arbiter.is_held_by(self.id) {
            return Disposition::Ignored;
        }
        let GestureState::Active {
            start_time,
            start,
            moved,
            contact,
        } = &mut self.state
        else {
            return Disposition::Ignored;
        };

        if !*moved {
            let held = event.timestamp.saturating_sub(*start_time);
            let dx = (event.contact.client.x - start.x).abs();
            let dy = (event.contact.client.y - start.y).abs();
            if held > self.config.drag_ignore_time()
                || dx > self.config.drag_ignore_distance
                || dy > self.config.drag_ignore_distance
            {
                *moved = true;
                debug!(
                    id = self.id.0,
                    held_ms = held.as_millis() as u64,
                    dx,
                    dy,
                    "gesture classified as drag"
                );
            }
        }

        // Positions track the finger; the target stays the element the
        // contact started on, like a captured mouse.
        contact.screen = event.contact.screen;
        contact.client = event.contact.client;
        let contact = *contact;

        synthesize(&contact, event.active_contacts, PointerEventKind::Move, sink)
    }
}

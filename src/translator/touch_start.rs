//! Touch start handling - gesture acquisition and the over/move/down burst.

use super::{GestureState, TouchTranslator};
use crate::synth::{EventSink, synthesize};
use crate::types::{Disposition, PointerEventKind, TouchEvent};
use tracing::debug;

impl TouchTranslator {
    /// Handle a touch-start on this instance's root element.
    ///
    /// The gesture begins only if no instance currently holds the arbiter and
    /// the capture predicate accepts the contact; otherwise the event is
    /// ignored entirely (not queued). On success, synthesizes `over`, `move`,
    /// `down` in that strict order (widgets expecting hover-before-drag must
    /// see `over` first) and arms the long-press timer.
    pub fn on_touch_start(&mut self, event: &TouchEvent, sink: &mut dyn EventSink) -> Disposition {
        if !self.arbiter.try_acquire(self.id) {
            debug!(
                id = self.id.0,
                holder = ?self.arbiter.holder(),
                "touch-start ignored, gesture already owned"
            );
            return Disposition::Ignored;
        }

        if !(self.capture)(&event.contact) {
            self.arbiter.release(self.id);
            debug!(id = self.id.0, "touch-start rejected by capture predicate");
            return Disposition::Ignored;
        }

        self.state = GestureState::begin(event);
        debug!(
            id = self.id.0,
            x = event.contact.client.x,
            y = event.contact.client.y,
            "gesture started"
        );

        let contacts = event.active_contacts;
        synthesize(&event.contact, contacts, PointerEventKind::Over, sink);
        synthesize(&event.contact, contacts, PointerEventKind::Move, sink);
        let disposition = synthesize(&event.contact, contacts, PointerEventKind::Down, sink);

        self.timer.arm(event.timestamp + self.config.long_press_time());

        disposition
    }
}

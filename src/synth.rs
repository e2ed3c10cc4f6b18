//! Pointer event synthesis.
//!
//! Turns one touch contact into one mouse-style pointer event and pushes it
//! through the host's [`EventSink`]. Downstream listeners cannot tell the
//! result apart from a native pointer event of the same kind: same target,
//! same screen coordinates, scroll-compensated client coordinates, primary
//! button, bubbling and cancelable.

use crate::types::{
    Contact, Disposition, Point, PointerButton, PointerEvent, PointerEventKind,
};
use tracing::trace;

/// Where synthesized pointer events go.
///
/// Implemented by the host over its native event-dispatch mechanism; the
/// translator only ever talks to this trait. `scroll_offset` is read at
/// dispatch time so client coordinates stay correct when the page scrolls
/// mid-gesture.
pub trait EventSink {
    /// Dispatch one synthesized pointer event to its target element.
    fn dispatch(&mut self, event: PointerEvent);

    /// Current scroll offset of the viewport.
    fn scroll_offset(&self) -> Point {
        Point::ZERO
    }
}

/// Synthesize and dispatch one pointer event for `contact`.
///
/// Returns the disposition the host should apply to the originating touch
/// event: [`Disposition::AllowDefault`] when the contact started on a
/// text-entry element (native focus/cursor behavior must survive),
/// [`Disposition::SuppressDefault`] otherwise.
///
/// With more than one active contact this is a no-op returning
/// [`Disposition::Ignored`]: multi-touch input is intentionally unsupported,
/// and skipping synthesis (rather than failing) is the documented behavior.
pub fn synthesize(
    contact: &Contact,
    active_contacts: usize,
    kind: PointerEventKind,
    sink: &mut dyn EventSink,
) -> Disposition {
    if active_contacts > 1 {
        return Disposition::Ignored;
    }

    let scroll = sink.scroll_offset();
    let event = PointerEvent {
        kind,
        target: contact.target,
        screen: contact.screen,
        client: Point::new(contact.client.x + scroll.x, contact.client.y + scroll.y),
        button: PointerButton::Primary,
        bubbles: true,
        cancelable: true,
    };

    trace!(target_id = contact.target.id, %event, "synthesized pointer event");
    sink.dispatch(event);

    disposition_for(contact)
}

/// Disposition for the originating touch event of `contact`.
fn disposition_for(contact: &Contact) -> Disposition {
    if contact.target.kind.is_text_entry() {
        Disposition::AllowDefault
    } else {
        Disposition::SuppressDefault
    }
}

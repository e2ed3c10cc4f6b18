//! Widget attachment wiring.
//!
//! Installation is composition, not patching: the host's widget lifecycle
//! calls [`TouchTranslator::attach`] from its init hook and drops (or
//! explicitly detaches) the result from its destroy hook. Attachment is gated
//! on the host-reported touch capability: on a mouse-only environment the
//! translator never installs and the widget behaves exactly as before.

use crate::translator::TouchTranslator;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// What the host environment reports about touch support.
///
/// The crate consumes this; it never probes the environment itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchCapability {
    /// Touch events are delivered at all. False means attach is a no-op.
    pub touch_events: bool,
    /// The environment routes touch through a legacy touch-input pointer
    /// implementation that needs native gesture handling disabled on the
    /// element (the touch-action hint below).
    pub legacy_pointer: bool,
}

/// CSS touch-action value the host should apply to the widget's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// Disable the environment's native gesture handling for the element.
    None,
}

/// Element-level setup the host applies after a successful attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementSetup {
    /// Set when the legacy pointer environment would otherwise let native
    /// panning and zooming compete with the simulated drag.
    pub touch_action: Option<TouchAction>,
}

/// A translator installed on a widget's root element.
///
/// Dereferences to the inner [`TouchTranslator`] so the host's touch handlers
/// call straight through. Dropping it detaches: the pending long-press timer
/// is canceled and the gesture arbiter is released if held, so a destroyed
/// widget can never lock out the others.
pub struct AttachedTranslator {
    translator: TouchTranslator,
    setup: ElementSetup,
}

impl TouchTranslator {
    /// Install this translator, gated on the environment's touch capability.
    ///
    /// Returns `None` when touch events are unsupported, the no-op
    /// activation required of a mouse-only environment. The returned
    /// [`ElementSetup`] tells the host what to apply to the element.
    pub fn attach(self, capability: TouchCapability) -> Option<AttachedTranslator> {
        if !capability.touch_events {
            debug!(id = self.id().0, "touch unsupported, translator not installed");
            return None;
        }

        let setup = ElementSetup {
            touch_action: capability.legacy_pointer.then_some(TouchAction::None),
        };
        debug!(id = self.id().0, ?setup, "translator attached");

        Some(AttachedTranslator {
            translator: self,
            setup,
        })
    }
}

impl AttachedTranslator {
    /// Element setup the host must apply to the widget's root element.
    pub fn setup(&self) -> ElementSetup {
        self.setup
    }

    /// Detach explicitly. Equivalent to dropping, spelled out for hosts
    /// whose destroy hook wants the teardown visible.
    pub fn detach(self) {
        // Drop does the work: cancel the timer, release the arbiter.
    }
}

impl Deref for AttachedTranslator {
    type Target = TouchTranslator;

    fn deref(&self) -> &TouchTranslator {
        &self.translator
    }
}

impl DerefMut for AttachedTranslator {
    fn deref_mut(&mut self) -> &mut TouchTranslator {
        &mut self.translator
    }
}

impl Drop for AttachedTranslator {
    fn drop(&mut self) {
        self.translator.detach();
    }
}

//! Touch-to-pointer gesture translation.
//!
//! This module implements the per-widget-instance state machine that turns
//! raw touch phases into mouse-style pointer event sequences.
//!
//! ## Architecture
//!
//! The translator uses an explicit state machine (`GestureState`) to track
//! the current gesture, a cancelable long-press deadline, and a shared
//! [`GestureArbiter`] so only one widget instance translates touch at a time.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `touch_start` - Touch start handling (exclusivity, capture, over/move/down)
//! - `touch_move` - Touch move handling (drag classification, move synthesis)
//! - `touch_end` - Touch end/cancel handling (up/out/click, flag release)
//! - `timer` - Cancelable long-press deadline
//!
//! ## Event sequences
//!
//! ```text
//! tap        -> over, move, down, up, out, click
//! drag       -> over, move, down, move*, up, out
//! long-press -> over, move, down, up, out, contextmenu
//! ```

mod state;
mod timer;
mod touch_end;
mod touch_move;
mod touch_start;

pub use state::GestureState;
pub use timer::LongPressTimer;

use crate::arbiter::GestureArbiter;
use crate::config::GestureConfig;
use crate::synth::EventSink;
use crate::types::{Contact, Disposition, TouchEvent, TouchPhase, TranslatorId};
use std::sync::Arc;
use std::time::Duration;

/// Hook consulted on touch-start: does this widget instance accept the
/// contact? Stands in for the host widget's own capture decision.
pub type CapturePredicate = Box<dyn Fn(&Contact) -> bool + Send>;

/// Translates raw touch events on one widget's root element into synthesized
/// pointer events.
///
/// One translator per widget instance; instances coordinate through a shared
/// [`GestureArbiter`]. All methods are driven from the host's single
/// event-dispatch thread.
///
/// # Example
/// ```ignore
/// let mut translator = TouchTranslator::new(TranslatorId(1))
///     .with_capture(Box::new(|contact| widget.accepts(contact)));
///
/// // pumped by the host for every raw touch event on the element:
/// let disposition = translator.handle(&event, &mut sink);
/// // pumped by the host timer wakeup:
/// translator.poll(now, &mut sink);
/// ```
pub struct TouchTranslator {
    id: TranslatorId,
    arbiter: Arc<GestureArbiter>,
    config: GestureConfig,
    state: GestureState,
    timer: LongPressTimer,
    capture: CapturePredicate,
}

impl TouchTranslator {
    /// Create a translator on the process-wide arbiter with default
    /// thresholds and an accept-all capture predicate.
    pub fn new(id: TranslatorId) -> Self {
        Self::with_arbiter(id, GestureArbiter::global())
    }

    /// Create a translator coordinating through an explicit arbiter.
    pub fn with_arbiter(id: TranslatorId, arbiter: Arc<GestureArbiter>) -> Self {
        Self {
            id,
            arbiter,
            config: GestureConfig::default(),
            state: GestureState::Idle,
            timer: LongPressTimer::default(),
            capture: Box::new(|_| true),
        }
    }

    /// Replace the gesture thresholds.
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the widget's capture decision hook.
    pub fn with_capture(mut self, capture: CapturePredicate) -> Self {
        self.capture = capture;
        self
    }

    /// Route one raw touch event to its phase handler.
    pub fn handle(&mut self, event: &TouchEvent, sink: &mut dyn EventSink) -> Disposition {
        match event.phase {
            TouchPhase::Start => self.on_touch_start(event, sink),
            TouchPhase::Move => self.on_touch_move(event, sink),
            TouchPhase::End => self.on_touch_end(event, sink),
            TouchPhase::Cancel => self.on_touch_cancel(event, sink),
        }
    }

    /// The instance id this translator registered with the arbiter.
    pub fn id(&self) -> TranslatorId {
        self.id
    }

    /// Current gesture state, for host diagnostics and tests.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Deadline of the pending long-press timer, if armed.
    ///
    /// Hosts use this to schedule the wakeup that drives [`Self::poll`].
    pub fn long_press_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// Tear down this instance's touch handling.
    ///
    /// Cancels any pending long-press timer and, if this instance holds the
    /// gesture, releases it; a detached instance must never block other
    /// widgets from translating touch.
    pub fn detach(&mut self) {
        self.timer.cancel();
        self.arbiter.release(self.id);
        self.state = GestureState::Idle;
    }
}

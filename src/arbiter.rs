//! Cross-instance gesture ownership.
//!
//! Only one translator instance may translate touch input at a time: while a
//! gesture is in flight on one widget, touch-starts on every other widget are
//! ignored outright (not queued). The [`GestureArbiter`] makes that shared
//! flag an explicit object handed to each translator at construction, so
//! ownership is visible in signatures and testable in isolation.
//!
//! Hosts that want the classic one-flag-per-process behavior share
//! [`GestureArbiter::global`]; tests and multi-surface hosts construct their
//! own.

use crate::types::TranslatorId;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;

static GLOBAL: Lazy<Arc<GestureArbiter>> = Lazy::new(|| Arc::new(GestureArbiter::new()));

/// Decides which translator instance currently owns the gesture.
///
/// All calls happen on the host's single event-dispatch thread; the mutex is
/// there because the arbiter is shared through `Arc` across translators, not
/// because callbacks overlap.
#[derive(Debug, Default)]
pub struct GestureArbiter {
    holder: Mutex<Option<TranslatorId>>,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self {
            holder: Mutex::new(None),
        }
    }

    /// The process-wide arbiter shared by default-constructed translators.
    pub fn global() -> Arc<GestureArbiter> {
        GLOBAL.clone()
    }

    /// Try to take gesture ownership for `owner`.
    ///
    /// Fails while any instance holds the gesture, including `owner` itself,
    /// so a second touch-start mid-gesture on the same widget is ignored like
    /// any other contender.
    pub fn try_acquire(&self, owner: TranslatorId) -> bool {
        let mut holder = self.holder.lock();
        if holder.is_some() {
            return false;
        }
        *holder = Some(owner);
        true
    }

    /// Release ownership if `owner` holds it. Idempotent; a release by a
    /// non-holder is a no-op.
    pub fn release(&self, owner: TranslatorId) {
        let mut holder = self.holder.lock();
        if *holder == Some(owner) {
            *holder = None;
        }
    }

    /// Returns true if `owner` currently holds the gesture.
    pub fn is_held_by(&self, owner: TranslatorId) -> bool {
        *self.holder.lock() == Some(owner)
    }

    /// The current holder, if any.
    pub fn holder(&self) -> Option<TranslatorId> {
        *self.holder.lock()
    }
}

//! Cancelable long-press deadline.
//!
//! The only asynchronous suspension point in the pipeline. The translator
//! arms a deadline on touch-start; the host schedules a wakeup for it (see
//! [`TouchTranslator::long_press_deadline`]) and drives it through
//! [`TouchTranslator::poll`]. Cancellation is synchronous and idempotent.
//!
//! [`TouchTranslator::long_press_deadline`]: super::TouchTranslator::long_press_deadline
//! [`TouchTranslator::poll`]: super::TouchTranslator::poll

use std::time::Duration;

/// One-shot deadline owned by a translator instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongPressTimer {
    deadline: Option<Duration>,
}

impl LongPressTimer {
    /// Arm (or re-arm) the timer for `deadline`.
    pub fn arm(&mut self, deadline: Duration) {
        self.deadline = Some(deadline);
    }

    /// Disarm the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true if a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Disarm and report true if the deadline has passed at `now`.
    ///
    /// Fires at most once per arm; a timer observed due is consumed even if
    /// the caller then decides the gesture no longer qualifies.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

//! Crate-wide constants.
//!
//! Centralizes the gesture classification thresholds so the translation
//! pipeline stays free of magic numbers. [`GestureConfig`] picks up its
//! defaults from here.
//!
//! [`GestureConfig`]: crate::config::GestureConfig

// ============================================================================
// Gesture Classification Thresholds
// ============================================================================

/// A press shorter than this counts as a tap unless the contact also moved.
///
/// Once a contact has been held longer, any touch-move marks the gesture as a
/// drag even if the finger barely moved.
pub const DRAG_IGNORE_TIME_MS: u64 = 150;

/// Per-axis displacement below which movement is treated as finger jitter.
///
/// Crossing this on either axis marks the gesture as a drag regardless of how
/// little time has passed.
pub const DRAG_IGNORE_DISTANCE: f32 = 5.0;

/// Hold duration after which a stationary contact becomes a long-press.
///
/// The long-press fires a synthetic end-of-gesture that emits `contextmenu`
/// instead of `click`.
pub const LONG_PRESS_TIME_MS: u64 = 750;

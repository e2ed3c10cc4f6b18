//! Touchbridge - single-finger touch input translated into mouse-style
//! pointer event sequences.
//!
//! Pointer-oriented widgets (draggable, sortable, resizable, selectable
//! controls) that only understand pointer-down/move/up/click semantics work
//! unmodified on touch devices: the translator watches raw touch events on a
//! widget's root element, classifies the contact as a tap, long-press, or
//! drag, and synthesizes the ordered pointer event sequence a real mouse
//! would have produced.
//!
//! ## Architecture
//!
//! - `types` - Contacts, elements, raw touch events, synthesized pointer events
//! - `constants` - Gesture classification thresholds
//! - `config` - Tunable thresholds with JSON loading and validation
//! - `synth` - Event synthesizer and the host-facing `EventSink` trait
//! - `arbiter` - Cross-instance gesture ownership
//! - `translator` - The per-instance gesture state machine
//! - `attach` - Capability-gated installation onto a widget lifecycle
//!
//! ## Event flow
//!
//! ```text
//! raw touch event -> TouchTranslator (classify phase, update state)
//!                 -> synth::synthesize (emit pointer events via EventSink)
//!                 -> host widget's existing pointer handlers
//! ```

pub mod arbiter;
pub mod attach;
pub mod config;
pub mod constants;
pub mod synth;
pub mod translator;
pub mod types;

pub use arbiter::GestureArbiter;
pub use attach::{AttachedTranslator, ElementSetup, TouchAction, TouchCapability};
pub use config::{ConfigError, GestureConfig};
pub use synth::EventSink;
pub use translator::{GestureState, TouchTranslator};
pub use types::{
    Contact, ContactId, Disposition, ElementKind, Point, PointerButton, PointerEvent,
    PointerEventKind, TargetElement, TouchEvent, TouchPhase, TranslatorId,
};

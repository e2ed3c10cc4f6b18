//! Core types shared across the touch translation pipeline.
//!
//! Everything the host environment hands us (contacts, elements, raw touch
//! events) and everything we hand back (synthesized pointer events,
//! dispositions) is a plain value type defined here. The host's event
//! dispatch machinery stays behind the [`EventSink`] trait in `synth`.
//!
//! [`EventSink`]: crate::synth::EventSink

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Opaque identifier of one touch contact, stable for the contact's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u64);

/// Identifier of one translator instance (one per widget root element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatorId(pub u64);

/// What kind of element a contact landed on.
///
/// Only text-entry elements get special treatment: the originating touch
/// event's default action is left alone so native focus and cursor placement
/// still work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Any non-text-entry element.
    Generic,
    /// Single-line text input.
    TextInput,
    /// Multi-line text area.
    TextArea,
}

impl ElementKind {
    /// Returns true for elements that accept text entry.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// The element a contact started on.
///
/// Synthesized pointer events are always dispatched to this element, never to
/// whatever is currently under the pointer, mirroring a mouse that stays
/// captured by the element it was pressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetElement {
    pub id: u64,
    pub kind: ElementKind,
}

impl TargetElement {
    pub fn new(id: u64, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    /// A generic (non-text-entry) element.
    pub fn generic(id: u64) -> Self {
        Self::new(id, ElementKind::Generic)
    }
}

/// One active touch point.
///
/// Created on touch-start, updated on touch-move, dropped on touch-end or
/// touch-cancel. `screen` and `client` are the contact's current positions;
/// the start position lives in the translator's gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    /// Element the contact started on.
    pub target: TargetElement,
    /// Current position in screen coordinates.
    pub screen: Point,
    /// Current position in client (viewport) coordinates.
    pub client: Point,
}

/// Phase of a raw touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    /// Contact interrupted by the system (e.g. an OS gesture took over).
    Cancel,
}

/// A raw touch event as delivered by the host environment.
///
/// `timestamp` is a host-supplied monotonic offset from an arbitrary epoch;
/// the crate never reads a wall clock, which keeps tap/drag/long-press
/// classification deterministic under test.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// The contact that changed in this event.
    pub contact: Contact,
    /// Number of contacts currently on the surface. More than one disables
    /// synthesis entirely (multi-touch is unsupported).
    pub active_contacts: usize,
    pub timestamp: Duration,
}

/// Kind of synthesized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Over,
    Move,
    Down,
    Up,
    Out,
    Click,
    ContextMenu,
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Over => "over",
            Self::Move => "move",
            Self::Down => "down",
            Self::Up => "up",
            Self::Out => "out",
            Self::Click => "click",
            Self::ContextMenu => "contextmenu",
        };
        f.write_str(name)
    }
}

/// What the host should do with the originating touch event after the
/// translator has processed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Suppress the touch event's default action (native scroll/zoom would
    /// otherwise compete with the simulated drag).
    SuppressDefault,
    /// Leave the default action alone; the contact started on a text-entry
    /// element and native focus/cursor behavior should still run.
    AllowDefault,
    /// The event was not translated at all; the host proceeds as if no
    /// translator were attached.
    Ignored,
}

/// A synthesized mouse-style pointer event, ready for dispatch.
///
/// Ephemeral: it has no identity beyond a single dispatch through the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// The contact's original target element.
    pub target: TargetElement,
    /// Screen position, copied verbatim from the contact.
    pub screen: Point,
    /// Client position, scroll-compensated at dispatch time.
    pub client: Point,
    /// Always the primary button, like a plain left-click mouse.
    pub button: PointerButton,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl fmt::Display for PointerEvent {
    /// Compact `kind@x,y` form used in logs and test traces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.client)
    }
}

/// Mouse button carried by synthesized events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
}

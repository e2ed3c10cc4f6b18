//! Attachment wiring: capability gating, element setup, teardown on drop.

use crate::helpers::{RecordingSink, touch_start, translator};
use touchbridge::{TouchAction, TouchCapability};

#[test]
fn test_no_touch_support_means_no_installation() {
    let (translator, _arbiter) = translator();
    let capability = TouchCapability {
        touch_events: false,
        legacy_pointer: false,
    };

    assert!(translator.attach(capability).is_none());
}

#[test]
fn test_plain_touch_environment_needs_no_element_setup() {
    let (translator, _arbiter) = translator();
    let capability = TouchCapability {
        touch_events: true,
        legacy_pointer: false,
    };

    let attached = translator.attach(capability).unwrap();
    assert_eq!(attached.setup().touch_action, None);
}

#[test]
fn test_legacy_pointer_environment_disables_native_gestures() {
    let (translator, _arbiter) = translator();
    let capability = TouchCapability {
        touch_events: true,
        legacy_pointer: true,
    };

    let attached = translator.attach(capability).unwrap();
    assert_eq!(attached.setup().touch_action, Some(TouchAction::None));
}

#[test]
fn test_drop_mid_gesture_releases_ownership() {
    let (translator, arbiter) = translator();
    let capability = TouchCapability {
        touch_events: true,
        legacy_pointer: false,
    };

    let mut attached = translator.attach(capability).unwrap();
    let mut sink = RecordingSink::new();
    attached.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    assert!(arbiter.holder().is_some());

    drop(attached);
    assert_eq!(arbiter.holder(), None);
}

#[test]
fn test_explicit_detach_mid_gesture_releases_ownership() {
    let (translator, arbiter) = translator();
    let capability = TouchCapability {
        touch_events: true,
        legacy_pointer: false,
    };

    let mut attached = translator.attach(capability).unwrap();
    let mut sink = RecordingSink::new();
    attached.handle(&touch_start(100.0, 100.0, 0), &mut sink);

    attached.detach();
    assert_eq!(arbiter.holder(), None);
}

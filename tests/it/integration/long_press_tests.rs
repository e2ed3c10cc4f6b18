//! Long-press: a stationary hold completes itself with `contextmenu`.

use crate::helpers::{RecordingSink, touch_end, touch_move, touch_start, translator};
use touchbridge::PointerEventKind;
use std::time::Duration;

const MS: fn(u64) -> Duration = Duration::from_millis;

#[test]
fn test_long_press_fires_contextmenu_without_touch_end() {
    let (mut translator, arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    assert_eq!(translator.long_press_deadline(), Some(MS(750)));

    assert!(translator.poll(MS(750), &mut sink));

    insta::assert_snapshot!(
        sink.trace(),
        @"over@100,100 move@100,100 down@100,100 up@100,100 out@100,100 contextmenu@100,100"
    );
    assert_eq!(arbiter.holder(), None);
    assert!(translator.state().is_idle());
}

#[test]
fn test_poll_before_deadline_does_nothing() {
    let (mut translator, arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    assert!(!translator.poll(MS(749), &mut sink));

    assert_eq!(sink.events.len(), 3);
    assert!(arbiter.holder().is_some());
    assert_eq!(translator.long_press_deadline(), Some(MS(750)));
}

#[test]
fn test_moved_gesture_disarms_a_due_timer() {
    let (mut translator, arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    translator.handle(&touch_move(140.0, 100.0, 100), &mut sink);

    // The deadline passes but the gesture is a drag now; nothing fires and
    // the timer is consumed.
    assert!(!translator.poll(MS(750), &mut sink));
    assert_eq!(translator.long_press_deadline(), None);
    assert!(arbiter.holder().is_some());

    // The drag still ends normally, without a completion event.
    translator.handle(&touch_end(140.0, 100.0, 800), &mut sink);
    assert_eq!(sink.kinds().last(), Some(&PointerEventKind::Out));
    assert_eq!(arbiter.holder(), None);
}

#[test]
fn test_touch_end_cancels_the_timer() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    translator.handle(&touch_end(100.0, 100.0, 100), &mut sink);
    assert_eq!(translator.long_press_deadline(), None);

    let before = sink.events.len();
    assert!(!translator.poll(MS(800), &mut sink));
    assert_eq!(sink.events.len(), before);
}

#[test]
fn test_gesture_can_restart_after_long_press() {
    let (mut translator, arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    assert!(translator.poll(MS(750), &mut sink));

    // A fresh contact translates normally afterwards.
    translator.handle(&touch_start(50.0, 50.0, 1_000), &mut sink);
    translator.handle(&touch_end(50.0, 50.0, 1_050), &mut sink);

    assert_eq!(sink.kinds().last(), Some(&PointerEventKind::Click));
    assert_eq!(arbiter.holder(), None);
}

#[test]
fn test_custom_long_press_threshold() {
    let (translator, _arbiter) = translator();
    let config = touchbridge::GestureConfig {
        long_press_time_ms: 300,
        ..Default::default()
    };
    let mut translator = translator.with_config(config);
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    assert_eq!(translator.long_press_deadline(), Some(MS(300)));
    assert!(translator.poll(MS(300), &mut sink));
    assert_eq!(sink.kinds().last(), Some(&PointerEventKind::ContextMenu));
}

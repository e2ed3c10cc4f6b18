//! Drag classification: moved gestures end without a click.

use crate::helpers::{RecordingSink, touch_end, touch_move, touch_start, translator};
use touchbridge::PointerEventKind;

#[test]
fn test_displacement_past_threshold_is_a_drag() {
    let (mut translator, arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    // 10px on the x axis within the tap time window.
    translator.handle(&touch_move(110.0, 100.0, 50), &mut sink);
    translator.handle(&touch_end(110.0, 100.0, 120), &mut sink);

    assert_eq!(
        sink.kinds(),
        vec![
            PointerEventKind::Over,
            PointerEventKind::Move,
            PointerEventKind::Down,
            PointerEventKind::Move,
            PointerEventKind::Up,
            PointerEventKind::Out,
        ]
    );
    assert_eq!(arbiter.holder(), None);
}

#[test]
fn test_vertical_displacement_also_classifies() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    translator.handle(&touch_move(100.0, 92.0, 40), &mut sink);
    translator.handle(&touch_end(100.0, 92.0, 100), &mut sink);

    assert!(!sink.kinds().contains(&PointerEventKind::Click));
}

#[test]
fn test_slow_hold_with_tiny_movement_is_a_drag() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    // 1px of movement, but past the 150ms drag-ignore time.
    translator.handle(&touch_move(101.0, 100.0, 200), &mut sink);
    translator.handle(&touch_end(101.0, 100.0, 250), &mut sink);

    assert!(!sink.kinds().contains(&PointerEventKind::Click));
    assert!(!sink.kinds().contains(&PointerEventKind::ContextMenu));
}

#[test]
fn test_displacement_exactly_at_threshold_is_still_a_tap() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    // Thresholds are strict: exactly 5px / exactly 150ms stays a tap.
    translator.handle(&touch_move(105.0, 100.0, 150), &mut sink);
    translator.handle(&touch_end(105.0, 100.0, 151), &mut sink);

    assert_eq!(sink.kinds().last(), Some(&PointerEventKind::Click));
}

#[test]
fn test_every_move_synthesizes_regardless_of_classification() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    translator.handle(&touch_move(101.0, 100.0, 10), &mut sink);
    translator.handle(&touch_move(150.0, 100.0, 20), &mut sink);
    translator.handle(&touch_move(200.0, 100.0, 30), &mut sink);
    translator.handle(&touch_end(200.0, 100.0, 40), &mut sink);

    let moves = sink
        .kinds()
        .iter()
        .filter(|k| **k == PointerEventKind::Move)
        .count();
    // One from the start burst plus one per touch-move.
    assert_eq!(moves, 4);
}

#[test]
fn test_drag_events_follow_the_finger() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_start(100.0, 100.0, 0), &mut sink);
    translator.handle(&touch_move(160.0, 130.0, 60), &mut sink);
    translator.handle(&touch_end(180.0, 140.0, 90), &mut sink);

    insta::assert_snapshot!(
        sink.trace(),
        @"over@100,100 move@100,100 down@100,100 move@160,130 up@180,140 out@180,140"
    );
}

#[test]
fn test_move_without_gesture_is_ignored() {
    let (mut translator, _arbiter) = translator();
    let mut sink = RecordingSink::new();

    translator.handle(&touch_move(110.0, 100.0, 50), &mut sink);

    assert!(sink.events.is_empty());
}

//! Unit tests for the drag controller's state machine.

use crate::helpers::{TestControllerBuilder, card_1, card_1_info, ev};
use canvas_drag::{DragSettings, Point, PressOutcome, SecondPressPolicy, Size};

#[test]
fn test_new_controller_is_idle() {
    let (controller, events, recorder) = card_1();
    assert_eq!(controller.id(), "card-1");
    assert!(!controller.is_dragging());
    assert_eq!(controller.anchor_offset(), None);
    assert_eq!(controller.last_position(), None);
    assert_eq!(events.listener_count(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn test_press_computes_anchor_offset() {
    let (controller, _events, _recorder) = card_1();

    let outcome = controller.begin_drag(&ev(60.0, 70.0));

    assert_eq!(outcome, PressOutcome::Started);
    assert!(controller.is_dragging());
    assert_eq!(controller.anchor_offset(), Some(Point::new(10.0, 20.0)));
}

#[test]
fn test_move_subtracts_anchor() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));

    assert_eq!(recorder.calls(), vec![(card_1_info(90.0, 130.0), false)]);
    assert_eq!(controller.last_position(), Some(card_1_info(90.0, 130.0)));
}

#[test]
fn test_release_commits_same_info() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    controller.end_drag();

    assert_eq!(
        recorder.calls(),
        vec![(card_1_info(90.0, 130.0), false), (card_1_info(90.0, 130.0), true)]
    );
    assert!(!controller.is_dragging());
    assert_eq!(controller.last_position(), None);
}

#[test]
fn test_end_drag_while_idle_is_noop() {
    let (controller, events, recorder) = card_1();

    controller.end_drag();
    controller.end_drag();

    assert!(recorder.is_empty());
    assert!(!controller.is_dragging());
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn test_move_while_idle_is_noop() {
    let (controller, _events, recorder) = card_1();

    controller.drag_move(&ev(10.0, 10.0));

    assert!(recorder.is_empty());
    assert_eq!(controller.last_position(), None);
}

#[test]
fn test_press_then_release_emits_nothing() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.end_drag();

    assert!(recorder.is_empty());
    assert!(!controller.is_dragging());
}

#[test]
fn test_moves_are_emitted_in_order() {
    let (controller, _events, recorder) = card_1();
    let moves = [(61.0, 71.0), (75.5, 80.25), (40.0, 10.0), (300.0, 500.0), (0.0, 0.0)];

    controller.begin_drag(&ev(60.0, 70.0));
    for (x, y) in moves {
        controller.drag_move(&ev(x, y));
    }

    let expected: Vec<_> = moves.iter().map(|(x, y)| card_1_info(x - 10.0, y - 20.0)).collect();
    assert_eq!(recorder.interim(), expected);
    assert!(recorder.committed().is_empty());
}

#[test]
fn test_commit_matches_latest_interim() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(55.0, 55.0));
    controller.drag_move(&ev(56.0, 57.0));
    controller.drag_move(&ev(123.0, 321.0));
    controller.end_drag();

    let calls = recorder.calls();
    let (last_interim, _) = &calls[calls.len() - 2];
    let (commit, committed) = &calls[calls.len() - 1];
    assert!(*committed);
    assert_eq!(commit, last_interim);
    assert_eq!(recorder.committed().len(), 1);
}

#[test]
fn test_restart_uses_current_item_position() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    controller.end_drag();

    // The host applies the committed position.
    controller.set_item_position(90.0, 130.0);
    recorder.clear();

    controller.begin_drag(&ev(95.0, 135.0));
    assert_eq!(controller.anchor_offset(), Some(Point::new(5.0, 5.0)));

    controller.drag_move(&ev(200.0, 200.0));
    assert_eq!(recorder.calls(), vec![(card_1_info(195.0, 195.0), false)]);
}

#[test]
fn test_second_session_without_move_does_not_commit_previous() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    controller.end_drag();
    recorder.clear();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.end_drag();

    assert!(recorder.is_empty());
}

#[test]
fn test_geometry_read_at_move_time() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.set_total_height(64.0);
    controller.set_canvas_size(Size::new(1024.0, 768.0));
    controller.drag_move(&ev(100.0, 150.0));

    let (info, _) = &recorder.calls()[0];
    assert_eq!(info.total_height, 64.0);
    assert_eq!(info.canvas_size, Size::new(1024.0, 768.0));
    assert_eq!(info.position, Point::new(90.0, 130.0));
}

#[test]
fn test_item_position_change_mid_drag_keeps_anchor() {
    let (controller, _events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.set_item_position(500.0, 500.0);
    controller.drag_move(&ev(100.0, 150.0));

    assert_eq!(controller.anchor_offset(), Some(Point::new(10.0, 20.0)));
    assert_eq!(recorder.calls()[0].0.position, Point::new(90.0, 130.0));
}

#[test]
fn test_second_press_ignored_by_default() {
    let (controller, events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    let outcome = controller.begin_drag(&ev(0.0, 0.0));

    assert_eq!(outcome, PressOutcome::Ignored);
    assert_eq!(controller.anchor_offset(), Some(Point::new(10.0, 20.0)));
    assert_eq!(controller.last_position(), Some(card_1_info(90.0, 130.0)));
    assert_eq!(events.listener_count(), 2);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_second_press_restart_policy() {
    let settings = DragSettings {
        second_press: SecondPressPolicy::Restart,
        ..DragSettings::default()
    };
    let (controller, events, recorder) = TestControllerBuilder::new("card-1")
        .at(50.0, 50.0)
        .with_settings(settings)
        .build();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    let outcome = controller.begin_drag(&ev(52.0, 51.0));

    assert_eq!(outcome, PressOutcome::Restarted);
    assert_eq!(controller.anchor_offset(), Some(Point::new(2.0, 1.0)));
    assert_eq!(controller.last_position(), None);
    assert_eq!(events.listener_count(), 2);

    // The discarded session's position is never committed.
    controller.end_drag();
    assert_eq!(recorder.committed(), vec![]);
}

#[test]
fn test_teardown_discards_uncommitted_position() {
    let (controller, events, recorder) = card_1();

    controller.begin_drag(&ev(60.0, 70.0));
    controller.drag_move(&ev(100.0, 150.0));
    controller.teardown();

    assert!(!controller.is_dragging());
    assert_eq!(events.listener_count(), 0);
    assert_eq!(recorder.committed(), vec![]);

    // Teardown while idle is harmless.
    controller.teardown();
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_try_new_rejects_bad_geometry() {
    let events = canvas_drag::PointerEvents::new();
    let recorder = crate::helpers::CallRecorder::new();
    let geometry = canvas_drag::ItemGeometry::new(0.0, 0.0, f64::NAN, Size::new(800.0, 600.0));

    let result = canvas_drag::DragController::try_new("bad", geometry, recorder.callback(), &events);
    assert!(matches!(result, Err(canvas_drag::DragError::InvalidGeometry(_))));
}

#[test]
fn test_sync_geometry_replaces_everything() {
    let builder = TestControllerBuilder::new("table-7").with_total_height(120.0).with_canvas_size(2000.0, 1500.0);
    let initial = builder.geometry();
    let (controller, _events, _recorder) = builder.build();
    assert_eq!(controller.geometry(), initial);

    let updated = canvas_drag::ItemGeometry::new(5.0, 6.0, 7.0, Size::new(8.0, 9.0));
    controller.sync_geometry(updated);
    assert_eq!(controller.geometry(), updated);
}

#[test]
fn test_try_sync_geometry_rejects_nan_height() {
    let (controller, _events, _recorder) = card_1();
    let before = controller.geometry();

    let bad = canvas_drag::ItemGeometry::new(5.0, 6.0, f64::NAN, Size::new(800.0, 600.0));
    let result = controller.try_sync_geometry(bad);

    assert!(matches!(result, Err(canvas_drag::DragError::InvalidGeometry(_))));
    assert_eq!(controller.geometry(), before);
}

#[test]
fn test_try_sync_geometry_accepts_valid_geometry() {
    let (controller, _events, _recorder) = card_1();
    let updated = canvas_drag::ItemGeometry::new(5.0, 6.0, 7.0, Size::new(8.0, 9.0));

    controller.try_sync_geometry(updated).unwrap();
    assert_eq!(controller.geometry(), updated);
}

use std::rc::Rc;

use eframe_drawer::command::Mutation;
use eframe_drawer::document::Document;
use eframe_drawer::geometry::{Bounds, Point2D};
use eframe_drawer::input::{Gesture, GestureTracker, PointerButton, PointerSample};
use eframe_drawer::settings::ToolSettings;
use eframe_drawer::shape::{Geometry, ShapeKind};
use eframe_drawer::state::EditorState;

fn hover(x: f64, y: f64) -> PointerSample {
    PointerSample {
        position: Some(Point2D::new(x, y)),
        over_surface: true,
        ..Default::default()
    }
}

fn pressed(x: f64, y: f64, button: PointerButton) -> PointerSample {
    PointerSample {
        pressed: vec![button],
        ..hover(x, y)
    }
}

fn released(x: f64, y: f64, button: PointerButton) -> PointerSample {
    PointerSample {
        released: vec![button],
        ..hover(x, y)
    }
}

fn kinds(gestures: &[Gesture]) -> Vec<&'static str> {
    gestures
        .iter()
        .map(|g| match g {
            Gesture::Press(_) => "press",
            Gesture::Drag(_) => "drag",
            Gesture::Click(_) => "click",
            Gesture::Release(_) => "release",
            Gesture::Enter(_) => "enter",
            Gesture::Exit(_) => "exit",
        })
        .collect()
}

struct Harness {
    editor: EditorState,
    tracker: GestureTracker,
}

impl Harness {
    fn new(kind: ShapeKind) -> Self {
        Self {
            editor: EditorState::new(ToolSettings {
                shape_kind: kind,
                fill: true,
                ..ToolSettings::default()
            }),
            tracker: GestureTracker::new(),
        }
    }

    fn feed(&mut self, sample: PointerSample) -> Vec<Gesture> {
        let gestures = self.tracker.update(&sample, self.editor.document());
        self.editor.handle_all(&gestures);
        gestures
    }

    fn drag(&mut self, from: (f64, f64), to: (f64, f64), button: PointerButton) {
        self.feed(pressed(from.0, from.1, button));
        self.feed(hover(to.0, to.1));
        self.feed(released(to.0, to.1, button));
    }
}

#[test]
fn test_press_drag_release_sequence() {
    let mut tracker = GestureTracker::new();
    let document = Document::new();

    let first = tracker.update(&pressed(10.0, 10.0, PointerButton::Primary), &document);
    assert_eq!(kinds(&first), ["press"]);
    assert!(tracker.is_pressed());

    let second = tracker.update(&hover(20.0, 25.0), &document);
    assert_eq!(kinds(&second), ["drag"]);
    assert_eq!(second[0].event().position, Point2D::new(20.0, 25.0));

    // No movement means no drag
    let idle = tracker.update(&hover(20.0, 25.0), &document);
    assert!(idle.is_empty());

    let last = tracker.update(&released(20.0, 25.0, PointerButton::Primary), &document);
    assert_eq!(kinds(&last), ["release", "click"]);
    assert!(!tracker.is_pressed());
}

#[test]
fn test_press_after_moving_is_not_a_drag() {
    let mut tracker = GestureTracker::new();
    let document = Document::new();

    tracker.update(&hover(5.0, 5.0), &document);
    let gestures = tracker.update(&pressed(10.0, 10.0, PointerButton::Primary), &document);
    assert_eq!(kinds(&gestures), ["press"]);

    let gestures = tracker.update(&released(10.0, 10.0, PointerButton::Primary), &document);
    assert_eq!(kinds(&gestures), ["release", "click"]);
}

#[test]
fn test_click_without_motion_places_point() {
    let mut harness = Harness::new(ShapeKind::Point);
    harness.feed(hover(5.0, 5.0));
    harness.feed(pressed(10.0, 10.0, PointerButton::Primary));
    harness.feed(released(10.0, 10.0, PointerButton::Primary));

    assert_eq!(harness.editor.document().len(), 1);
    assert!(!harness.editor.dispatcher().drawing().drawing_in_progress());
}

#[test]
fn test_director_press_after_moving_leaves_move_open() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((0.0, 0.0), (100.0, 100.0), PointerButton::Primary);
    let shape = harness.editor.document().shapes()[0].clone();
    harness.editor.set_modifier(true);

    harness.feed(hover(40.0, 40.0));
    harness.feed(pressed(50.0, 50.0, PointerButton::Primary));
    harness.feed(released(50.0, 50.0, PointerButton::Primary));

    assert_eq!(shape.borrow().layout, Point2D::ORIGIN);
    match harness.editor.history().peek_previous() {
        Mutation::Move { end, .. } => assert_eq!(*end, None),
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn test_release_of_other_button_is_ignored() {
    let mut tracker = GestureTracker::new();
    let document = Document::new();

    tracker.update(&pressed(0.0, 0.0, PointerButton::Primary), &document);
    let gestures = tracker.update(&released(0.0, 0.0, PointerButton::Secondary), &document);
    assert!(gestures.is_empty());
    assert!(tracker.is_pressed());
}

#[test]
fn test_no_position_yields_nothing() {
    let mut tracker = GestureTracker::new();
    let document = Document::new();
    let gestures = tracker.update(&PointerSample::default(), &document);
    assert!(gestures.is_empty());
}

#[test]
fn test_rectangle_through_tracker() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((10.0, 10.0), (30.0, 40.0), PointerButton::Primary);

    let shapes = harness.editor.document().shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(
        shapes[0].borrow().geometry,
        Geometry::Rect(Bounds::new(10.0, 10.0, 20.0, 30.0))
    );
    // the click after the drag did not add a point
    assert_eq!(harness.editor.history().len(), 1);
}

#[test]
fn test_hover_enter_and_exit() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((0.0, 0.0), (100.0, 100.0), PointerButton::Primary);
    let shape = harness.editor.document().shapes()[0].clone();
    harness.editor.set_modifier(true);

    let entered = harness.feed(hover(50.0, 50.0));
    assert_eq!(kinds(&entered), ["enter"]);
    assert!(shape.borrow().highlighted);

    // Staying over the same shape is quiet
    assert!(harness.feed(hover(55.0, 50.0)).is_empty());

    let exited = harness.feed(hover(300.0, 300.0));
    assert_eq!(kinds(&exited), ["exit"]);
    assert!(!shape.borrow().highlighted);
}

#[test]
fn test_director_move_through_tracker() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((0.0, 0.0), (100.0, 100.0), PointerButton::Primary);
    let shape = harness.editor.document().shapes()[0].clone();
    harness.editor.set_modifier(true);

    harness.drag((50.0, 50.0), (70.0, 65.0), PointerButton::Primary);

    assert_eq!(shape.borrow().layout, Point2D::new(20.0, 15.0));
    assert_eq!(harness.editor.document().len(), 1);

    // The moved shape is hit at its new place
    let under = harness.editor.document().shape_at(Point2D::new(115.0, 110.0));
    assert!(under.is_some_and(|s| Rc::ptr_eq(&s, &shape)));
}

#[test]
fn test_director_erase_through_tracker() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((0.0, 0.0), (100.0, 100.0), PointerButton::Primary);
    harness.editor.set_modifier(true);

    harness.feed(pressed(50.0, 50.0, PointerButton::Secondary));
    harness.feed(released(50.0, 50.0, PointerButton::Secondary));

    assert!(harness.editor.document().is_empty());
    assert!(matches!(
        harness.editor.history().peek_previous(),
        Mutation::Erase { .. }
    ));

    harness.editor.undo();
    assert_eq!(harness.editor.document().len(), 1);
}

#[test]
fn test_click_off_the_pressed_shape_has_no_source() {
    let mut harness = Harness::new(ShapeKind::Rectangle);
    harness.drag((0.0, 0.0), (10.0, 10.0), PointerButton::Primary);

    harness.feed(pressed(5.0, 5.0, PointerButton::Secondary));
    harness.feed(hover(200.0, 200.0));
    let gestures = harness.feed(released(200.0, 200.0, PointerButton::Secondary));

    let click = gestures.last().map(Gesture::event);
    assert!(click.is_some_and(|event| event.source.is_none()));
    assert_eq!(harness.editor.document().len(), 1);
}

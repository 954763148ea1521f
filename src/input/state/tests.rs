use super::*;
use crate::config::{Dynamic, DynamicSettings};
use crate::draw::{BLACK, Pen, RED, ReferenceBuffer, Surface, WHITE};
use crate::error::DrawError;
use crate::input::events::{EventTarget, PointerKind};
use crate::util::Point;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn settings(width: f64, color: &str, erasing: bool) -> DynamicSettings {
    DynamicSettings::resolve(
        Dynamic::Constant(width),
        Dynamic::Constant(color.to_string()),
        Dynamic::Constant(erasing),
    )
}

fn canvas() -> (Surface, ReferenceBuffer) {
    let live = Surface::with_background(100, 100, WHITE, None).unwrap();
    let reference = ReferenceBuffer::new(100, 100, WHITE, false).unwrap();
    (live, reference)
}

fn px(surface: &mut Surface, x: i32, y: i32) -> u32 {
    surface.pixel(x, y).unwrap().unwrap()
}

#[test]
fn press_alone_leaves_no_mark() {
    let (mut live, reference) = canvas();
    let before = live.pixels().unwrap();

    let mut controller = StrokeController::new(settings(4.0, "#000", false));
    assert!(controller.on_press(Point::new(10, 10)).unwrap());
    assert!(controller.is_active());
    assert!(controller.on_release(&mut live, &reference).unwrap());

    assert!(!controller.is_active());
    assert_eq!(live.pixels().unwrap(), before);
}

#[test]
fn press_then_move_paints_segment() {
    let (mut live, reference) = canvas();
    let mut controller = StrokeController::new(settings(4.0, "#000", false));

    controller.on_press(Point::new(10, 10)).unwrap();
    assert!(controller.on_move(Point::new(50, 10), &mut live, &reference).unwrap());

    for x in [12, 30, 48] {
        assert_eq!(px(&mut live, x, 10), BLACK.to_argb32(), "x = {x}");
    }
    assert_eq!(px(&mut live, 30, 40), WHITE.to_argb32());
    assert_eq!(controller.pointer().unwrap().start, Point::new(50, 10));
}

#[test]
fn empty_color_is_rejected_at_press() {
    let mut controller = StrokeController::new(settings(4.0, "  ", false));
    let err = controller.on_press(Point::new(1, 1)).unwrap_err();
    assert!(matches!(err, DrawError::Config(_)));
    assert_eq!(controller.state, DrawingState::Idle);
}

#[test]
fn unusable_width_is_rejected_at_press() {
    for width in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut controller = StrokeController::new(settings(width, "#000", false));
        assert!(matches!(
            controller.on_press(Point::new(1, 1)),
            Err(DrawError::Config(_))
        ));
        assert!(!controller.is_active());
    }
}

#[test]
fn unknown_color_is_rejected_at_press() {
    let mut controller = StrokeController::new(settings(2.0, "not-a-color", false));
    assert!(matches!(
        controller.on_press(Point::new(1, 1)),
        Err(DrawError::Config(_))
    ));
}

#[test]
fn connected_moves_match_separately_drawn_segments() {
    let (mut live, reference) = canvas();
    let mut controller = StrokeController::new(settings(3.0, "red", false));
    let a = Point::new(10, 10);
    let b = Point::new(60, 40);
    let c = Point::new(20, 80);

    controller.on_press(a).unwrap();
    controller.on_move(b, &mut live, &reference).unwrap();
    controller.on_move(c, &mut live, &reference).unwrap();

    let mut expected = Surface::with_background(100, 100, WHITE, None).unwrap();
    expected.set_pen(Pen {
        width: 3.0,
        color: RED,
    });
    expected.stroke_segment(a, b).unwrap();
    expected.stroke_segment(b, c).unwrap();

    assert_eq!(live.pixels().unwrap(), expected.pixels().unwrap());
}

#[test]
fn move_without_press_is_ignored() {
    let (mut live, reference) = canvas();
    let before = live.pixels().unwrap();
    let mut controller = StrokeController::new(settings(4.0, "#000", false));

    assert!(!controller.on_move(Point::new(50, 50), &mut live, &reference).unwrap());
    assert!(!controller.on_release(&mut live, &reference).unwrap());
    assert_eq!(live.pixels().unwrap(), before);
}

#[test]
fn second_press_does_not_restart_stroke() {
    let mut controller = StrokeController::new(settings(4.0, "#000", false));
    assert!(controller.on_press(Point::new(5, 5)).unwrap());
    assert!(!controller.on_press(Point::new(70, 70)).unwrap());
    assert_eq!(controller.pointer().unwrap().start, Point::new(5, 5));
}

#[test]
fn event_scope_follows_listener_targets() {
    let mut controller = StrokeController::new(settings(4.0, "#000", false));
    assert!(controller.accepts(PointerKind::Press, EventTarget::Surface));
    assert!(!controller.accepts(PointerKind::Press, EventTarget::Document));
    assert!(!controller.accepts(PointerKind::Move, EventTarget::Surface));
    assert!(!controller.accepts(PointerKind::Release, EventTarget::Document));

    controller.on_press(Point::new(1, 1)).unwrap();
    assert!(controller.accepts(PointerKind::Move, EventTarget::Surface));
    assert!(!controller.accepts(PointerKind::Move, EventTarget::Document));
    assert!(controller.accepts(PointerKind::Release, EventTarget::Document));
    assert!(controller.accepts(PointerKind::Release, EventTarget::Surface));
}

#[test]
fn pen_is_fixed_for_the_stroke() {
    let (mut live, reference) = canvas();
    let selected = Rc::new(RefCell::new("#000".to_string()));
    let source = Rc::clone(&selected);
    let mut controller = StrokeController::new(DynamicSettings::resolve(
        Dynamic::Constant(4.0),
        Dynamic::accessor(move || source.borrow().clone()),
        Dynamic::Constant(false),
    ));

    controller.on_press(Point::new(10, 10)).unwrap();
    *selected.borrow_mut() = "red".to_string();
    controller.on_move(Point::new(50, 10), &mut live, &reference).unwrap();
    assert_eq!(px(&mut live, 30, 10), BLACK.to_argb32());
    controller.on_release(&mut live, &reference).unwrap();

    controller.on_press(Point::new(10, 60)).unwrap();
    controller.on_move(Point::new(50, 60), &mut live, &reference).unwrap();
    assert_eq!(px(&mut live, 30, 60), RED.to_argb32());
}

#[test]
fn erasing_restores_disk_and_release_removes_ring() {
    let (mut live, reference) = canvas();
    live.set_pen(Pen {
        width: 4.0,
        color: BLACK,
    });
    live.stroke_segment(Point::new(10, 50), Point::new(90, 50)).unwrap();

    let mut controller = StrokeController::new(settings(4.0, "#000", true));
    controller.on_press(Point::new(50, 50)).unwrap();
    controller.on_move(Point::new(50, 50), &mut live, &reference).unwrap();

    // disk restored, ring visible just inside the radius
    assert_eq!(px(&mut live, 40, 50), WHITE.to_argb32());
    assert_eq!(px(&mut live, 50, 50), WHITE.to_argb32());
    assert_ne!(px(&mut live, 50, 69), WHITE.to_argb32());
    assert_eq!(controller.pointer().unwrap().cursor, Some(Point::new(50, 50)));

    controller.on_release(&mut live, &reference).unwrap();
    assert_eq!(px(&mut live, 50, 69), WHITE.to_argb32());
    assert_eq!(px(&mut live, 40, 50), WHITE.to_argb32());
    // outside the disk the line survives
    assert_eq!(px(&mut live, 20, 50), BLACK.to_argb32());
}

#[test]
fn moving_eraser_leaves_no_trailing_rings() {
    let (mut live, reference) = canvas();
    let mut controller = StrokeController::new(settings(4.0, "#000", true));

    controller.on_press(Point::new(30, 50)).unwrap();
    controller.on_move(Point::new(30, 50), &mut live, &reference).unwrap();
    controller.on_move(Point::new(40, 50), &mut live, &reference).unwrap();
    controller.on_move(Point::new(50, 50), &mut live, &reference).unwrap();
    controller.on_release(&mut live, &reference).unwrap();

    // ring positions of every intermediate cursor
    for (x, y) in [(30, 69), (40, 69), (50, 69), (30, 30), (40, 30), (50, 30)] {
        assert_eq!(px(&mut live, x, y), WHITE.to_argb32(), "({x}, {y})");
    }
    assert!(!controller.is_active());
}

#[test]
fn switching_back_to_pen_removes_cursor_ring() {
    let (mut live, reference) = canvas();
    let erasing = Rc::new(Cell::new(true));
    let source = Rc::clone(&erasing);
    let mut controller = StrokeController::new(DynamicSettings::resolve(
        Dynamic::Constant(2.0),
        Dynamic::Constant("#000".to_string()),
        Dynamic::accessor(move || source.get()),
    ));

    controller.on_press(Point::new(50, 50)).unwrap();
    controller.on_move(Point::new(50, 50), &mut live, &reference).unwrap();
    assert_ne!(px(&mut live, 50, 69), WHITE.to_argb32());

    erasing.set(false);
    controller.on_move(Point::new(90, 50), &mut live, &reference).unwrap();
    assert_eq!(px(&mut live, 50, 69), WHITE.to_argb32());
    assert_eq!(px(&mut live, 70, 50), BLACK.to_argb32());
    assert_eq!(controller.pointer().unwrap().cursor, None);
}

#[test]
fn moves_record_damage() {
    let (mut live, reference) = canvas();
    let mut controller = StrokeController::new(settings(4.0, "#000", false));
    assert!(controller.take_damage(100, 100).is_empty());

    controller.on_press(Point::new(10, 10)).unwrap();
    controller.on_move(Point::new(50, 10), &mut live, &reference).unwrap();

    let damage = controller.take_damage(100, 100);
    assert_eq!(damage.len(), 1);
    assert!(damage[0].contains(Point::new(10, 10)));
    assert!(damage[0].contains(Point::new(50, 10)));
    assert!(controller.take_damage(100, 100).is_empty());
}

use std::f64::consts::FRAC_PI_2;

use shapekit_core::{Geometry, TransformOptions};
use shapekit_transform::HandleKind;

use crate::common::{assert_close, c, square, Harness};

fn body_drag() -> TransformOptions {
    TransformOptions {
        translate_feature: true,
        ..Default::default()
    }
}

#[test]
fn test_translate_point() {
    let mut h = Harness::new(body_drag());
    let id = h.add(Geometry::point(0.0, 0.0));

    h.gesture(c(0.0, 0.0), c(10.0, 5.0));

    assert_eq!(h.geometry(id), Geometry::point(10.0, 5.0));
    let names = h.event_names();
    assert_eq!(names.first(), Some(&"selectionchange"));
    let lifecycle: Vec<_> = names.into_iter().skip(1).collect();
    assert_eq!(lifecycle.first(), Some(&"transformstart"));
    assert_eq!(lifecycle.last(), Some(&"transformend"));
    assert!(lifecycle[1..lifecycle.len() - 1]
        .iter()
        .all(|n| *n == "transforming"));
    assert!(lifecycle.len() >= 3);
}

#[test]
fn test_rotate_quarter_turn() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 10.0));
    h.click(c(5.0, 5.0));
    assert_eq!(h.interaction.selected_shape(), Some(id));

    let rotate = h.handle(HandleKind::Rotate);
    assert_close(rotate.position, c(5.0, 55.0));

    // Pivot (5,5): from straight above to straight left is +90 degrees.
    h.down(rotate.position);
    h.drag(c(-20.0, 30.0));
    assert!(h.interaction.rotation_angle() > 0.0);
    h.drag(c(-45.0, 5.0));
    assert!((h.interaction.rotation_angle() - FRAC_PI_2).abs() < 1e-9);
    h.up(c(-45.0, 5.0));

    let g = h.geometry(id);
    assert_close(g.coordinates()[1], c(10.0, 10.0));
    assert_close(g.coordinates()[0], c(10.0, 0.0));
    assert!(g.is_closed());
    assert_eq!(h.interaction.rotation_angle(), 0.0);
}

#[test]
fn test_undo_redo_chain() {
    let mut h = Harness::new(body_drag());
    let id = h.add(square(0.0, 0.0, 100.0));
    let original = h.geometry(id);

    // T1 selects and moves in one gesture.
    h.gesture(c(50.0, 50.0), c(60.0, 50.0));
    let after_t1 = h.geometry(id);
    // T2
    h.gesture(c(60.0, 50.0), c(60.0, 70.0));
    let after_t2 = h.geometry(id);
    assert_ne!(after_t1, after_t2);

    assert!(h.undo());
    assert_eq!(h.geometry(id), after_t1);
    assert!(h.undo());
    assert_eq!(h.geometry(id), original);
    assert!(!h.undo());

    assert!(h.redo());
    assert_eq!(h.geometry(id), after_t1);
    assert!(h.redo());
    assert_eq!(h.geometry(id), after_t2);
    assert!(!h.redo());
}

#[test]
fn test_selection_change_discards_history() {
    let mut h = Harness::new(body_drag());
    let first = h.add(square(0.0, 0.0, 100.0));
    let second = h.add(square(300.0, 0.0, 100.0));

    h.gesture(c(50.0, 50.0), c(70.0, 50.0));
    assert!(h.interaction.can_undo());

    h.click(c(350.0, 50.0));
    assert_eq!(h.interaction.selected_shape(), Some(second));
    assert!(!h.interaction.can_undo());
    assert!(!h.undo());
    assert_eq!(h.geometry(second), square(300.0, 0.0, 100.0));
    assert_ne!(h.geometry(first), square(0.0, 0.0, 100.0));
}

#[test]
fn test_undo_restores_every_handle_kind() {
    let polygon_handles = [
        HandleKind::Rotate,
        HandleKind::ScaleCorner(shapekit_transform::Corner::NE),
        HandleKind::ScaleCorner(shapekit_transform::Corner::SW),
        HandleKind::StretchSide(shapekit_transform::Side::E),
        HandleKind::StretchSide(shapekit_transform::Side::N),
    ];
    for kind in polygon_handles {
        let mut h = Harness::new(TransformOptions::default());
        let id = h.add(square(0.0, 0.0, 40.0));
        h.click(c(20.0, 20.0));
        let before = h.geometry(id);

        let from = h.handle(kind).position;
        h.gesture(from, c(from.x + 13.0, from.y + 7.0));
        assert_ne!(h.geometry(id), before, "{kind} changed nothing");

        assert!(h.undo(), "{kind} left nothing to undo");
        assert_eq!(h.geometry(id), before, "{kind} did not round-trip");
    }

    // Vertex, edge midpoint and body translate.
    let mut h = Harness::new(body_drag());
    let id = h.add(square(0.0, 0.0, 40.0));
    h.click(c(20.0, 20.0));
    let before = h.geometry(id);
    for from in [h.vertex_handle(2).position, h.edge_handle(0).position, c(20.0, 20.0)] {
        h.gesture(from, c(from.x + 6.0, from.y - 3.0));
        assert_ne!(h.geometry(id), before);
        assert!(h.undo());
        assert_eq!(h.geometry(id), before);
    }

    // Circle center and edge.
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(Geometry::circle(c(0.0, 0.0), 20.0));
    h.click(c(5.0, 5.0));
    let before = h.geometry(id);
    for from in [c(0.0, 0.0), c(20.0, 0.0)] {
        h.gesture(from, c(from.x + 8.0, from.y + 8.0));
        assert_ne!(h.geometry(id), before);
        assert!(h.undo());
        assert_eq!(h.geometry(id), before);
    }
}

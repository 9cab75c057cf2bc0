use shapekit_core::{Geometry, TransformOptions, Viewport};
use shapekit_transform::{Corner, CursorHint, HandleKind, SessionState, TransformEvent, TransformKind};

use crate::common::{c, square, Harness};

#[test]
fn test_select_and_clear_emit_selection_changes() {
    let mut h = Harness::new(TransformOptions::default());
    let a = h.add(square(0.0, 0.0, 100.0));
    let b = h.add(square(300.0, 0.0, 100.0));

    h.click(c(50.0, 50.0));
    h.click(c(350.0, 50.0));
    h.click(c(-200.0, -200.0));

    let events = h.events.borrow().clone();
    assert_eq!(
        events,
        vec![
            TransformEvent::SelectionChange {
                previous: None,
                next: Some(a)
            },
            TransformEvent::SelectionChange {
                previous: Some(a),
                next: Some(b)
            },
            TransformEvent::SelectionChange {
                previous: Some(b),
                next: None
            },
        ]
    );
    assert_eq!(h.interaction.state(), SessionState::Idle);
    assert!(h.interaction.handles().is_empty());
    assert!(h.interaction.history().is_empty());
}

#[test]
fn test_reselecting_same_shape_is_quiet() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    h.click(c(40.0, 40.0));
    assert_eq!(h.event_names(), vec!["selectionchange"]);
    assert_eq!(h.interaction.state(), SessionState::Selected(id));
}

#[test]
fn test_handles_hidden_during_drag() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let corner = h.handle(HandleKind::ScaleCorner(Corner::NE)).position;

    assert_eq!(h.down(corner), CursorHint::Grabbing);
    assert!(h.interaction.handles().is_empty());
    assert_eq!(
        h.interaction.state(),
        SessionState::Transforming {
            shape: id,
            kind: TransformKind::Scale(Corner::NE)
        }
    );
    h.drag(c(corner.x + 50.0, corner.y + 50.0));
    assert!(h.interaction.handles().is_empty());
    h.up(c(corner.x + 50.0, corner.y + 50.0));

    // Regenerated around the scaled extent.
    let extent = h.geometry(id).extent();
    assert!((extent.width() - 150.0).abs() < 1e-9);
    let ne = h.handle(HandleKind::ScaleCorner(Corner::NE)).position;
    assert!((ne.x - (extent.max_x + 15.0)).abs() < 1e-9);
}

#[test]
fn test_aspect_ratio_lock() {
    let mut h = Harness::new(TransformOptions {
        keep_aspect_ratio: true,
        ..Default::default()
    });
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let corner = h.handle(HandleKind::ScaleCorner(Corner::NE)).position;
    h.gesture(corner, c(corner.x + 100.0, corner.y + 20.0));

    let extent = h.geometry(id).extent();
    assert!((extent.width() - 120.0).abs() < 1e-9);
    assert!((extent.height() - 120.0).abs() < 1e-9);
}

#[test]
fn test_scale_floor_on_collapse() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 10.0));
    h.click(c(5.0, 5.0));
    let ne = h.handle(HandleKind::ScaleCorner(Corner::NE)).position;
    let sw = h.handle(HandleKind::ScaleCorner(Corner::SW)).position;
    h.gesture(ne, sw);

    let extent = h.geometry(id).extent();
    assert!((extent.width() - 1.0).abs() < 1e-9);
    assert!((extent.height() - 1.0).abs() < 1e-9);
    assert!(extent.center().approx_eq(&c(5.0, 5.0), 1e-9));
}

#[test]
fn test_stretch_affects_one_axis() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let east = h.handle(HandleKind::StretchSide(shapekit_transform::Side::E)).position;
    h.gesture(east, c(east.x + 50.0, east.y + 80.0));

    let extent = h.geometry(id).extent();
    assert!((extent.width() - 150.0).abs() < 1e-9);
    assert!((extent.height() - 100.0).abs() < 1e-9);
}

#[test]
fn test_delete_handle_removes_membership() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    h.clear_events();

    let delete = h.handle(HandleKind::Delete).position;
    h.click(delete);

    assert_eq!(
        h.event_names(),
        vec!["transformstart", "deletefeature", "selectionchange"]
    );
    assert!(!h.interaction.is_member(id));
    assert_eq!(h.interaction.state(), SessionState::Idle);
    // Geometry storage is the host's business.
    assert!(h.scene.store.contains(id));

    // No longer selectable.
    h.click(c(50.0, 50.0));
    assert_eq!(h.interaction.selected_shape(), None);
}

#[test]
fn test_point_has_delete_only() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(Geometry::point(10.0, 10.0));
    h.click(c(10.0, 10.0));
    assert_eq!(h.interaction.selected_shape(), Some(id));
    let kinds: Vec<_> = h.interaction.handles().iter().map(|h| h.kind).collect();
    assert_eq!(kinds, vec![HandleKind::Delete]);

    // Without body dragging a point cannot move.
    h.gesture(c(10.0, 10.0), c(30.0, 30.0));
    assert_eq!(h.geometry(id), Geometry::point(10.0, 10.0));
}

#[test]
fn test_translate_center_handle() {
    let mut h = Harness::new(TransformOptions {
        translate_center: true,
        ..Default::default()
    });
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(30.0, 30.0));
    let center = h.handle(HandleKind::TranslateCenter).position;
    h.gesture(center, c(center.x + 25.0, center.y - 5.0));
    assert_eq!(h.geometry(id), square(25.0, -5.0, 100.0));
}

#[test]
fn test_circle_resize_and_recenter() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(Geometry::circle(c(0.0, 0.0), 10.0));
    h.click(c(2.0, 2.0));

    h.gesture(c(10.0, 0.0), c(0.0, 30.0));
    assert_eq!(h.geometry(id), Geometry::circle(c(0.0, 0.0), 30.0));

    h.gesture(c(0.0, 0.0), c(40.0, -10.0));
    assert_eq!(h.geometry(id), Geometry::circle(c(40.0, -10.0), 30.0));
    let edge = h
        .interaction
        .handles()
        .iter()
        .find(|h| h.aux.circle_edge)
        .map(|h| h.position);
    assert_eq!(edge, Some(c(70.0, -10.0)));
}

#[test]
fn test_hover_cursor_hints() {
    let mut h = Harness::new(TransformOptions::default());
    h.add(square(0.0, 0.0, 100.0));
    h.add(square(300.0, 0.0, 100.0));

    assert_eq!(h.hover(c(50.0, 50.0)), CursorHint::Pointer);
    h.click(c(50.0, 50.0));
    assert_eq!(h.hover(c(50.0, 50.0)), CursorHint::Default);
    assert_eq!(h.hover(c(115.0, 115.0)), CursorHint::ResizeNeSw);
    assert_eq!(h.hover(c(115.0, 50.0)), CursorHint::ResizeEw);
    assert_eq!(h.hover(c(50.0, 0.0)), CursorHint::Crosshair);
    assert_eq!(h.hover(c(100.0, 100.0)), CursorHint::Move);
    assert_eq!(h.hover(c(350.0, 50.0)), CursorHint::Pointer);
    assert_eq!(h.hover(c(-500.0, 50.0)), CursorHint::Default);
}

#[test]
fn test_tolerance_scales_with_zoom() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_zoom(4.0);
    let mut h = Harness::with_viewport(TransformOptions::default(), viewport);
    let id = h.add(Geometry::point(10.0, 10.0));

    // 5 px at 4x zoom is 1.25 map units.
    h.click(c(11.5, 10.0));
    assert_eq!(h.interaction.selected_shape(), None);
    h.click(c(11.0, 10.0));
    assert_eq!(h.interaction.selected_shape(), Some(id));

    // Padding shrinks the same way: 15 px is 3.75 map units.
    let delete = h.handle(HandleKind::Delete).position;
    assert!(delete.approx_eq(&c(13.75, 13.75), 1e-9));
}

#[test]
fn test_stopped_interaction_ignores_pointer() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    h.interaction.stop(&mut h.scene);

    assert_eq!(h.interaction.selected_shape(), None);
    assert!(h.interaction.handles().is_empty());
    assert_eq!(
        h.event_names(),
        vec!["selectionchange", "selectionchange"]
    );

    h.click(c(50.0, 50.0));
    assert_eq!(h.interaction.selected_shape(), None);
    assert!(!h.interaction.select_shape(&h.scene, id));

    h.interaction.start();
    assert!(h.interaction.select_shape(&h.scene, id));
}

#[test]
fn test_programmatic_selection_rules() {
    let mut h = Harness::new(TransformOptions::default());
    let member = h.add(square(0.0, 0.0, 100.0));
    let outsider = h.scene.add(square(300.0, 0.0, 100.0));

    assert!(!h.interaction.select_shape(&h.scene, outsider));
    assert!(h.interaction.select_shape(&h.scene, member));

    h.interaction.set_shapes(&mut h.scene, [outsider]);
    assert_eq!(h.interaction.selected_shape(), None);
    assert!(h.interaction.select_shape(&h.scene, outsider));
    assert!(h.interaction.remove_shape(&mut h.scene, outsider));
    assert_eq!(h.interaction.selected_shape(), None);
    assert!(!h.interaction.remove_shape(&mut h.scene, outsider));
}

#[test]
fn test_stale_drag_is_rolled_back_on_new_press() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let before = h.geometry(id);
    let from = h.vertex_handle(2).position;
    h.down(from);
    h.drag(c(120.0, 120.0));
    assert_ne!(h.geometry(id), before);
    h.clear_events();

    // Release never arrives; the next press starts over.
    h.down(c(50.0, 50.0));
    h.up(c(50.0, 50.0));
    assert!(!h.interaction.is_transforming());
    assert_eq!(h.interaction.selected_shape(), Some(id));
    assert!(!h.interaction.handles().is_empty());

    assert_eq!(h.geometry(id), before);
    assert_eq!(h.event_names(), vec!["transformend"]);
    assert_eq!(h.interaction.history().len(), 1);
    assert!(!h.undo());
    assert_eq!(h.geometry(id), before);
}

#[test]
fn test_stale_midpoint_drag_drops_inserted_vertex() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let mid = h.edge_handle(1).position;
    h.down(mid);
    h.drag(c(130.0, 50.0));
    assert_eq!(h.geometry(id).vertex_count(), 5);

    h.down(c(50.0, 50.0));
    assert_eq!(h.geometry(id), square(0.0, 0.0, 100.0));
    assert!(!h.interaction.can_undo());
}

#[test]
fn test_stop_and_clear_roll_back_open_drag() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    let rotate = h.handle(HandleKind::Rotate).position;
    h.down(rotate);
    h.drag(c(-60.0, 50.0));
    h.interaction.clear_selection(&mut h.scene);
    assert_eq!(h.geometry(id), square(0.0, 0.0, 100.0));
    assert_eq!(h.interaction.rotation_angle(), 0.0);
    assert_eq!(h.interaction.state(), SessionState::Idle);

    h.click(c(50.0, 50.0));
    let from = h.vertex_handle(0).position;
    h.down(from);
    h.drag(c(-40.0, -40.0));
    h.interaction.stop(&mut h.scene);
    assert_eq!(h.geometry(id), square(0.0, 0.0, 100.0));
    assert!(!h.interaction.is_active());
}

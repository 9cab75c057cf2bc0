use shapekit_core::{Geometry, TransformOptions};
use shapekit_transform::{ActionType, TransformEvent, TransformKind};

use crate::common::{assert_close, c, square, Harness};

#[test]
fn test_edge_midpoint_inserts_once_and_drags_new_vertex() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    h.clear_events();

    let mid = h.edge_handle(1).position;
    assert_close(mid, c(100.0, 50.0));
    h.down(mid);
    // Inserted immediately at edge + 1, before any motion.
    assert_eq!(h.geometry(id).vertex_count(), 5);
    for step in 1..=5 {
        h.drag(c(100.0 + step as f64 * 4.0, 50.0));
    }
    h.up(c(120.0, 50.0));

    let g = h.geometry(id);
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.vertices()[2], c(120.0, 50.0));
    assert!(g.is_closed());

    let events = h.events.borrow();
    assert_eq!(
        events.first(),
        Some(&TransformEvent::TransformStart {
            shape: id,
            operation: TransformKind::Vertex { index: 2 }
        })
    );
    drop(events);

    assert_eq!(
        h.interaction.history().current().map(|e| e.action),
        Some(ActionType::AddVertex)
    );
    assert!(h.undo());
    assert_eq!(h.geometry(id), square(0.0, 0.0, 100.0));
}

#[test]
fn test_closing_edge_midpoint() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));

    let mid = h.edge_handle(3).position;
    h.gesture(mid, c(-20.0, 50.0));

    let g = h.geometry(id);
    assert_eq!(g.vertices().len(), 5);
    assert_eq!(g.vertices()[4], c(-20.0, 50.0));
    assert_eq!(g.coordinates().first(), g.coordinates().last());
}

#[test]
fn test_moving_first_vertex_keeps_ring_closed() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));

    h.gesture(c(0.0, 0.0), c(-30.0, -10.0));
    let g = h.geometry(id);
    assert_eq!(g.coordinates()[0], c(-30.0, -10.0));
    assert_eq!(g.coordinates()[4], c(-30.0, -10.0));
}

#[test]
fn test_secondary_press_deletes_vertex() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(Geometry::polygon([
        c(0.0, 0.0),
        c(100.0, 0.0),
        c(100.0, 100.0),
        c(50.0, 150.0),
        c(0.0, 100.0),
    ]));
    h.click(c(50.0, 50.0));
    h.clear_events();

    h.right_click(c(50.0, 150.0));

    assert_eq!(h.geometry(id), square(0.0, 0.0, 100.0));
    assert_eq!(h.event_names(), vec!["transformstart", "transformend"]);
    assert_eq!(h.interaction.handles().len(), 1 + 4 + 4 + 2 + 1 + 4 + 4);
    assert_eq!(
        h.interaction.history().current().map(|e| e.action),
        Some(ActionType::DeleteVertex)
    );

    assert!(h.undo());
    assert_eq!(h.geometry(id).vertex_count(), 5);
}

#[test]
fn test_delete_at_minimum_is_rejected_silently() {
    let mut h = Harness::new(TransformOptions::default());
    let triangle = h.add(Geometry::polygon([c(0.0, 0.0), c(100.0, 0.0), c(50.0, 80.0)]));
    h.click(c(50.0, 30.0));
    h.clear_events();

    h.right_click(c(50.0, 80.0));
    assert_eq!(h.geometry(triangle).coordinates().len(), 4);
    assert!(h.event_names().is_empty());
    assert!(!h.interaction.can_undo());

    let line = h.add(Geometry::line_string([c(300.0, 0.0), c(400.0, 0.0)]));
    h.click(c(350.0, 0.0));
    h.clear_events();
    h.right_click(c(300.0, 0.0));
    assert_eq!(h.geometry(line).coordinates().len(), 2);
    assert!(h.event_names().is_empty());
}

#[test]
fn test_secondary_press_elsewhere_is_ignored() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(square(0.0, 0.0, 100.0));
    h.click(c(50.0, 50.0));
    h.clear_events();

    h.right_click(c(50.0, 50.0));
    h.right_click(c(-300.0, -300.0));
    assert_eq!(h.interaction.selected_shape(), Some(id));
    assert!(h.event_names().is_empty());
}

#[test]
fn test_line_string_vertex_edits() {
    let mut h = Harness::new(TransformOptions::default());
    let id = h.add(Geometry::line_string([c(0.0, 0.0), c(100.0, 0.0), c(100.0, 100.0)]));
    h.click(c(50.0, 0.0));
    // Selecting on the edge did not move anything.
    assert_eq!(h.geometry(id).coordinates().len(), 3);

    h.right_click(c(100.0, 0.0));
    assert_eq!(
        h.geometry(id),
        Geometry::line_string([c(0.0, 0.0), c(100.0, 100.0)])
    );

    let mid = h.edge_handle(0).position;
    h.gesture(mid, c(mid.x - 10.0, mid.y + 20.0));
    assert_eq!(h.geometry(id).coordinates().len(), 3);
    assert_eq!(h.geometry(id).coordinates()[1], c(40.0, 70.0));
}

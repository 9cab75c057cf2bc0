use proptest::prelude::*;

use shapekit_core::{Coordinate, Extent, Geometry};
use shapekit_transform::transform::{affine, apply, vertex, DragContext};
use shapekit_transform::{Corner, Side, SnapshotHistory, TransformKind, ActionType};

#[derive(Debug, Clone)]
enum VertexOp {
    Move { index: usize, dx: f64, dy: f64 },
    Add { edge: usize },
    Delete { index: usize },
}

fn vertex_op() -> impl Strategy<Value = VertexOp> {
    prop_oneof![
        (0usize..12, -50.0f64..50.0, -50.0f64..50.0)
            .prop_map(|(index, dx, dy)| VertexOp::Move { index, dx, dy }),
        (0usize..12).prop_map(|edge| VertexOp::Add { edge }),
        (0usize..12).prop_map(|index| VertexOp::Delete { index }),
    ]
}

fn ring() -> impl Strategy<Value = Geometry> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..8)
        .prop_map(|pts| Geometry::polygon(pts.into_iter().map(Coordinate::from)))
}

proptest! {
    #[test]
    fn prop_vertex_edits_keep_ring_closed(
        start in ring(),
        ops in prop::collection::vec(vertex_op(), 1..25),
    ) {
        let mut g = start;
        for op in ops {
            let count = g.vertex_count();
            let result = match op {
                VertexOp::Move { index, dx, dy } => vertex::move_vertex(&g, index % count, dx, dy),
                VertexOp::Add { edge } => vertex::insert_midpoint(&g, edge % count).map(|(g, _)| g),
                VertexOp::Delete { index } => vertex::delete_vertex(&g, index % count).map(|(g, _)| g),
            };
            if let Ok(next) = result {
                g = next;
            }
            let coords = g.coordinates();
            prop_assert_eq!(coords.first(), coords.last());
            prop_assert!(coords.len() >= 4);
        }
    }

    #[test]
    fn prop_scale_factors_never_drop_below_floor(
        w in 0.5f64..500.0,
        h in 0.5f64..500.0,
        dx in -2000.0f64..2000.0,
        dy in -2000.0f64..2000.0,
        lock in any::<bool>(),
    ) {
        let extent = Extent::new(0.0, 0.0, w, h);
        for corner in Corner::ALL {
            let (sx, sy) = affine::corner_factors(corner, &extent, dx, dy, lock);
            prop_assert!(sx >= affine::MIN_SCALE_FACTOR);
            prop_assert!(sy >= affine::MIN_SCALE_FACTOR);
        }
        for side in Side::ALL {
            let (sx, sy) = affine::side_factors(side, &extent, dx, dy);
            prop_assert!(sx >= affine::MIN_SCALE_FACTOR && sy >= affine::MIN_SCALE_FACTOR);
        }
    }

    #[test]
    fn prop_drag_steps_do_not_compound(
        start in ring(),
        steps in prop::collection::vec((-80.0f64..80.0, -80.0f64..80.0), 1..10),
    ) {
        let ctx = DragContext::new(Coordinate::new(0.0, 0.0), &start, false);
        let kind = TransformKind::Translate;
        let (lx, ly) = *steps.last().unwrap();
        let mut last = start.clone();
        for (x, y) in steps {
            last = apply(kind, &start, &ctx, Coordinate::new(x, y)).unwrap();
        }
        let direct = apply(kind, &start, &ctx, Coordinate::new(lx, ly)).unwrap();
        prop_assert_eq!(last, direct);
    }

    #[test]
    fn prop_history_stays_bounded(cap in 1usize..20, saves in 1usize..60) {
        let mut history = SnapshotHistory::new(cap);
        for i in 0..saves {
            history.save(Geometry::point(i as f64, 0.0), ActionType::Translate);
            prop_assert!(history.len() <= cap);
            prop_assert_eq!(history.undo_depth(), history.len() - 1);
            prop_assert!(!history.can_redo());
        }
    }
}

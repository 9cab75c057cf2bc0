//! Pointer callbacks.

use tracing::{debug, trace, warn};

use shapekit_core::{Coordinate, Geometry, Pixel, ShapeId};

use super::{DragState, TransformInteraction};
use crate::events::TransformEvent;
use crate::handles::{Handle, HandleKind};
use crate::history::ActionType;
use crate::hit_test::{resolve_handle_at, resolve_shape_at};
use crate::pointer::{CursorHint, PointerButton, PointerEvent, PointerKind};
use crate::scene::TransformHost;
use crate::transform::{self, vertex, DragContext, TransformKind};

impl TransformInteraction {
    /// Routes a pointer event to its callback and returns the cursor the
    /// shell should show afterwards.
    pub fn dispatch<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> CursorHint {
        match event.kind {
            PointerKind::Down => {
                if self.pointer_down(host, event.pixel, event.button) {
                    CursorHint::Grabbing
                } else {
                    self.pointer_move(host, event.pixel)
                }
            }
            PointerKind::Drag => {
                self.pointer_drag(host, event.pixel);
                if self.is_transforming() {
                    CursorHint::Grabbing
                } else {
                    CursorHint::Default
                }
            }
            PointerKind::Up => {
                self.pointer_up(host, event.pixel);
                self.pointer_move(host, event.pixel)
            }
            PointerKind::Move => self.pointer_move(host, event.pixel),
        }
    }

    /// Handles a press. Returns true when a drag begins.
    pub fn pointer_down<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        pixel: Pixel,
        button: PointerButton,
    ) -> bool {
        if !self.active {
            return false;
        }
        // The release of the previous drag never arrived.
        self.abandon_drag(host);

        let at = host.pixel_to_map(pixel);
        let tolerance = self.options.tolerance_at(host.resolution());

        if let Some(selected) = self.selected {
            if let Some(handle) = resolve_handle_at(&self.handles, &at, tolerance).cloned() {
                return match button {
                    PointerButton::Primary => self.begin_handle_drag(host, selected, &handle, at),
                    PointerButton::Secondary => {
                        if let (HandleKind::Vertex, Some(index)) =
                            (handle.kind, handle.aux.vertex_index)
                        {
                            self.delete_vertex(host, selected, index);
                        }
                        false
                    }
                };
            }
        }

        if button == PointerButton::Secondary {
            return false;
        }

        match resolve_shape_at(&*host, &self.members, &at, tolerance) {
            Some(id) if self.selected == Some(id) => {
                self.options.translate_feature
                    && self.begin_drag(host, id, TransformKind::Translate, at, None)
            }
            Some(id) => {
                if let Err(e) = self.select(&*host, id) {
                    warn!("Cannot select {}: {}", id, e);
                    return false;
                }
                self.options.translate_feature
                    && self.begin_drag(host, id, TransformKind::Translate, at, None)
            }
            None => {
                self.clear_selection(host);
                false
            }
        }
    }

    /// Applies the active transform for the pointer at `pixel`.
    pub fn pointer_drag<H: TransformHost + ?Sized>(&mut self, host: &mut H, pixel: Pixel) {
        if !self.active {
            return;
        }
        let Some(drag) = self.drag.as_ref() else {
            return;
        };
        if drag.kind == TransformKind::Delete {
            return;
        }

        let at = host.pixel_to_map(pixel);
        let next = match transform::apply(drag.kind, &drag.snapshot, &drag.context, at) {
            Ok(next) => next,
            Err(e) => {
                debug!("{} step rejected: {}", drag.kind, e);
                return;
            }
        };
        if drag.kind == TransformKind::Rotate {
            let pivot = drag.context.pivot;
            self.rotation = pivot.angle_to(&at) - pivot.angle_to(&drag.context.start);
        }

        let shape = drag.shape;
        if !host.set_geometry(shape, next.clone()) {
            warn!("Dropping drag: {} is gone from the host", shape);
            self.drag = None;
            return;
        }
        trace!(shape = %shape, x = at.x, y = at.y, "transforming");
        self.events.emit(TransformEvent::Transforming {
            shape,
            geometry: next,
        });
    }

    /// Commits the active drag.
    pub fn pointer_up<H: TransformHost + ?Sized>(&mut self, host: &mut H, pixel: Pixel) {
        if !self.active {
            return;
        }
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.rotation = 0.0;

        if drag.kind == TransformKind::Delete {
            self.delete_shape(host, drag.shape);
            return;
        }

        // Settle on the release position in case the last motion was not delivered.
        let at = host.pixel_to_map(pixel);
        if let Ok(next) = transform::apply(drag.kind, &drag.snapshot, &drag.context, at) {
            host.set_geometry(drag.shape, next);
        }

        let Some(geometry) = host.geometry(drag.shape).cloned() else {
            warn!("{} vanished during {}", drag.shape, drag.kind);
            self.clear_selection(host);
            return;
        };

        if let Some(action) = drag.kind.action(drag.vertex_added) {
            let unchanged = self
                .history
                .current()
                .is_some_and(|entry| entry.geometry == geometry);
            if !unchanged {
                self.history.save(geometry.clone(), action);
            }
        }
        self.refresh_handles(host);
        debug!("{} on {} committed", drag.kind, drag.shape);
        self.events.emit(TransformEvent::TransformEnd {
            shape: drag.shape,
            geometry,
        });
    }

    /// Hover feedback: the cursor for whatever lies under `pixel`.
    pub fn pointer_move<H: TransformHost + ?Sized>(&self, host: &H, pixel: Pixel) -> CursorHint {
        if !self.active {
            return CursorHint::Default;
        }
        if self.drag.is_some() {
            return CursorHint::Grabbing;
        }

        let at = host.pixel_to_map(pixel);
        let tolerance = self.options.tolerance_at(host.resolution());
        if self.selected.is_some() {
            if let Some(handle) = resolve_handle_at(&self.handles, &at, tolerance) {
                return CursorHint::for_handle(handle);
            }
        }
        match resolve_shape_at(host, &self.members, &at, tolerance) {
            Some(id) if self.selected == Some(id) => {
                if self.options.translate_feature {
                    CursorHint::Move
                } else {
                    CursorHint::Default
                }
            }
            Some(_) => CursorHint::Pointer,
            None => CursorHint::Default,
        }
    }

    fn begin_handle_drag<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        shape: ShapeId,
        handle: &Handle,
        at: Coordinate,
    ) -> bool {
        if handle.kind == HandleKind::EdgeMidpoint {
            let Some(edge) = handle.aux.edge_index else {
                return false;
            };
            let Some(current) = host.geometry(shape) else {
                warn!("Cannot add vertex: {} is gone from the host", shape);
                return false;
            };
            let original = current.clone();
            return match vertex::insert_midpoint(current, edge) {
                Ok((next, index)) => {
                    host.set_geometry(shape, next);
                    debug!("Inserted vertex {} on edge {} of {}", index, edge, shape);
                    self.begin_drag(host, shape, TransformKind::Vertex { index }, at, Some(original))
                }
                Err(e) => {
                    debug!("Vertex insert rejected: {}", e);
                    false
                }
            };
        }

        match TransformKind::for_handle(handle) {
            Some(kind) => self.begin_drag(host, shape, kind, at, None),
            None => false,
        }
    }

    fn begin_drag<H: TransformHost + ?Sized>(
        &mut self,
        host: &H,
        shape: ShapeId,
        kind: TransformKind,
        at: Coordinate,
        inserted_from: Option<Geometry>,
    ) -> bool {
        let Some(snapshot) = host.geometry(shape).cloned() else {
            warn!("Cannot start {}: {} is gone from the host", kind, shape);
            return false;
        };
        let context = DragContext::new(at, &snapshot, self.options.keep_aspect_ratio);
        let vertex_added = inserted_from.is_some();
        let original = inserted_from.unwrap_or_else(|| snapshot.clone());
        self.drag = Some(DragState {
            kind,
            shape,
            snapshot,
            original,
            context,
            vertex_added,
        });
        self.rotation = 0.0;
        // Hidden until the drag ends.
        self.handles.clear();
        debug!("Started {} on {}", kind, shape);
        self.events.emit(TransformEvent::TransformStart {
            shape,
            operation: kind,
        });
        true
    }

    /// Secondary press on a vertex handle.
    fn delete_vertex<H: TransformHost + ?Sized>(&mut self, host: &mut H, shape: ShapeId, index: usize) {
        let Some(current) = host.geometry(shape) else {
            warn!("Cannot delete vertex: {} is gone from the host", shape);
            return;
        };
        let next = match vertex::delete_vertex(current, index) {
            Ok((next, _)) => next,
            Err(e) => {
                debug!("Vertex delete rejected on {}: {}", shape, e);
                return;
            }
        };

        self.events.emit(TransformEvent::TransformStart {
            shape,
            operation: TransformKind::Vertex { index },
        });
        host.set_geometry(shape, next.clone());
        self.history.save(next.clone(), ActionType::DeleteVertex);
        self.refresh_handles(host);
        debug!("Deleted vertex {} of {}", index, shape);
        self.events.emit(TransformEvent::TransformEnd {
            shape,
            geometry: next,
        });
    }

    /// Release on the delete handle.
    fn delete_shape<H: TransformHost + ?Sized>(&mut self, host: &mut H, shape: ShapeId) {
        self.members.retain(|id| *id != shape);
        debug!("Deleted {}", shape);
        self.events.emit(TransformEvent::DeleteFeature { shape });
        if self.selected == Some(shape) {
            self.clear_selection(host);
        }
    }
}

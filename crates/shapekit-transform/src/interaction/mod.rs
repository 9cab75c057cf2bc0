//! The transform interaction: selection, drag lifecycle and history.
//!
//! One `TransformInteraction` drives at most one selected shape and at most
//! one drag. It holds shape ids only; the host is passed into every call that
//! needs geometry or projection.
//!
//! ```text
//! Idle ──down on member──▶ Selected ──down on handle──▶ Transforming
//!  ▲                         │  ▲                             │
//!  └──down on empty space────┘  └───────────up────────────────┘
//! ```

mod gestures;
mod shared;

pub use shared::{SharedInteraction, WeakInteraction};

use std::fmt;

use tracing::{debug, warn};

use shapekit_core::{Geometry, InteractionError, ShapeId, TransformOptions};

use crate::events::{EventDispatcher, EventFilter, SubscriptionId, TransformEvent};
use crate::handles::{generate_handles, Handle};
use crate::history::{ActionType, SnapshotHistory, DEFAULT_MAX_ENTRIES};
use crate::scene::TransformHost;
use crate::transform::{DragContext, TransformKind};

/// Coarse state of the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Selected(ShapeId),
    Transforming { shape: ShapeId, kind: TransformKind },
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Selected(shape) => write!(f, "selected {shape}"),
            SessionState::Transforming { shape, kind } => write!(f, "transforming {shape} ({kind})"),
        }
    }
}

/// State captured at pointer-down for the current drag.
#[derive(Debug, Clone)]
struct DragState {
    kind: TransformKind,
    shape: ShapeId,
    snapshot: Geometry,
    /// Geometry before the gesture touched it; differs from `snapshot` only
    /// when the press inserted a vertex
    original: Geometry,
    context: DragContext,
    /// Set when the drag began by inserting a vertex at an edge midpoint
    vertex_added: bool,
}

#[derive(Debug)]
pub struct TransformInteraction {
    options: TransformOptions,
    active: bool,
    members: Vec<ShapeId>,
    selected: Option<ShapeId>,
    handles: Vec<Handle>,
    drag: Option<DragState>,
    /// Angle of the rotate drag in progress, in radians
    rotation: f64,
    history: SnapshotHistory,
    events: EventDispatcher,
}

impl Default for TransformInteraction {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl TransformInteraction {
    pub fn new(options: TransformOptions) -> Self {
        Self::with_history_capacity(options, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_history_capacity(options: TransformOptions, capacity: usize) -> Self {
        Self {
            options,
            active: false,
            members: Vec::new(),
            selected: None,
            handles: Vec::new(),
            drag: None,
            rotation: 0.0,
            history: SnapshotHistory::new(capacity),
            events: EventDispatcher::new(),
        }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Replaces the options and rebuilds the handles of the current selection.
    pub fn set_options<H: TransformHost + ?Sized>(&mut self, host: &H, options: TransformOptions) {
        self.options = options;
        self.refresh_handles(host);
    }

    /// Starts accepting pointer input.
    pub fn start(&mut self) {
        if !self.active {
            debug!("Transform interaction started");
        }
        self.active = true;
    }

    /// Stops accepting pointer input and drops the selection, its handles and
    /// its history. A drag in progress is rolled back first.
    pub fn stop<H: TransformHost + ?Sized>(&mut self, host: &mut H) {
        self.clear_selection(host);
        if self.active {
            debug!("Transform interaction stopped");
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> SessionState {
        match (&self.drag, self.selected) {
            (Some(drag), _) => SessionState::Transforming {
                shape: drag.shape,
                kind: drag.kind,
            },
            (None, Some(shape)) => SessionState::Selected(shape),
            (None, None) => SessionState::Idle,
        }
    }

    // ---- membership ----

    /// Makes `id` eligible for selection. Later additions sit on top.
    pub fn add_shape(&mut self, id: ShapeId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    /// Removes `id` from the membership collection, deselecting it first.
    pub fn remove_shape<H: TransformHost + ?Sized>(&mut self, host: &mut H, id: ShapeId) -> bool {
        if self.selected == Some(id) {
            self.clear_selection(host);
        }
        let before = self.members.len();
        self.members.retain(|other| *other != id);
        self.members.len() != before
    }

    /// Replaces the membership collection. The selection survives only if it
    /// is still a member.
    pub fn set_shapes<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        ids: impl IntoIterator<Item = ShapeId>,
    ) {
        self.members.clear();
        for id in ids {
            self.add_shape(id);
        }
        if let Some(selected) = self.selected {
            if !self.members.contains(&selected) {
                self.clear_selection(host);
            }
        }
    }

    pub fn members(&self) -> &[ShapeId] {
        &self.members
    }

    pub fn is_member(&self, id: ShapeId) -> bool {
        self.members.contains(&id)
    }

    // ---- selection ----

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn is_transforming(&self) -> bool {
        self.drag.is_some()
    }

    /// Selects `id`. Returns false (and logs why) when the shape cannot be
    /// selected.
    pub fn select_shape<H: TransformHost + ?Sized>(&mut self, host: &H, id: ShapeId) -> bool {
        if !self.active {
            debug!(shape = %id, "Selection ignored while stopped");
            return false;
        }
        match self.select(host, id) {
            Ok(()) => true,
            Err(e) => {
                warn!("Cannot select {}: {}", id, e);
                false
            }
        }
    }

    fn select<H: TransformHost + ?Sized>(
        &mut self,
        host: &H,
        id: ShapeId,
    ) -> Result<(), InteractionError> {
        if self.drag.is_some() {
            return Err(InteractionError::TransformInProgress);
        }
        if !self.is_member(id) {
            return Err(InteractionError::NotMember(id));
        }
        let geometry = host
            .geometry(id)
            .cloned()
            .ok_or(InteractionError::UnknownShape(id))?;
        if self.selected == Some(id) {
            return Ok(());
        }

        let previous = self.selected.replace(id);
        self.history.clear();
        self.handles = generate_handles(id, &geometry, &self.options, host.resolution());
        self.history.save(geometry, ActionType::Select);
        debug!("Selection changed {:?} -> {}", previous, id);
        self.events.emit(TransformEvent::SelectionChange {
            previous,
            next: Some(id),
        });
        Ok(())
    }

    /// Drops the selection, its handles and its history. A drag in progress
    /// is rolled back first.
    pub fn clear_selection<H: TransformHost + ?Sized>(&mut self, host: &mut H) {
        self.abandon_drag(host);
        let Some(previous) = self.selected.take() else {
            return;
        };
        self.handles.clear();
        self.history.clear();
        debug!("Selection cleared ({})", previous);
        self.events.emit(TransformEvent::SelectionChange {
            previous: Some(previous),
            next: None,
        });
    }

    /// Restores the geometry an unfinished drag started from, so the host
    /// never keeps an edit the history has not recorded.
    fn abandon_drag<H: TransformHost + ?Sized>(&mut self, host: &mut H) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.rotation = 0.0;
        debug!("Rolling back unfinished {} on {}", drag.kind, drag.shape);
        if host.set_geometry(drag.shape, drag.original.clone()) {
            self.events.emit(TransformEvent::TransformEnd {
                shape: drag.shape,
                geometry: drag.original,
            });
        } else {
            warn!("Cannot roll back {}: gone from the host", drag.shape);
        }
        self.refresh_handles(host);
    }

    // ---- handles ----

    /// Handles of the selected shape. Empty while a drag is in progress.
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Rebuilds the handles from the selected shape's current geometry.
    ///
    /// Call after the host changes zoom, since handle spacing is given in pixels.
    pub fn refresh_handles<H: TransformHost + ?Sized>(&mut self, host: &H) {
        if self.drag.is_some() {
            return;
        }
        self.handles = match self.selected {
            Some(id) => match host.geometry(id) {
                Some(geometry) => {
                    generate_handles(id, geometry, &self.options, host.resolution())
                }
                None => {
                    warn!("Selected {} is gone from the host", id);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    /// Angle of the rotate drag in progress, in radians; 0 otherwise.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation
    }

    // ---- history ----

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Changes the history bound for this and later selections.
    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    pub fn can_undo(&self) -> bool {
        self.drag.is_none() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.drag.is_none() && self.history.can_redo()
    }

    /// Restores the previous snapshot of the selected shape.
    ///
    /// Returns false at the start of history, with no selection, or while a
    /// drag is in progress.
    pub fn undo<H: TransformHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.step_history(host, true)
    }

    /// Reapplies the next snapshot of the selected shape.
    pub fn redo<H: TransformHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.step_history(host, false)
    }

    fn step_history<H: TransformHost + ?Sized>(&mut self, host: &mut H, back: bool) -> bool {
        if self.drag.is_some() {
            debug!("History step ignored while transforming");
            return false;
        }
        let Some(shape) = self.selected else {
            return false;
        };
        if host.geometry(shape).is_none() {
            warn!("Cannot restore {}: {}", shape, InteractionError::UnknownShape(shape));
            return false;
        }
        let restored = if back {
            self.history.undo()
        } else {
            self.history.redo()
        };
        let Some(geometry) = restored.cloned() else {
            return false;
        };
        host.set_geometry(shape, geometry);
        self.refresh_handles(host);
        debug!(
            "{} on {} (cursor {})",
            if back { "Undo" } else { "Redo" },
            shape,
            self.history.undo_depth()
        );
        true
    }

    // ---- events ----

    /// Registers an event handler.
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: FnMut(&TransformEvent) + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn events_mut(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }
}

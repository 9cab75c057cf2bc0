//! Notifications emitted by a transform interaction.
//!
//! Handlers run synchronously on the caller's thread, inside the pointer
//! callback that produced the event, and must not call back into the
//! interaction that is dispatching to them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shapekit_core::{Geometry, ShapeId};

use crate::transform::TransformKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TransformEvent {
    /// A drag began on `shape`
    TransformStart {
        shape: ShapeId,
        operation: TransformKind,
    },
    /// One drag step was applied
    Transforming { shape: ShapeId, geometry: Geometry },
    /// A drag (or a one-shot vertex delete) finished
    TransformEnd { shape: ShapeId, geometry: Geometry },
    /// The shape was removed from the membership collection
    DeleteFeature { shape: ShapeId },
    SelectionChange {
        previous: Option<ShapeId>,
        next: Option<ShapeId>,
    },
}

impl TransformEvent {
    /// Wire name of the notification.
    pub fn name(&self) -> &'static str {
        match self {
            TransformEvent::TransformStart { .. } => "transformstart",
            TransformEvent::Transforming { .. } => "transforming",
            TransformEvent::TransformEnd { .. } => "transformend",
            TransformEvent::DeleteFeature { .. } => "deletefeature",
            TransformEvent::SelectionChange { .. } => "selectionchange",
        }
    }

    pub fn category(&self) -> EventCategory {
        match self {
            TransformEvent::TransformStart { .. }
            | TransformEvent::Transforming { .. }
            | TransformEvent::TransformEnd { .. } => EventCategory::Transform,
            TransformEvent::DeleteFeature { .. } => EventCategory::Delete,
            TransformEvent::SelectionChange { .. } => EventCategory::Selection,
        }
    }

    /// The shape the event is about. Selection changes report the new selection.
    pub fn shape(&self) -> Option<ShapeId> {
        match self {
            TransformEvent::TransformStart { shape, .. }
            | TransformEvent::Transforming { shape, .. }
            | TransformEvent::TransformEnd { shape, .. }
            | TransformEvent::DeleteFeature { shape } => Some(*shape),
            TransformEvent::SelectionChange { next, .. } => *next,
        }
    }
}

impl fmt::Display for TransformEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformEvent::TransformStart { shape, operation } => {
                write!(f, "{} {shape} ({operation})", self.name())
            }
            TransformEvent::SelectionChange { previous, next } => {
                let show = |s: &Option<ShapeId>| s.map_or_else(|| "none".to_string(), |id| id.to_string());
                write!(f, "{} {} -> {}", self.name(), show(previous), show(next))
            }
            other => match other.shape() {
                Some(shape) => write!(f, "{} {shape}", other.name()),
                None => f.write_str(other.name()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// transformstart, transforming and transformend
    Transform,
    Delete,
    Selection,
}

/// Filter to receive only some events
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &TransformEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Listener interface for transform notifications.
///
/// Every method has an empty default, so implementors override only what
/// they care about.
pub trait TransformListener {
    fn on_transform_start(&mut self, _shape: ShapeId, _operation: TransformKind) {}

    fn on_transforming(&mut self, _shape: ShapeId, _geometry: &Geometry) {}

    fn on_transform_end(&mut self, _shape: ShapeId, _geometry: &Geometry) {}

    fn on_delete_feature(&mut self, _shape: ShapeId) {}

    fn on_selection_change(&mut self, _previous: Option<ShapeId>, _next: Option<ShapeId>) {}
}

type EventHandler = Box<dyn FnMut(&TransformEvent)>;

/// Ordered list of synchronous event handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<(SubscriptionId, EventFilter, EventHandler)>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler; handlers run in registration order.
    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: FnMut(&TransformEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.push((id, filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Adapts a [`TransformListener`] into a handler.
    pub fn subscribe_listener<L>(&mut self, mut listener: L) -> SubscriptionId
    where
        L: TransformListener + 'static,
    {
        self.subscribe(EventFilter::All, move |event| match event {
            TransformEvent::TransformStart { shape, operation } => {
                listener.on_transform_start(*shape, *operation)
            }
            TransformEvent::Transforming { shape, geometry } => {
                listener.on_transforming(*shape, geometry)
            }
            TransformEvent::TransformEnd { shape, geometry } => {
                listener.on_transform_end(*shape, geometry)
            }
            TransformEvent::DeleteFeature { shape } => listener.on_delete_feature(*shape),
            TransformEvent::SelectionChange { previous, next } => {
                listener.on_selection_change(*previous, *next)
            }
        })
    }

    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(other, _, _)| *other != id);
        let removed = self.handlers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit(&mut self, event: TransformEvent) {
        tracing::trace!(event = event.name(), "emit");
        for (_, filter, handler) in self.handlers.iter_mut() {
            if filter.matches(&event) {
                handler(&event);
            }
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

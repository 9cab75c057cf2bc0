//! # ShapeKit Transform
//!
//! Direct manipulation of a single selected shape: the handles drawn around
//! it, hit testing against those handles and the member shapes, the transform
//! algorithms behind each handle, a bounded undo/redo history and the
//! pointer-driven state machine that ties them together.
//!
//! ## Architecture
//!
//! ```text
//! TransformInteraction (session state machine)
//!   ├── Hit tester      handles first, then member shapes
//!   ├── Handle model    regenerated after every committed edit
//!   ├── Transforms      pure functions of the drag-start snapshot
//!   ├── History         snapshots of the selected shape
//!   └── Events          transformstart / transforming / transformend / ...
//!
//! TransformHost = ShapeHost (geometry storage) + MapSurface (projection)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::{Coordinate, Geometry, MapSurface, TransformOptions, Viewport};
//! use shapekit_transform::{PointerEvent, Scene, TransformInteraction};
//!
//! let mut scene = Scene::new(Viewport::new(400.0, 400.0));
//! let id = scene.add(Geometry::point(0.0, 0.0));
//!
//! let mut interaction = TransformInteraction::new(TransformOptions {
//!     translate_feature: true,
//!     ..Default::default()
//! });
//! interaction.add_shape(id);
//! interaction.start();
//!
//! let from = scene.map_to_pixel(Coordinate::new(0.0, 0.0));
//! let to = scene.map_to_pixel(Coordinate::new(10.0, 5.0));
//! interaction.dispatch(&mut scene, PointerEvent::down(from.x, from.y));
//! interaction.dispatch(&mut scene, PointerEvent::drag(to.x, to.y));
//! interaction.dispatch(&mut scene, PointerEvent::up(to.x, to.y));
//!
//! assert_eq!(scene.store.get(id), Some(&Geometry::point(10.0, 5.0)));
//! ```

pub mod events;
pub mod handles;
pub mod history;
pub mod interaction;
pub mod pointer;
pub mod scene;
pub mod shape_store;
pub mod transform;

pub use events::{
    EventCategory, EventDispatcher, EventFilter, SubscriptionId, TransformEvent, TransformListener,
};
pub use handles::{generate_handles, Corner, Handle, HandleAux, HandleKind, Side};
pub use history::{ActionType, HistoryEntry, SnapshotHistory, DEFAULT_MAX_ENTRIES};
pub use hit_test::{resolve_handle_at, resolve_shape_at};
pub use interaction::{SessionState, SharedInteraction, TransformInteraction, WeakInteraction};
pub use pointer::{CursorHint, PointerButton, PointerEvent, PointerKind};
pub use scene::{Scene, TransformHost};
pub use shape_store::{ShapeHost, ShapeStore};
pub use transform::{DragContext, TransformKind};

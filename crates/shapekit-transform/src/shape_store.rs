//! Geometry storage seam.
//!
//! The engine never owns shapes. It refers to them by [`ShapeId`] and reads
//! or writes their geometry through [`ShapeHost`] on every call.

use std::collections::HashMap;

use shapekit_core::{Geometry, ShapeId};

/// Read/write access to the host engine's shape geometries.
pub trait ShapeHost {
    /// Current geometry of `id`, or `None` if the host does not know it.
    fn geometry(&self, id: ShapeId) -> Option<&Geometry>;

    /// Replaces the geometry of `id`. Returns false if the id is unknown.
    fn set_geometry(&mut self, id: ShapeId, geometry: Geometry) -> bool;
}

/// In-memory shape storage with id generation and draw order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Geometry>,
    draw_order: Vec<ShapeId>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Sets the next ID to be generated.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Adds a geometry on top of the draw order and returns its id.
    pub fn add(&mut self, geometry: Geometry) -> ShapeId {
        let id = self.generate_id();
        self.insert(id, geometry);
        id
    }

    /// Inserts or replaces a geometry under a caller-chosen id.
    pub fn insert(&mut self, id: ShapeId, geometry: Geometry) {
        if self.shapes.insert(id, geometry).is_none() {
            self.draw_order.push(id);
        }
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Geometry> {
        let removed = self.shapes.remove(&id)?;
        self.draw_order.retain(|other| *other != id);
        Some(removed)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Geometry> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Ids in draw order, bottom first.
    pub fn ids(&self) -> &[ShapeId] {
        &self.draw_order
    }

    /// Geometries in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Geometry)> {
        self.draw_order
            .iter()
            .filter_map(|id| self.shapes.get(id).map(|g| (*id, g)))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ShapeHost for ShapeStore {
    fn geometry(&self, id: ShapeId) -> Option<&Geometry> {
        self.get(id)
    }

    fn set_geometry(&mut self, id: ShapeId, geometry: Geometry) -> bool {
        match self.shapes.get_mut(&id) {
            Some(slot) => {
                *slot = geometry;
                true
            }
            None => false,
        }
    }
}

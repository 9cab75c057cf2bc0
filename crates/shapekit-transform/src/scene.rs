//! Reference host: a shape store seen through a viewport.

use shapekit_core::{Coordinate, Geometry, MapSurface, Pixel, ShapeId, Viewport};

use crate::shape_store::{ShapeHost, ShapeStore};

/// Everything the interaction needs from the host engine.
pub trait TransformHost: ShapeHost + MapSurface {}

impl<T: ShapeHost + MapSurface + ?Sized> TransformHost for T {}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub store: ShapeStore,
    pub viewport: Viewport,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            store: ShapeStore::new(),
            viewport,
        }
    }

    pub fn add(&mut self, geometry: Geometry) -> ShapeId {
        self.store.add(geometry)
    }
}

impl ShapeHost for Scene {
    fn geometry(&self, id: ShapeId) -> Option<&Geometry> {
        self.store.geometry(id)
    }

    fn set_geometry(&mut self, id: ShapeId, geometry: Geometry) -> bool {
        self.store.set_geometry(id, geometry)
    }
}

impl MapSurface for Scene {
    fn pixel_to_map(&self, pixel: Pixel) -> Coordinate {
        self.viewport.pixel_to_map(pixel)
    }

    fn map_to_pixel(&self, coordinate: Coordinate) -> Pixel {
        self.viewport.map_to_pixel(coordinate)
    }

    fn resolution(&self) -> f64 {
        self.viewport.resolution()
    }
}

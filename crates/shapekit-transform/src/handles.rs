//! Handle model.
//!
//! Handles are plain values derived from the selected shape's current
//! geometry. They are regenerated from scratch after every committed edit and
//! never patched in place, so the visible set always matches the geometry.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use shapekit_core::{Coordinate, Extent, Geometry, ShapeId, TransformOptions};

/// Corner of the handle frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NE,
    SE,
    SW,
    NW,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::NE, Corner::SE, Corner::SW, Corner::NW];

    /// Position of this corner on `extent`.
    pub fn on(&self, extent: &Extent) -> Coordinate {
        match self {
            Corner::NE => extent.top_right(),
            Corner::SE => extent.bottom_right(),
            Corner::SW => extent.bottom_left(),
            Corner::NW => extent.top_left(),
        }
    }

    /// The diagonally opposite corner, which stays fixed while this one is dragged.
    pub fn opposite(&self) -> Corner {
        match self {
            Corner::NE => Corner::SW,
            Corner::SE => Corner::NW,
            Corner::SW => Corner::NE,
            Corner::NW => Corner::SE,
        }
    }
}

/// Side of the handle frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    N,
    E,
    S,
    W,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::N, Side::E, Side::S, Side::W];

    /// Midpoint of this side on `extent`.
    pub fn on(&self, extent: &Extent) -> Coordinate {
        let c = extent.center();
        match self {
            Side::N => Coordinate::new(c.x, extent.max_y),
            Side::E => Coordinate::new(extent.max_x, c.y),
            Side::S => Coordinate::new(c.x, extent.min_y),
            Side::W => Coordinate::new(extent.min_x, c.y),
        }
    }

    /// True for the sides that stretch along X.
    pub fn is_horizontal_axis(&self) -> bool {
        matches!(self, Side::E | Side::W)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Dashed outline of the padded extent
    Boundary,
    Rotate,
    /// Line joining the frame to the rotate handle
    RotateGuideLine,
    ScaleCorner(Corner),
    /// The shape body. Never generated here; body presses resolve through
    /// shape hit testing, and hosts may build one for their own overlays.
    Translate,
    TranslateCenter,
    StretchSide(Side),
    Delete,
    Vertex,
    EdgeMidpoint,
}

impl HandleKind {
    /// Visual-only handles are drawn but never start a transform.
    pub fn is_visual_only(&self) -> bool {
        matches!(self, HandleKind::Boundary | HandleKind::RotateGuideLine)
    }
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Boundary => write!(f, "boundary"),
            HandleKind::Rotate => write!(f, "rotate"),
            HandleKind::RotateGuideLine => write!(f, "rotate-guide"),
            HandleKind::ScaleCorner(c) => write!(f, "scale-{c:?}"),
            HandleKind::Translate => write!(f, "translate"),
            HandleKind::TranslateCenter => write!(f, "translate-center"),
            HandleKind::StretchSide(s) => write!(f, "stretch-{s:?}"),
            HandleKind::Delete => write!(f, "delete"),
            HandleKind::Vertex => write!(f, "vertex"),
            HandleKind::EdgeMidpoint => write!(f, "edge-midpoint"),
        }
    }
}

/// Extra addressing carried by vertex-level handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandleAux {
    pub vertex_index: Option<usize>,
    pub edge_index: Option<usize>,
    pub circle_center: bool,
    pub circle_edge: bool,
}

impl HandleAux {
    pub fn vertex(index: usize) -> Self {
        Self {
            vertex_index: Some(index),
            ..Default::default()
        }
    }

    pub fn edge(index: usize) -> Self {
        Self {
            edge_index: Some(index),
            ..Default::default()
        }
    }
}

/// A grabbable (or purely visual) affordance around the selected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub kind: HandleKind,
    /// Anchor used for hit testing
    pub position: Coordinate,
    /// Drawn path for line-like handles (boundary outline, rotate guide).
    /// Empty for point handles.
    pub path: SmallVec<[Coordinate; 5]>,
    pub owner: ShapeId,
    pub aux: HandleAux,
}

impl Handle {
    fn point(owner: ShapeId, kind: HandleKind, position: Coordinate) -> Self {
        Self {
            kind,
            position,
            path: SmallVec::new(),
            owner,
            aux: HandleAux::default(),
        }
    }

    fn with_aux(mut self, aux: HandleAux) -> Self {
        self.aux = aux;
        self
    }

    /// Distance from `c` to this handle. Line-like handles measure to their path.
    pub fn distance_to(&self, c: &Coordinate) -> f64 {
        if self.path.len() < 2 {
            return self.position.distance_to(c);
        }
        self.path
            .windows(2)
            .map(|w| c.distance_to_segment(&w[0], &w[1]))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Builds the full handle set for `geometry` owned by `owner`.
///
/// `resolution` is map units per pixel; it keeps handle spacing constant on
/// screen at every zoom level.
pub fn generate_handles(
    owner: ShapeId,
    geometry: &Geometry,
    options: &TransformOptions,
    resolution: f64,
) -> Vec<Handle> {
    let pad = options.padding_at(resolution);
    match geometry {
        Geometry::Point(c) => {
            let mut handles = Vec::with_capacity(1);
            if options.enable_delete {
                handles.push(Handle::point(owner, HandleKind::Delete, c.offset(pad, pad)));
            }
            handles
        }
        Geometry::Circle(circle) => {
            let mut handles = vec![
                Handle::point(owner, HandleKind::Vertex, circle.center).with_aux(HandleAux {
                    circle_center: true,
                    ..Default::default()
                }),
                Handle::point(
                    owner,
                    HandleKind::Vertex,
                    circle.center.offset(circle.radius, 0.0),
                )
                .with_aux(HandleAux {
                    circle_edge: true,
                    ..Default::default()
                }),
            ];
            if options.enable_delete {
                let frame = geometry.extent().buffer(pad);
                handles.push(Handle::point(
                    owner,
                    HandleKind::Delete,
                    Coordinate::new(frame.max_x + pad, frame.max_y + pad),
                ));
            }
            handles
        }
        Geometry::LineString(_) | Geometry::Polygon(_) => {
            frame_handles(owner, geometry, options, pad)
        }
    }
}

fn frame_handles(
    owner: ShapeId,
    geometry: &Geometry,
    options: &TransformOptions,
    pad: f64,
) -> Vec<Handle> {
    let extent = geometry.extent();
    let frame = extent.buffer(pad);
    let vertices = geometry.vertices();
    let edges = geometry.edges();
    let mut handles = Vec::with_capacity(12 + vertices.len() + edges.len());

    handles.push(Handle {
        kind: HandleKind::Boundary,
        position: frame.center(),
        path: SmallVec::from_buf(frame.outline()),
        owner,
        aux: HandleAux::default(),
    });

    if options.scale {
        for corner in Corner::ALL {
            handles.push(Handle::point(
                owner,
                HandleKind::ScaleCorner(corner),
                corner.on(&frame),
            ));
        }
    }

    if options.stretch {
        for side in Side::ALL {
            handles.push(Handle::point(
                owner,
                HandleKind::StretchSide(side),
                side.on(&frame),
            ));
        }
    }

    if options.rotate {
        let top = Side::N.on(&frame);
        let knob = top.offset(0.0, pad * 2.0);
        handles.push(Handle {
            kind: HandleKind::RotateGuideLine,
            position: top.midpoint(&knob),
            path: smallvec![top, knob],
            owner,
            aux: HandleAux::default(),
        });
        handles.push(Handle::point(owner, HandleKind::Rotate, knob));
    }

    if options.enable_delete {
        handles.push(Handle::point(
            owner,
            HandleKind::Delete,
            Coordinate::new(frame.max_x + pad, frame.max_y + pad),
        ));
    }

    if options.translate_center {
        handles.push(Handle::point(
            owner,
            HandleKind::TranslateCenter,
            extent.center(),
        ));
    }

    for (i, (a, b)) in edges.iter().enumerate() {
        handles.push(
            Handle::point(owner, HandleKind::EdgeMidpoint, a.midpoint(b)).with_aux(HandleAux::edge(i)),
        );
    }

    for (i, v) in vertices.iter().enumerate() {
        handles.push(Handle::point(owner, HandleKind::Vertex, *v).with_aux(HandleAux::vertex(i)));
    }

    handles
}

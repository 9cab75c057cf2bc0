use shapekit_core::{CircleGeometry, Coordinate, Geometry, GeometryError};

fn circle_of(start: &Geometry, edit: &'static str) -> Result<CircleGeometry, GeometryError> {
    match start {
        Geometry::Circle(circle) => Ok(*circle),
        other => Err(GeometryError::UnsupportedEdit {
            kind: other.kind(),
            edit,
        }),
    }
}

/// Moves the circle's center by (dx, dy).
pub fn recenter(start: &Geometry, dx: f64, dy: f64) -> Result<Geometry, GeometryError> {
    let circle = circle_of(start, "recenter")?;
    Ok(Geometry::Circle(CircleGeometry {
        center: circle.center.offset(dx, dy),
        radius: circle.radius,
    }))
}

/// Sets the radius to the distance from the center to `to`.
pub fn resize(start: &Geometry, to: Coordinate) -> Result<Geometry, GeometryError> {
    let circle = circle_of(start, "resize")?;
    Ok(Geometry::Circle(CircleGeometry {
        center: circle.center,
        radius: circle.center.distance_to(&to),
    }))
}

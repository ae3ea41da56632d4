//! Moving polygons around without changing their shape.
//!
//! Both the centroid and the relocation work directly on latitude and
//! longitude as if they were planar co-ordinates. This is fine for the
//! city-sized polygons drawn on a map but breaks down close to the poles or
//! across the antimeridian.

use log::trace;
use crate::error::Error;
use crate::world::Point;


/// Returns the centroid of a set of points.
///
/// This is the arithmetic mean of latitudes and longitudes. An empty set
/// has its centroid at (0, 0).
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default()
    }
    let (lat, lon) = points.iter().fold((0., 0.), |(lat, lon), point| {
        (lat + point.lat, lon + point.lon)
    });
    let count = points.len() as f64;
    Point::new(lat / count, lon / count)
}

/// Moves a polygon to a new center, keeping its shape.
///
/// The first point serves as the reference: every output point keeps its
/// offset from the reference, multiplied by `scale`. The new reference is
/// placed so that the centroid of the result is `new_center`. There is no
/// rotation, so all angles and the ratios of all edge lengths are kept.
///
/// The new reference is `new_center - scale * (centroid - reference)`.
/// For a scale other than 1 this deliberately differs from placing it at
/// `new_center - (centroid - reference)`, which would leave the scaled
/// result’s centroid off `new_center`. For a scale of 1 both agree.
///
/// Returns an empty vec if there are fewer than three points.
pub fn relocate(
    points: &[Point], new_center: Point, scale: f64
) -> Vec<Point> {
    if points.len() < 3 {
        trace!("cannot relocate {} points", points.len());
        return Vec::new()
    }

    let reference = points[0];
    let center = centroid(points);
    let new_reference = Point::new(
        new_center.lat - (center.lat - reference.lat) * scale,
        new_center.lon - (center.lon - reference.lon) * scale,
    );
    points.iter().map(|point| {
        Point::new(
            new_reference.lat + (point.lat - reference.lat) * scale,
            new_reference.lon + (point.lon - reference.lon) * scale,
        )
    }).collect()
}

/// Moves a polygon to a new center at its original size.
pub fn relocate_preserving_shape(
    points: &[Point], new_center: Point
) -> Vec<Point> {
    relocate(points, new_center, 1.)
}

/// Moves a polygon or returns an error if it has too few points.
pub fn try_relocate(
    points: &[Point], new_center: Point, scale: f64
) -> Result<Vec<Point>, Error> {
    Error::check_len(points.len(), 3)?;
    Ok(relocate(points, new_center, scale))
}


//============ Tests =========================================================

//! Approximating circles on the map.

use std::f64::consts::PI;
use crate::world::Point;


/// The length of one degree of latitude in metres.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// The number of points used for an equal-area circle.
pub const CIRCLE_SEGMENTS: usize = 32;


/// Returns `count` points on a circle around `center`.
///
/// The radius is converted into separate latitude and longitude offsets,
/// the latter corrected for the convergence of the meridians. The result
/// is an ellipse in degrees that approximates a circle on the ground at
/// moderate latitudes. Close to the poles, the longitude offset diverges.
///
/// The first point lies due east of the center and the points proceed
/// counter-clockwise.
pub fn circle_points(
    center: Point, radius_meters: f64, count: usize
) -> Vec<Point> {
    let lat_offset = radius_meters / METERS_PER_DEGREE;
    let lon_offset = radius_meters / (
        METERS_PER_DEGREE * center.lat_radians().cos()
    );
    (0..count).map(|i| {
        let angle = i as f64 * 2. * PI / count as f64;
        Point::new(
            center.lat + lat_offset * angle.sin(),
            center.lon + lon_offset * angle.cos(),
        )
    }).collect()
}

/// Returns a circle around `center` enclosing `area` square metres.
pub fn equal_area_circle(center: Point, area: f64) -> Vec<Point> {
    circle_points(center, (area / PI).sqrt(), CIRCLE_SEGMENTS)
}


//============ Tests =========================================================

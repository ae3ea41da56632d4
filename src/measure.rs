//! Measuring polygons on a spherical Earth.
//!
//! All functions take points in degrees and return metres or square metres.
//! The Earth is treated as a sphere of radius [`EARTH_RADIUS`].

use log::trace;
use crate::error::Error;
use crate::world::{wrap_radians, Point};


/// The mean radius of the Earth in metres.
pub const EARTH_RADIUS: f64 = 6_371_000.0;


//------------ AreaMethod ----------------------------------------------------

/// The formula used for calculating the area of a polygon.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AreaMethod {
    /// Integrates along the edges over longitude.
    ///
    /// Each edge contributes its longitude difference weighted by the sines
    /// of the latitudes of both its end points. This is exact for small
    /// polygons and fast, but degrades for polygons covering a large part
    /// of the globe.
    #[default]
    LongitudeIntegral,

    /// Sums the spherical excess of a fan of triangles.
    ///
    /// Each triangle’s excess is determined via L’Huilier’s theorem and
    /// signed by its orientation, so concave polygons are handled
    /// correctly.
    SphericalExcess,
}


//------------ Area ----------------------------------------------------------

/// Returns the area of a polygon in square metres.
///
/// The polygon is implicitly closed. Returns 0 if there are fewer than
/// three points.
pub fn polygon_area(points: &[Point]) -> f64 {
    polygon_area_with(points, AreaMethod::default())
}

/// Returns the area of a polygon using the given method.
pub fn polygon_area_with(points: &[Point], method: AreaMethod) -> f64 {
    if points.len() < 3 {
        trace!("area of {} points requested, returning 0", points.len());
        return 0.
    }
    match method {
        AreaMethod::LongitudeIntegral => longitude_integral(points),
        AreaMethod::SphericalExcess => spherical_excess(points),
    }
}

/// Returns the area of a polygon or an error if it has too few points.
pub fn try_polygon_area(points: &[Point]) -> Result<f64, Error> {
    Error::check_len(points.len(), 3)?;
    Ok(polygon_area(points))
}

fn longitude_integral(points: &[Point]) -> f64 {
    let total: f64 = edges(points).map(|(a, b)| {
        let dlon = wrap_radians(b.lon_radians() - a.lon_radians());
        dlon * (a.lat_radians().sin() + b.lat_radians().sin())
    }).sum();
    total.abs() * EARTH_RADIUS * EARTH_RADIUS / 2.
}

fn spherical_excess(points: &[Point]) -> f64 {
    let first = Vec3::from_point(points[0]);
    let total: f64 = points[1..].windows(2).map(|pair| {
        let b = Vec3::from_point(pair[0]);
        let c = Vec3::from_point(pair[1]);
        let excess = triangle_excess(points[0], pair[0], pair[1]);
        let orientation = first.dot(b.cross(c));
        if orientation < 0. { -excess } else { excess }
    }).sum();
    total.abs() * EARTH_RADIUS * EARTH_RADIUS
}

/// Returns the spherical excess of a triangle in steradians.
fn triangle_excess(p1: Point, p2: Point, p3: Point) -> f64 {
    let a = central_angle(p1, p2);
    let b = central_angle(p2, p3);
    let c = central_angle(p3, p1);
    let s = (a + b + c) / 2.;

    // Rounding can push a degenerate triangle’s product slightly negative.
    let product = (s / 2.).tan()
        * ((s - a) / 2.).tan()
        * ((s - b) / 2.).tan()
        * ((s - c) / 2.).tan();
    4. * product.max(0.).sqrt().atan()
}


//------------ Perimeter and Distance ----------------------------------------

/// Returns the perimeter of a polygon in metres.
///
/// This includes the closing edge from the last point back to the first.
/// Returns 0 if there are fewer than two points.
pub fn polygon_perimeter(points: &[Point]) -> f64 {
    if points.len() < 2 {
        trace!("perimeter of {} points requested, returning 0", points.len());
        return 0.
    }
    edges(points).map(|(a, b)| distance(a, b)).sum()
}

/// Returns the great-circle distance between two points in metres.
pub fn distance(a: Point, b: Point) -> f64 {
    central_angle(a, b) * EARTH_RADIUS
}

/// Returns the angle between two points as seen from the Earth’s center.
///
/// The result is in radians. This uses the atan2 form of the spherical law
/// of cosines which stays accurate for both very close and antipodal
/// points.
pub fn central_angle(a: Point, b: Point) -> f64 {
    let (sin_lat1, cos_lat1) = a.lat_radians().sin_cos();
    let (sin_lat2, cos_lat2) = b.lat_radians().sin_cos();
    let (sin_dlon, cos_dlon) = (b.lon_radians() - a.lon_radians()).sin_cos();

    let x = cos_lat2 * sin_dlon;
    let y = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    let z = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;
    (x * x + y * y).sqrt().atan2(z)
}

/// Returns an iterator over the edges of the closed ring.
fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points.iter().zip(points.iter().cycle().skip(1)).map(|(a, b)| (*a, *b))
}


//------------ Vec3 ----------------------------------------------------------

/// A vector in Earth-centered Cartesian space on the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    fn from_point(point: Point) -> Self {
        let (sin_lat, cos_lat) = point.lat_radians().sin_cos();
        let (sin_lon, cos_lon) = point.lon_radians().sin_cos();
        Vec3 { x: cos_lat * cos_lon, y: cos_lat * sin_lon, z: sin_lat }
    }

    fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn square(lat: f64, lon: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(lat, lon),
            Point::new(lat, lon + side),
            Point::new(lat + side, lon + side),
            Point::new(lat + side, lon),
        ]
    }

    fn rel_eq(left: f64, right: f64, tolerance: f64) -> bool {
        ((left - right) / right).abs() < tolerance
    }

    #[test]
    fn too_few_points() {
        assert_eq!(polygon_area(&[]), 0.);
        assert_eq!(
            polygon_area(&[Point::new(0., 0.), Point::new(1., 1.)]), 0.
        );
        assert_eq!(
            try_polygon_area(&[Point::new(0., 0.)]),
            Err(Error::TooFewPoints { needed: 3, got: 1 })
        );
        assert_eq!(polygon_perimeter(&[Point::new(1., 1.)]), 0.);
    }

    #[test]
    fn golden_triangle() {
        let triangle = [
            Point::new(0., 0.), Point::new(0., 0.01), Point::new(0.01, 0.)
        ];
        let area = polygon_area(&triangle);
        assert!(rel_eq(area, 6.182e5, 1e-3), "{}", area);

        // Planar shoelace with the metres-per-degree constant.
        let planar = 0.5 * 0.01 * 0.01 * 111_320f64.powi(2);
        assert!(rel_eq(area, planar, 0.01));
    }

    #[test]
    fn equator_square() {
        // About 1.1 km to a side.
        let side: f64 = 0.01;
        let meters = side.to_radians() * EARTH_RADIUS;
        let area = polygon_area(&square(0., 0., side));
        assert!(rel_eq(area, meters * meters, 0.01));
    }

    #[test]
    fn reversal_and_rotation() {
        let mut points = vec![
            Point::new(52.52, 13.40), Point::new(52.53, 13.42),
            Point::new(52.51, 13.45), Point::new(52.50, 13.41),
            Point::new(52.515, 13.405),
        ];
        let area = polygon_area(&points);
        points.rotate_left(2);
        assert!(rel_eq(polygon_area(&points), area, 1e-9));
        points.reverse();
        assert!(rel_eq(polygon_area(&points), area, 1e-9));
    }

    #[test]
    fn antimeridian() {
        let west = square(10., 179.995, 0.01);
        let wrapped: Vec<_> = west.iter().map(|p| {
            Point::new(p.lat, if p.lon > 180. { p.lon - 360. } else { p.lon })
        }).collect();
        let plain = polygon_area(&square(10., 0., 0.01));
        assert!(rel_eq(polygon_area(&wrapped), plain, 1e-6));
    }

    #[test]
    fn methods_agree() {
        let points = [
            Point::new(48.85, 2.35), Point::new(48.86, 2.37),
            Point::new(48.845, 2.38), Point::new(48.855, 2.36),
            Point::new(48.84, 2.34),
        ];
        let integral = polygon_area_with(
            &points, AreaMethod::LongitudeIntegral
        );
        let excess = polygon_area_with(&points, AreaMethod::SphericalExcess);
        assert!(rel_eq(excess, integral, 0.01), "{} {}", excess, integral);
    }

    #[test]
    fn triangle_perimeter() {
        let a = Point::new(40.0, -74.0);
        let b = Point::new(40.1, -73.9);
        let c = Point::new(39.95, -73.85);
        let expected = haversine(a, b) + haversine(b, c) + haversine(c, a);
        let perimeter = polygon_perimeter(&[a, b, c]);
        assert!((perimeter - expected).abs() < 1e-6);
    }

    #[test]
    fn two_point_perimeter_goes_there_and_back() {
        let a = Point::new(0., 0.);
        let b = Point::new(0., 1.);
        assert!(
            (polygon_perimeter(&[a, b]) - 2. * distance(a, b)).abs() < 1e-6
        );
    }

    #[test]
    fn central_angle_extremes() {
        let a = Point::new(0., 0.);
        assert_eq!(central_angle(a, a), 0.);
        let antipode = Point::new(0., 180.);
        assert!(
            (central_angle(a, antipode) - std::f64::consts::PI).abs() < 1e-12
        );
        let near = Point::new(0., 1e-9);
        assert!(rel_eq(central_angle(a, near), 1e-9f64.to_radians(), 1e-6));
    }

    #[test]
    fn degenerate_triangle_has_no_excess() {
        let a = Point::new(0., 10.);
        let b = Point::new(0., 10.01);
        let c = Point::new(0., 10.02);
        assert!(triangle_excess(a, b, c).abs() < 1e-12);
        assert_eq!(triangle_excess(a, a, a), 0.);
    }

    fn haversine(a: Point, b: Point) -> f64 {
        let dlat = b.lat_radians() - a.lat_radians();
        let dlon = b.lon_radians() - a.lon_radians();
        let h = (dlat / 2.).sin().powi(2)
            + a.lat_radians().cos() * b.lat_radians().cos()
                * (dlon / 2.).sin().powi(2);
        2. * EARTH_RADIUS * h.sqrt().asin()
    }
}

//! Types for referencing the real world.

use std::f64::consts::PI;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::error::Error;


//------------ Point ---------------------------------------------------------

/// A point on the surface of the Earth.
///
/// The point is expressed by its latitude and longitude in degrees. A valid
/// point has a latitude between -90 and 90 and a longitude between -180 and
/// 180. Use [`checked`][Self::checked] if you need this enforced; all the
/// geometry in this crate works on unchecked points, too.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Point {
    /// The longitude of the point.
    ///
    /// This is the west-east position of the point or its ‘x value.’
    pub lon: f64,

    /// The latitude of the point.
    ///
    /// This is the south-north position of the point or its ‘y value.’
    pub lat: f64,
}

impl Point {
    /// Creates a new point from latitude and longitude in degrees.
    ///
    /// Note the order of the arguments: latitude comes first.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Point { lon, lat }
    }

    /// Creates a new point, rejecting coordinates outside the valid range.
    pub fn checked(lat: f64, lon: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !(-90. ..=90.).contains(&lat) {
            return Err(Error::InvalidLatitude(lat))
        }
        if !lon.is_finite() || !(-180. ..=180.).contains(&lon) {
            return Err(Error::InvalidLongitude(lon))
        }
        Ok(Point { lon, lat })
    }

    /// Returns whether the point is within the valid coordinate range.
    pub fn is_valid(self) -> bool {
        Self::checked(self.lat, self.lon).is_ok()
    }

    /// Returns the latitude in radians.
    pub fn lat_radians(self) -> f64 {
        self.lat.to_radians()
    }

    /// Returns the longitude in radians.
    pub fn lon_radians(self) -> f64 {
        self.lon.to_radians()
    }
}

impl From<kurbo::Point> for Point {
    fn from(src: kurbo::Point) -> Self {
        Point { lon: src.x, lat: src.y }
    }
}

impl From<Point> for kurbo::Point {
    fn from(src: Point) -> Self {
        kurbo::Point::new(src.lon, src.lat)
    }
}


//------------ Span ----------------------------------------------------------

/// The angular extent of a region.
///
/// Both values are in degrees and describe the full extent, i.e., a region
/// stretches half the span to either side of its center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Span {
    /// The south-north extent.
    pub lat: f64,

    /// The west-east extent.
    pub lon: f64,
}

impl Span {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Span { lat, lon }
    }

    /// Returns whether both components are strictly positive.
    pub fn is_positive(self) -> bool {
        self.lat > 0. && self.lon > 0.
    }

    /// Returns a span with both components multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Span { lat: self.lat * factor, lon: self.lon * factor }
    }

    /// Returns a span with both components raised to at least `min`.
    pub fn at_least(self, min: f64) -> Self {
        Span { lat: self.lat.max(min), lon: self.lon.max(min) }
    }

    /// Returns a span with both components lowered to at most `max`.
    pub fn at_most(self, max: f64) -> Self {
        Span { lat: self.lat.min(max), lon: self.lon.min(max) }
    }
}


//------------ Rect ----------------------------------------------------------

/// A region bounded by meridians and parallels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Rect {
    pub sw: Point,
    pub ne: Point,
}

impl Rect {
    /// Returns whether the point is inside the rect or on its boundary.
    pub fn contains(&self, point: Point) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&point.lat)
            && (self.sw.lon..=self.ne.lon).contains(&point.lon)
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(src: kurbo::Rect) -> Rect {
        Rect {
            sw: Point { lon: src.x0, lat: src.y0 },
            ne: Point { lon: src.x1, lat: src.y1 }
        }
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(src: Rect) -> kurbo::Rect {
        kurbo::Rect::new(src.sw.lon, src.sw.lat, src.ne.lon, src.ne.lat)
    }
}


//------------ Angle helpers -------------------------------------------------

/// Normalizes a longitude difference in radians into `(-π, π]`.
///
/// Without this, an edge crossing the antimeridian would be treated as
/// going almost all the way around the globe.
pub fn wrap_radians(delta: f64) -> f64 {
    if delta > PI {
        delta - 2. * PI
    }
    else if delta <= -PI {
        delta + 2. * PI
    }
    else {
        delta
    }
}

/// Normalizes a longitude difference in degrees into `(-180, 180]`.
pub fn wrap_degrees(delta: f64) -> f64 {
    wrap_radians(delta.to_radians()).to_degrees()
}


//============ Tests =========================================================

//! The visible part of a map.
//!
//! A [`Viewport`] describes which region of the world is currently shown
//! and how large the view is in pixels. It translates between geographic
//! co-ordinates and pixel positions using a simple linear, equirectangular
//! mapping. This matches what a map view shows closely enough at the scales
//! used for drawing, but it isn’t a real map projection.
//!
//! Regions crossing the antimeridian are not handled: the mapping is
//! linear in longitude and simply continues beyond ±180°.

use kurbo::{BezPath, Size};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::relocate::centroid;
use crate::world::{Point, Rect, Span};


//------------ Viewport ------------------------------------------------------

/// A rectangular region of the map shown on a screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Viewport {
    /// The point shown in the middle of the view.
    pub center: Point,

    /// The extent of the shown region in degrees.
    pub span: Span,

    /// The size of the view in pixels.
    pub size: Size,
}

impl Viewport {
    /// Creates a new viewport without checking its values.
    ///
    /// Projection with a zero span or size produces garbage.
    pub const fn new(center: Point, span: Span, size: Size) -> Self {
        Viewport { center, span, size }
    }

    /// Creates a new viewport, rejecting an empty span or size.
    pub fn try_new(
        center: Point, span: Span, size: Size
    ) -> Result<Self, Error> {
        if !span.is_positive() {
            return Err(Error::EmptySpan)
        }
        if !(size.width > 0. && size.height > 0.) {
            return Err(Error::EmptySize)
        }
        Ok(Self::new(center, span, size))
    }

    pub fn with_center(self, center: Point) -> Self {
        Viewport { center, ..self }
    }

    pub fn with_span(self, span: Span) -> Self {
        Viewport { span, ..self }
    }

    pub fn with_size(self, size: Size) -> Self {
        Viewport { size, ..self }
    }

    /// Returns the geographic region covered by the view.
    pub fn bounds(&self) -> Rect {
        Rect {
            sw: Point::new(
                self.center.lat - self.span.lat / 2.,
                self.center.lon - self.span.lon / 2.,
            ),
            ne: Point::new(
                self.center.lat + self.span.lat / 2.,
                self.center.lon + self.span.lon / 2.,
            ),
        }
    }

    /// Returns whether a point is within the view.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// # Projection
///
impl Viewport {
    /// Returns the pixel position of a geographic point.
    ///
    /// The origin is the top-left corner, so north is up.
    pub fn point_for_coordinate(&self, coord: Point) -> kurbo::Point {
        let bounds = self.bounds();
        let x = (coord.lon - bounds.sw.lon) / self.span.lon;
        let y = 1. - (coord.lat - bounds.sw.lat) / self.span.lat;
        kurbo::Point::new(x * self.size.width, y * self.size.height)
    }

    /// Returns the geographic point shown at a pixel position.
    ///
    /// This is the exact inverse of
    /// [`point_for_coordinate`][Self::point_for_coordinate].
    pub fn coordinate_for_point(&self, pixel: kurbo::Point) -> Point {
        let x = pixel.x / self.size.width;
        let y = pixel.y / self.size.height;
        Point::new(
            self.center.lat + self.span.lat / 2. - y * self.span.lat,
            self.center.lon - self.span.lon / 2. + x * self.span.lon,
        )
    }

    /// Returns the closed outline of a polygon in pixel co-ordinates.
    ///
    /// The path is empty if there are no points.
    pub fn outline(&self, points: &[Point]) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return path
        };
        path.move_to(self.point_for_coordinate(*first));
        for point in iter {
            path.line_to(self.point_for_coordinate(*point));
        }
        path.close_path();
        path
    }

    /// Returns the outline of a polygon drawn in the middle of the view.
    ///
    /// The polygon is projected with the scale of the viewport but as if the
    /// view was centered on the polygon’s centroid, so it stays in place
    /// when the view is panned. The path is empty for fewer than three
    /// points.
    pub fn anchored_outline(&self, points: &[Point]) -> BezPath {
        if points.len() < 3 {
            return BezPath::new()
        }
        self.with_center(centroid(points)).outline(points)
    }
}

/// # Zooming
///
impl Viewport {
    /// Returns the viewport zoomed in by one step.
    ///
    /// The span never shrinks below the minimum span. A span already
    /// larger than the maximum is left to shrink normally.
    pub fn zoom_in(self, limits: &ZoomLimits) -> Self {
        self.with_span(
            self.span.scaled(1. / limits.factor).at_least(limits.min_span)
        )
    }

    /// Returns the viewport zoomed out by one step.
    ///
    /// The span never grows beyond the maximum span. A span already
    /// smaller than the minimum is left to grow normally.
    pub fn zoom_out(self, limits: &ZoomLimits) -> Self {
        self.with_span(
            self.span.scaled(limits.factor).at_most(limits.max_span)
        )
    }

    /// Returns the viewport zoomed in or out.
    pub fn zoom(self, zoom: Zoom, limits: &ZoomLimits) -> Self {
        match zoom {
            Zoom::In => self.zoom_in(limits),
            Zoom::Out => self.zoom_out(limits),
        }
    }
}


//------------ Zoom ----------------------------------------------------------

/// The direction of a zoom step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Zoom {
    In,
    Out,
}


//------------ ZoomLimits ----------------------------------------------------

/// How far and how fast a viewport can be zoomed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ZoomLimits {
    /// The smallest span in degrees.
    pub min_span: f64,

    /// The largest span in degrees.
    pub max_span: f64,

    /// The factor the span changes by with each step.
    pub factor: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        ZoomLimits {
            min_span: 0.001,
            max_span: 180.,
            factor: 2.,
        }
    }
}


//============ Tests =========================================================

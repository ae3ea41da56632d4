//! The state of a drawing session.
//!
//! A session ties together the two maps: the polygon is drawn by tapping
//! on the _source_ map, and a copy of the same shape and size is kept at
//! the center of the _target_ map. The whole state lives in a [`Session`]
//! value which is advanced by feeding [`Action`]s into
//! [`update`][Session::update].

use kurbo::BezPath;
use log::debug;
use crate::circle;
use crate::config::Config;
use crate::format::{format_area_with, format_length_with};
use crate::hit::VertexIndex;
use crate::measure::{polygon_area, polygon_perimeter};
use crate::relocate::relocate_preserving_shape;
use crate::viewport::{Viewport, Zoom};
use crate::world::Point;


//------------ Action --------------------------------------------------------

/// Something the user did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Switches drawing mode on or off.
    ToggleDrawing,

    /// Removes the polygon.
    Clear,

    /// Removes the most recently added point.
    Undo,

    /// The source map was tapped at the given pixel position.
    Tap(kurbo::Point),

    /// A vertex on the source map was dragged.
    MoveVertex {
        from: kurbo::Point,
        to: kurbo::Point,
    },

    /// The source map now shows a different region.
    SourceRegion(Viewport),

    /// The target map now shows a different region.
    TargetRegion(Viewport),

    /// One of the zoom buttons of the source map was pressed.
    ZoomSource(Zoom),

    /// One of the zoom buttons of the target map was pressed.
    ZoomTarget(Zoom),

    /// Gives the target map the same scale as the source map.
    SyncScale,
}


//------------ Session -------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    source: Viewport,
    target: Viewport,

    /// The points drawn on the source map.
    points: Vec<Point>,

    /// Whether taps add points.
    drawing: bool,

    /// The polygon relocated to the target center.
    ///
    /// This is empty while there are fewer than three points.
    mirrored: Vec<Point>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            source: config.source,
            target: config.target,
            config,
            points: Vec::new(),
            drawing: false,
            mirrored: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &Viewport {
        &self.source
    }

    pub fn target(&self) -> &Viewport {
        &self.target
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn mirrored(&self) -> &[Point] {
        &self.mirrored
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// # Updating
///
impl Session {
    /// Returns the session after applying an action.
    pub fn update(mut self, action: Action) -> Self {
        debug!("session update: {:?}", action);
        match action {
            Action::ToggleDrawing => {
                self.drawing = !self.drawing;
            }
            Action::Clear => {
                self.points.clear();
            }
            Action::Undo => {
                self.points.pop();
            }
            Action::Tap(pixel) => {
                if !self.drawing {
                    return self
                }
                let coord = self.source.coordinate_for_point(pixel);
                debug!("adding point {:?}", coord);
                self.points.push(coord);
            }
            Action::MoveVertex { from, to } => {
                let index = VertexIndex::new(&self.points, &self.source);
                match index.nearest_within(from, self.config.hit_tolerance) {
                    Some(idx) => {
                        self.points[idx] =
                            self.source.coordinate_for_point(to);
                    }
                    None => return self,
                }
            }
            Action::SourceRegion(viewport) => {
                self.source = viewport;
                return self
            }
            Action::TargetRegion(viewport) => {
                self.target = viewport;
            }
            Action::ZoomSource(zoom) => {
                self.source = self.source.zoom(zoom, &self.config.zoom);
                return self
            }
            Action::ZoomTarget(zoom) => {
                self.target = self.target.zoom(zoom, &self.config.zoom);
                return self
            }
            Action::SyncScale => {
                self.target = self.target.with_span(self.source.span);
            }
        }
        self.mirror();
        self
    }

    /// Recalculates the copy of the polygon on the target map.
    fn mirror(&mut self) {
        self.mirrored = relocate_preserving_shape(
            &self.points, self.target.center
        );
    }
}

/// # Measurements and Rendering
///
impl Session {
    /// Returns the area of the drawn polygon in square metres.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// Returns the perimeter of the drawn polygon in metres.
    pub fn perimeter(&self) -> f64 {
        polygon_perimeter(&self.points)
    }

    /// Returns the formatted measurements of the drawn polygon.
    pub fn summary(&self) -> Summary {
        let area = self.area();
        let perimeter = self.perimeter();
        Summary {
            area,
            perimeter,
            area_text: format_area_with(area, &self.config.labels),
            perimeter_text: format_length_with(
                perimeter, &self.config.labels
            ),
        }
    }

    /// Returns the outline of the drawn polygon on the source map.
    pub fn source_outline(&self) -> BezPath {
        self.source.outline(&self.points)
    }

    /// Returns the outline of the copy on the target map.
    pub fn target_outline(&self) -> BezPath {
        self.target.anchored_outline(&self.mirrored)
    }

    /// Returns a circle on the target map with the polygon’s area.
    pub fn equal_area_circle(&self) -> Vec<Point> {
        if self.points.len() < 3 {
            return Vec::new()
        }
        circle::equal_area_circle(self.target.center, self.area())
    }
}


//------------ Summary -------------------------------------------------------

/// The measurements of a polygon, both raw and formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub area: f64,
    pub perimeter: f64,
    pub area_text: String,
    pub perimeter_text: String,
}


//============ Tests =========================================================

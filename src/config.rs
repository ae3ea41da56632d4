//! Configuration of a drawing session.

use kurbo::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::format::UnitLabels;
use crate::viewport::{Viewport, ZoomLimits};
use crate::world::{Point, Span};


//------------ Config --------------------------------------------------------

/// The settings a [`Session`][crate::session::Session] starts with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The initial region of the map the polygon is drawn on.
    pub source: Viewport,

    /// The initial region of the map the copy is shown on.
    pub target: Viewport,

    /// The limits for zooming either map.
    pub zoom: ZoomLimits,

    /// The distance in pixels within which a tap hits a vertex.
    pub hit_tolerance: f64,

    /// The unit labels for formatted measurements.
    pub labels: UnitLabels,
}

impl Config {
    /// The span both maps start with.
    pub const DEFAULT_SPAN: Span = Span::new(0.05, 0.05);

    /// The view size assumed until the maps report their real size.
    pub const DEFAULT_SIZE: Size = Size::new(390., 320.);
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // Beijing
            source: Viewport::new(
                Point::new(39.9042, 116.4074),
                Self::DEFAULT_SPAN, Self::DEFAULT_SIZE,
            ),
            // Shanghai, Oriental Pearl Tower
            target: Viewport::new(
                Point::new(31.2397, 121.4998),
                Self::DEFAULT_SPAN, Self::DEFAULT_SIZE,
            ),
            zoom: ZoomLimits::default(),
            hit_tolerance: 22.,
            labels: UnitLabels::default(),
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        for view in [config.source, config.target] {
            assert!(view.center.is_valid());
            assert!(
                Viewport::try_new(view.center, view.span, view.size).is_ok()
            );
        }
        assert!(config.zoom.min_span < Config::DEFAULT_SPAN.lat);
        assert!(config.zoom.max_span > Config::DEFAULT_SPAN.lat);
    }
}

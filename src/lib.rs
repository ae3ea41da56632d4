//! Geometry for drawing polygons on one map and showing them on another.
//!
//! This crate provides the calculations behind an application that lets
//! a user tap a polygon onto a map and then shows a copy of the very same
//! shape and size somewhere else in the world. It doesn’t render anything
//! itself but is meant to be driven by whatever UI draws the maps.
//!
//! Geographic positions are [`world::Point`]s in degrees. The modules
//! provide:
//!
//! * [`measure`] for area, perimeter, and distances on a spherical Earth,
//! * [`relocate`] for centroids and for moving polygons without changing
//!   their shape,
//! * [`circle`] for approximating circles of a given radius or area,
//! * [`viewport`] for translating between geographic positions and pixels
//!   of a map view,
//! * [`hit`] for finding the vertex under a tap,
//! * [`format`] for presenting measurements, and
//! * [`session`] which keeps the state of the two maps and the drawing.
//!
//! All functions are pure. Invalid input, such as a polygon with too few
//! points, results in a defined fallback value rather than an error unless
//! you use the `try_` variants.

pub use self::error::Error;
pub use self::world::Point;

pub mod circle;
pub mod config;
pub mod error;
pub mod format;
pub mod hit;
pub mod measure;
pub mod relocate;
pub mod session;
pub mod viewport;
pub mod world;

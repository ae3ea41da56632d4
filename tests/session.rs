//! Drawing a polygon on one map and comparing it on the other.

use kurbo::{Point as Pixel, Size};
use twinmap::config::Config;
use twinmap::format::UnitLabels;
use twinmap::measure::polygon_area;
use twinmap::relocate::centroid;
use twinmap::session::{Action, Session};
use twinmap::viewport::Zoom;
use twinmap::world::Span;
use twinmap::Point;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn draw_square(session: Session) -> Session {
    [
        Action::ToggleDrawing,
        Action::Tap(Pixel::new(100., 100.)),
        Action::Tap(Pixel::new(300., 100.)),
        Action::Tap(Pixel::new(300., 300.)),
        Action::Tap(Pixel::new(100., 300.)),
        Action::ToggleDrawing,
    ].into_iter().fold(session, Session::update)
}

#[test]
fn copy_keeps_shape_in_degrees() {
    init();
    let session = draw_square(Session::default());
    assert!(!session.is_drawing());
    assert_eq!(session.points().len(), 4);

    // Taps after drawing ended are ignored.
    let session = session.update(Action::Tap(Pixel::new(10., 10.)));
    assert_eq!(session.points().len(), 4);

    // The copy keeps its size in degrees, so its area on the ground grows
    // with the cosine of the latitude.
    let original = session.area();
    let copy = polygon_area(session.mirrored());
    let expected = session.target().center.lat.to_radians().cos()
        / centroid(session.points()).lat.to_radians().cos();
    assert!((copy / original - expected).abs() < 0.01);

    let center = centroid(session.mirrored());
    assert!((center.lat - session.target().center.lat).abs() < 1e-9);
    assert_eq!(session.target_outline().elements().len(), 5);
    assert_eq!(session.source_outline().elements().len(), 5);
}

#[test]
fn zooming_changes_drawing_scale() {
    init();
    let coarse = draw_square(Session::default());
    let fine = draw_square(
        Session::default().update(Action::ZoomSource(Zoom::In))
    );
    let ratio = coarse.area() / fine.area();
    assert!((ratio - 4.).abs() < 0.01, "{}", ratio);
}

#[test]
fn resized_map_and_moved_target() {
    init();
    let session = Session::default();
    let source = session.source().with_size(Size::new(800., 800.));
    let session = draw_square(session.update(Action::SourceRegion(source)));
    let first = session.points()[0];
    let back = session.source().point_for_coordinate(first);
    assert!((back - Pixel::new(100., 100.)).hypot() < 1e-6);

    let new_york = Point::new(40.7128, -74.0060);
    let target = session.target().with_center(new_york)
        .with_span(Span::new(0.02, 0.02));
    let session = session.update(Action::TargetRegion(target));
    let center = centroid(session.mirrored());
    assert!((center.lon - new_york.lon).abs() < 1e-9);
}

#[test]
fn custom_labels() {
    init();
    let config = Config {
        labels: UnitLabels::zh(),
        ..Default::default()
    };
    let summary = draw_square(Session::new(config)).summary();
    assert!(summary.area_text.ends_with("平方公里"));
    assert!(summary.perimeter_text.ends_with("千米"));
}

#[test]
fn equal_area_circle_on_target() {
    init();
    let session = draw_square(Session::default());
    let circle = session.equal_area_circle();
    assert_eq!(circle.len(), 32);
    let center = centroid(&circle);
    assert!((center.lat - session.target().center.lat).abs() < 1e-9);
    assert!((center.lon - session.target().center.lon).abs() < 1e-9);
}

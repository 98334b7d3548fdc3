use super::*;
use kurbo::{ParamCurveArclen, PathEl};

fn straight() -> RouteGeometry {
    RouteGeometry::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 40.0),
        Point::new(30.0, 140.0),
    ])
}

fn end_point(path: &BezPath) -> Point {
    match path.elements().last() {
        Some(PathEl::MoveTo(p)) | Some(PathEl::LineTo(p)) => *p,
        other => panic!("unexpected element {other:?}"),
    }
}

#[test]
fn arc_lengths_are_cumulative() {
    let g = straight();
    assert_eq!(g.arc_lengths(), &[0.0, 50.0, 150.0]);
    assert_eq!(g.total_length(), 150.0);
}

#[test]
fn route_points_are_relative_to_first() {
    let g = RouteGeometry::from_route(
        &[GeoPoint::new(35.0, 135.0), GeoPoint::new(35.1, 135.2)],
        12,
    );
    assert_eq!(g.points()[0], Point::ZERO);
    assert!(g.points()[1].x > 0.0 && g.points()[1].y < 0.0);
}

#[test]
fn partial_ends_on_interpolated_point() {
    let g = straight();
    let half = g.partial(0.5);
    // 75px: 50px along the first edge plus 25px down the second.
    assert_eq!(end_point(&half), Point::new(30.0, 65.0));
    assert_eq!(half.elements().len(), 3);

    let none = g.partial(0.0);
    assert_eq!(none.elements(), &[PathEl::MoveTo(Point::ZERO)]);

    assert_eq!(end_point(&g.partial(1.0)), Point::new(30.0, 140.0));
    assert_eq!(end_point(&g.partial(3.0)), Point::new(30.0, 140.0));
}

#[test]
fn partial_grows_continuously() {
    let g = straight();
    let mut prev = 0.0;
    for i in 0..=100 {
        let reveal = f64::from(i) / 100.0;
        let s = g.partial(reveal).segments().map(|seg| seg.arclen(1e-9)).sum::<f64>();
        assert!(s >= prev - 1e-9);
        assert!((s - reveal * 150.0).abs() < 1e-6);
        prev = s;
    }
}

#[test]
fn dash_matches_reveal() {
    let g = straight();
    assert_eq!(g.dash(0.0), (150.0, 150.0));
    assert_eq!(g.dash(1.0), (150.0, 0.0));
    assert_eq!(g.dash(0.25), (150.0, 112.5));
}

#[test]
fn synthetic_arc_bulges_perpendicular() {
    let from = GeoPoint::new(0.0, 0.0);
    let to = GeoPoint::new(0.0, 1.0);
    let zoom = 8;
    let g = RouteGeometry::synthetic(from, to, zoom);
    let chord = (Projector::project(to, zoom) - Projector::project(from, zoom)).hypot();
    let last = *g.points().last().unwrap();
    assert!((last.x - chord).abs() < 1e-9 && last.y.abs() < 1e-9);
    // Apex of a quadratic is half the control offset.
    let apex = g.points()[ARC_SAMPLES / 2];
    assert!((apex.y + 0.5 * ARC_OFFSET_RATIO * chord).abs() < 1e-9);
    assert!(g.total_length() > chord);
}

#[test]
fn synthetic_offset_is_capped() {
    let g = RouteGeometry::synthetic(GeoPoint::new(0.0, -60.0), GeoPoint::new(0.0, 60.0), 6);
    let apex = g.points()[ARC_SAMPLES / 2];
    assert!((apex.y + 0.5 * MAX_ARC_OFFSET_PX).abs() < 1e-9);
}

#[test]
fn zero_length_segment_collapses() {
    let p = GeoPoint::new(35.0, 135.0);
    let g = RouteGeometry::synthetic(p, p, 14);
    assert_eq!(g.points(), &[Point::ZERO]);
    assert_eq!(g.total_length(), 0.0);
    assert_eq!(g.dash(0.5), (0.0, 0.0));
    assert_eq!(g.partial(0.5).elements(), &[PathEl::MoveTo(Point::ZERO)]);
}

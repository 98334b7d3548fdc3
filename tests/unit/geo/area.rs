use super::*;

#[test]
fn area_brackets_the_center() {
    let center = GeoPoint::new(35.4, 135.3);
    let area = BoundingArea::around(center, 14, Canvas::default());
    assert!(area.top_left.latitude > center.latitude);
    assert!(area.bottom_right.latitude < center.latitude);
    assert!(area.top_left.longitude < center.longitude);
    assert!(area.bottom_right.longitude > center.longitude);
}

#[test]
fn area_width_matches_viewport_in_pixels() {
    let center = GeoPoint::new(10.0, 20.0);
    let zoom = 9;
    let canvas = Canvas {
        width: 800,
        height: 600,
    };
    let area = BoundingArea::around(center, zoom, canvas);
    let tl = Projector::project(area.top_left, zoom);
    let br = Projector::project(area.bottom_right, zoom);
    assert!((br.x - tl.x - 800.0).abs() < 1e-6);
    assert!((br.y - tl.y - 600.0).abs() < 1e-6);
}

#[test]
fn viewport_origin_is_floored_corner() {
    let center = GeoPoint::new(12.34, 56.78);
    let canvas = Canvas::default();
    let origin = viewport_origin(center, 11, canvas);
    let exact = Projector::project(center, 11) - canvas.half_extent();
    assert_eq!(origin.x, origin.x.trunc());
    assert_eq!(origin.y, origin.y.trunc());
    assert!(origin.x <= exact.x && exact.x < origin.x + 1.0);
    assert!(origin.y <= exact.y && exact.y < origin.y + 1.0);
}

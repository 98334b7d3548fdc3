use super::*;

fn assert_close(a: f64, b: f64, eps: f64) {
    let diff = (a - b).abs();
    assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
}

#[test]
fn origin_maps_to_world_center() {
    for zoom in [0, 5, 14] {
        let w = Projector::world_size(zoom);
        let p = Projector::project(GeoPoint::new(0.0, 0.0), zoom);
        assert_close(p.x, w / 2.0, 1e-9);
        assert_close(p.y, w / 2.0, 1e-9);
    }
}

#[test]
fn world_edges_map_to_pixel_edges() {
    let w = Projector::world_size(3);
    assert_close(Projector::project(GeoPoint::new(0.0, -180.0), 3).x, 0.0, 1e-9);
    assert_close(Projector::project(GeoPoint::new(0.0, 180.0), 3).x, w, 1e-9);
    // The cut-off latitude is (numerically) the top edge of the square world.
    assert_close(Projector::project(GeoPoint::new(MAX_LATITUDE, 0.0), 3).y, 0.0, 1e-3);
}

#[test]
fn y_grows_southwards() {
    let north = Projector::project(GeoPoint::new(40.0, 0.0), 4);
    let south = Projector::project(GeoPoint::new(-40.0, 0.0), 4);
    assert!(north.y < south.y);
}

#[test]
fn out_of_range_latitude_is_clamped_not_rejected() {
    let pole = Projector::project(GeoPoint::new(95.0, 10.0), 6);
    let cut = Projector::project(GeoPoint::new(MAX_LATITUDE, 10.0), 6);
    assert_eq!(pole, cut);
    assert!(pole.y.is_finite());
}

#[test]
fn round_trip_preserves_degrees() {
    let p = GeoPoint::new(35.4688, 135.3951);
    for zoom in [0, 10, 20] {
        let back = Projector::unproject(Projector::project(p, zoom), zoom);
        assert_close(back.latitude, p.latitude, 1e-9);
        assert_close(back.longitude, p.longitude, 1e-9);
    }
}

#[test]
fn unwrapped_longitude_projects_past_world_edge() {
    let w = Projector::world_size(2);
    let p = Projector::project(GeoPoint::new(0.0, 181.0), 2);
    assert!(p.x > w);
}

#[test]
fn tiles_at_zoom_doubles() {
    assert_eq!(Projector::tiles_at_zoom(0), 1);
    assert_eq!(Projector::tiles_at_zoom(5), 32);
    assert_eq!(Projector::tiles_at_zoom(20), 1 << 20);
}

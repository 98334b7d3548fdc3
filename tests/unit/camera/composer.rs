use super::*;
use crate::{animation::ease::Ease, journey::builder::JourneyBuilder};

const A: GeoPoint = GeoPoint::new(35.4688, 135.3951);
const B: GeoPoint = GeoPoint::new(35.3023, 135.2524);

fn kyoto() -> Journey {
    JourneyBuilder::new()
        .stop("A", A.latitude, A.longitude)
        .stop("B", B.latitude, B.longitude)
        .build()
        .unwrap()
}

fn center_at(c: &CameraComposer, j: &Journey, f: u64) -> GeoPoint {
    let sched = SegmentScheduler::new(j.ease).schedule(&j.timeline(), FrameIndex(f));
    c.compose(FrameIndex(f), &sched, Canvas::default()).center
}

#[test]
fn rejects_invalid_journey() {
    let mut j = kyoto();
    j.stops.pop();
    assert!(CameraComposer::new(&j).is_err());
}

#[test]
fn pre_delay_pins_first_stop_and_done_pins_last() {
    let j = kyoto();
    let c = CameraComposer::new(&j).unwrap();
    assert_eq!(center_at(&c, &j, 0), A);
    assert_eq!(center_at(&c, &j, 30), A);
    assert_eq!(center_at(&c, &j, 150), B);
    assert_eq!(center_at(&c, &j, 499), B);
}

#[test]
fn midpoint_without_route_is_chord_midpoint() {
    let j = kyoto();
    let c = CameraComposer::new(&j).unwrap();
    let mid = center_at(&c, &j, 90);
    assert!((mid.latitude - (A.latitude + B.latitude) / 2.0).abs() < 1e-12);
    assert!((mid.longitude - (A.longitude + B.longitude) / 2.0).abs() < 1e-12);
}

#[test]
fn route_is_followed_point_by_point() {
    let j = JourneyBuilder::new()
        .stop("A", 0.0, 0.0)
        .stop("B", 0.0, 2.0)
        .route(
            0,
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(0.0, 2.0),
            ],
        )
        .build()
        .unwrap();
    let c = CameraComposer::new(&j).unwrap();
    // Frame 90 is eased progress 0.5, the fractional index 1.0.
    assert_eq!(center_at(&c, &j, 90), GeoPoint::new(1.0, 1.0));
}

#[test]
fn segment_boundaries_are_continuous() {
    let j = JourneyBuilder::new()
        .stop("A", 35.0, 135.0)
        .stop("B", 35.5, 135.6)
        .stop("C", 35.1, 136.2)
        .build()
        .unwrap();
    let c = CameraComposer::new(&j).unwrap();
    // Segment 1 starts at frame 90.
    let end_of_first = center_at(&c, &j, 89);
    let start_of_second = center_at(&c, &j, 90);
    assert!(end_of_first.degree_distance(start_of_second) < 1e-3);
    assert_eq!(start_of_second, GeoPoint::new(35.5, 135.6));
}

#[test]
fn antimeridian_midpoint_stays_near_180() {
    let j = JourneyBuilder::new()
        .stop("W", 0.0, 179.0)
        .stop("E", 0.0, -179.0)
        .build()
        .unwrap();
    let c = CameraComposer::new(&j).unwrap();
    let mid = center_at(&c, &j, 90);
    let lon = mid.longitude.rem_euclid(360.0);
    assert!((lon - 180.0).abs() <= 2.0, "{lon}");
}

#[test]
fn marker_offsets_are_relative_to_center() {
    let j = kyoto();
    let c = CameraComposer::new(&j).unwrap();
    let offsets = c.marker_offsets(A);
    assert_eq!(offsets[0], Vec2::ZERO);
    // B is south-west of A.
    assert!(offsets[1].x < 0.0 && offsets[1].y > 0.0);
}

#[test]
fn zoom_override_is_verbatim() {
    let mut j = kyoto();
    j.zoom = Some(7);
    let c = CameraComposer::new(&j).unwrap();
    assert_eq!(c.zoom(), 7);
    for f in [0, 60, 200] {
        let sched = SegmentScheduler::default().schedule(&j.timeline(), FrameIndex(f));
        assert_eq!(c.compose(FrameIndex(f), &sched, Canvas::default()).zoom, 7);
    }
}

#[test]
fn exponential_mode_lags_behind_and_is_repeatable() {
    let mut j = kyoto();
    j.camera.mode = CameraMode::Exponential;
    j.camera.smoothing = 0.1;
    let c = CameraComposer::new(&j).unwrap();
    assert_eq!(center_at(&c, &j, 10), A);
    let raw = CameraComposer::new(&kyoto()).unwrap();
    let lagged = center_at(&c, &j, 90);
    let ideal = center_at(&raw, &j, 90);
    assert!(lagged.degree_distance(A) < ideal.degree_distance(A));
    assert_eq!(center_at(&c, &j, 90), lagged);
}

#[test]
fn catmull_rom_mode_matches_endpoints() {
    let mut j = JourneyBuilder::new()
        .stop("A", 0.0, 0.0)
        .stop("B", 0.0, 4.0)
        .route(
            0,
            (0..=40)
                .map(|i| GeoPoint::new((f64::from(i) / 10.0).sin(), f64::from(i) / 10.0))
                .collect(),
        )
        .build()
        .unwrap();
    j.camera.mode = CameraMode::CatmullRom;
    j.camera.sample_points = 5;
    let c = CameraComposer::new(&j).unwrap();
    let route = c.route(0).unwrap();
    assert!(center_at(&c, &j, 30).degree_distance(route[0]) < 1e-12);
    assert!(center_at(&c, &j, 149).degree_distance(route[40]) < 1e-3);
}

#[test]
fn routes_are_anchored_across_the_antimeridian() {
    let j = JourneyBuilder::new()
        .stop("W", 0.0, 179.0)
        .stop("E", 0.0, -179.0)
        .route(
            0,
            vec![
                GeoPoint::new(0.0, 179.0),
                GeoPoint::new(0.0, 180.0),
                GeoPoint::new(0.0, -179.0),
            ],
        )
        .build()
        .unwrap();
    let c = CameraComposer::new(&j).unwrap();
    let lons: Vec<f64> = c.route(0).unwrap().iter().map(|p| p.longitude).collect();
    assert_eq!(lons, vec![179.0, 180.0, 181.0]);
}

fn off_stop_route(mode: CameraMode) -> Journey {
    let mut j = JourneyBuilder::new()
        .stop("A", 0.0, 0.0)
        .stop("B", 0.0, 2.0)
        .stop("C", 0.0, 4.0)
        .route(
            0,
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.5, 1.0),
                GeoPoint::new(0.1, 2.1),
            ],
        )
        .build()
        .unwrap();
    j.camera.mode = mode;
    j
}

#[test]
fn route_ending_off_its_stop_still_meets_the_next_segment() {
    for mode in [CameraMode::None, CameraMode::CatmullRom] {
        let j = off_stop_route(mode);
        let c = CameraComposer::new(&j).unwrap();
        let end_of_first = center_at(&c, &j, 89);
        let start_of_second = center_at(&c, &j, 90);
        assert!(
            end_of_first.degree_distance(start_of_second) < 1e-3,
            "{mode:?}: {end_of_first:?} vs {start_of_second:?}"
        );
        assert_eq!(start_of_second, GeoPoint::new(0.0, 2.0));
    }
}

#[test]
fn route_ends_are_pinned_to_their_stops() {
    let j = off_stop_route(CameraMode::None);
    let c = CameraComposer::new(&j).unwrap();
    let route = c.route(0).unwrap();
    assert_eq!(route.len(), 3);
    assert_eq!(route[0], GeoPoint::new(0.0, 0.0));
    assert_eq!(route[1], GeoPoint::new(0.5, 1.0));
    assert_eq!(route[2], GeoPoint::new(0.0, 2.0));
}

#[test]
fn single_point_route_spans_both_stops() {
    let j = JourneyBuilder::new()
        .stop("A", 0.0, 0.0)
        .stop("B", 0.0, 2.0)
        .route(0, vec![GeoPoint::new(0.3, 1.0)])
        .build()
        .unwrap();
    let c = CameraComposer::new(&j).unwrap();
    assert_eq!(
        c.route(0).unwrap(),
        &[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 2.0)]
    );
}

#[test]
fn exponential_follow_matches_a_step_by_step_replay() {
    let mut j = off_stop_route(CameraMode::Exponential);
    j.camera.smoothing = 0.2;
    let c = CameraComposer::new(&j).unwrap();
    let raw = CameraComposer::new(&off_stop_route(CameraMode::None)).unwrap();
    let mut expected = GeoPoint::new(0.0, 0.0);
    for f in 0..j.total_frames {
        if f >= j.start_delay_frames {
            let target = center_at(&raw, &j, f);
            expected = exponential_blend(expected, target, 0.2);
        }
        assert_eq!(center_at(&c, &j, f), expected, "frame {f}");
    }
    // Past the end the last followed position is held.
    assert_eq!(center_at(&c, &j, j.total_frames + 50), expected);
}

#[test]
fn easing_choice_changes_camera_progress() {
    let cubic = kyoto();
    let mut linear = kyoto();
    linear.ease = Ease::Linear;
    let c_cubic = CameraComposer::new(&cubic).unwrap();
    let c_linear = CameraComposer::new(&linear).unwrap();
    // A quarter of the way through travel: linear has covered more ground than ease-in.
    let f = 60;
    let d_cubic = center_at(&c_cubic, &cubic, f).degree_distance(A);
    let d_linear = center_at(&c_linear, &linear, f).degree_distance(A);
    assert!(d_linear > d_cubic, "{d_linear} <= {d_cubic}");
}

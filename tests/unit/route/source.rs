use super::*;
use crate::{geo::point::GeoPoint, journey::builder::JourneyBuilder};

struct Failing;

impl RouteSource for Failing {
    fn fetch_segment(&self, _: &Stop, _: &Stop, _: RouteMethod) -> RailcamResult<Route> {
        Err(RailcamError::route("offline"))
    }
}

fn three_stops() -> Journey {
    JourneyBuilder::new()
        .stop("A", 0.0, 0.0)
        .stop("B", 1.0, 1.0)
        .stop("C", 2.0, 0.0)
        .route(1, vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 0.0)])
        .build()
        .unwrap()
}

#[test]
fn method_serde_names() {
    for (m, name) in [
        (RouteMethod::Straight, "straight"),
        (RouteMethod::Curved, "curved"),
        (RouteMethod::Osm, "osm"),
        (RouteMethod::Overpass, "overpass"),
        (RouteMethod::Railway, "railway"),
        (RouteMethod::OpenRailway, "openrailway"),
    ] {
        assert_eq!(serde_json::to_string(&m).unwrap(), format!("\"{name}\""));
        assert_eq!(name.parse::<RouteMethod>().unwrap(), m);
    }
    assert!("teleport".parse::<RouteMethod>().is_err());
}

#[test]
fn synthetic_source_rejects_network_methods() {
    let j = three_stops();
    let err = SyntheticRouteSource
        .fetch_segment(&j.stops[0], &j.stops[1], RouteMethod::Overpass)
        .unwrap_err();
    assert!(matches!(err, RailcamError::Route(_)));
    assert!(!RouteMethod::Osm.is_synthetic());
    assert!(RouteMethod::Straight.is_synthetic());
}

#[test]
fn resolve_fills_missing_segments_only() {
    let j = three_stops();
    let out = resolve_routes(&j, &SyntheticRouteSource, RouteMethod::Straight).unwrap();
    assert_eq!(out.segments.len(), 2);
    assert_eq!(out.route_for(0).map(Route::len), Some(101));
    assert_eq!(out.route_for(1), j.route_for(1));
}

#[test]
fn failures_fall_back_to_curve() {
    let j = three_stops();
    let out = resolve_routes(&j, &Failing, RouteMethod::Osm).unwrap();
    let expected = curved_route(j.stops[0].point, j.stops[1].point);
    assert_eq!(out.route_for(0).map(Route::points), Some(expected.as_slice()));
    assert!(out.validate().is_ok());
}

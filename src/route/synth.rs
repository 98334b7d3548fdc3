use crate::geo::point::{GeoPoint, closer_end_point};

/// Intervals in a generated route (the route has one more point).
pub const SYNTHETIC_INTERVALS: usize = 100;
/// Perpendicular control offset of a curved route as a fraction of the chord.
pub const CURVE_OFFSET_RATIO: f64 = 0.2;

/// Evenly spaced points on the straight lat/lon line from `from` to `to`.
pub fn straight_route(from: GeoPoint, to: GeoPoint) -> Vec<GeoPoint> {
    let to = closer_end_point(from, to);
    (0..=SYNTHETIC_INTERVALS)
        .map(|i| from.lerp(to, i as f64 / SYNTHETIC_INTERVALS as f64))
        .collect()
}

/// Quadratic Bézier in lat/lon space whose control point is offset perpendicular to the chord.
///
/// Identical endpoints produce the two endpoints only.
pub fn curved_route(from: GeoPoint, to: GeoPoint) -> Vec<GeoPoint> {
    let to = closer_end_point(from, to);
    let d_lon = to.longitude - from.longitude;
    let d_lat = to.latitude - from.latitude;
    let distance = d_lon.hypot(d_lat);
    if distance.is_nan() || distance <= 0.0 {
        return vec![from, to];
    }
    let offset = distance * CURVE_OFFSET_RATIO;
    let mid = from.lerp(to, 0.5);
    let control = GeoPoint::new(
        mid.latitude + d_lon / distance * offset,
        mid.longitude - d_lat / distance * offset,
    );
    (0..=SYNTHETIC_INTERVALS)
        .map(|i| {
            let t = i as f64 / SYNTHETIC_INTERVALS as f64;
            let mt = 1.0 - t;
            let (a, b, c) = (mt * mt, 2.0 * mt * t, t * t);
            GeoPoint::new(
                a * from.latitude + b * control.latitude + c * to.latitude,
                a * from.longitude + b * control.longitude + c * to.longitude,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/route/synth.rs"]
mod tests;

use crate::foundation::math::lerp;

/// Mean Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees.
///
/// Latitude is clamped to the Mercator range only when projected. Longitude is unbounded:
/// after antimeridian correction it may leave `[-180, 180]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Return `true` when both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Linear blend in lat/lon space with unclamped `t`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            latitude: lerp(self.latitude, other.latitude, t),
            longitude: lerp(self.longitude, other.longitude, t),
        }
    }

    /// Euclidean distance in degree space.
    pub fn degree_distance(self, other: Self) -> f64 {
        (other.latitude - self.latitude).hypot(other.longitude - self.longitude)
    }
}

/// Pick the copy of `to` (shifted by ±360° longitude) nearest to `from`.
///
/// Only applies when the longitudes differ by more than 180°, so interpolation between the
/// returned pair takes the short way around the globe. Ties keep the original point.
pub fn closer_end_point(from: GeoPoint, to: GeoPoint) -> GeoPoint {
    if (to.longitude - from.longitude).abs() <= 180.0 {
        return to;
    }
    let mut best = to;
    let mut best_dist = from.degree_distance(to);
    for shift in [-360.0, 360.0] {
        let candidate = GeoPoint::new(to.latitude, to.longitude + shift);
        let dist = from.degree_distance(candidate);
        if dist < best_dist {
            best = candidate;
            best_dist = dist;
        }
    }
    best
}

/// Unwrap a polyline so that consecutive points never jump across the antimeridian.
///
/// The first point is kept verbatim; every later point is replaced by its copy closest to the
/// (already unwrapped) previous one.
pub fn unwrap_longitudes(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut out = Vec::with_capacity(points.len());
    let mut prev: Option<GeoPoint> = None;
    for &p in points {
        let q = match prev {
            Some(prev) => closer_end_point(prev, p),
            None => p,
        };
        out.push(q);
        prev = Some(q);
    }
    out
}

/// Great-circle distance in kilometres (haversine formula).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let cos_lat = a.latitude.to_radians().cos() * b.latitude.to_radians().cos();
    let h = (d_lat / 2.0).sin().powi(2) + cos_lat * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
#[path = "../../tests/unit/geo/point.rs"]
mod tests;

//! Path smoothing helpers for the camera center.
//!
//! All functions are pure and operate in lat/lon degree space; callers unwrap longitudes first.

use crate::geo::point::GeoPoint;

/// Move `current` towards `target` by `strength` (`0` stays, `1` snaps).
pub fn exponential_blend(current: GeoPoint, target: GeoPoint, strength: f64) -> GeoPoint {
    let s = if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    };
    GeoPoint::new(
        current.latitude * (1.0 - s) + target.latitude * s,
        current.longitude * (1.0 - s) + target.longitude * s,
    )
}

/// Uniform Catmull-Rom spline through `p[0..4]`, evaluated between `p[1]` (t=0) and `p[2]` (t=1).
pub fn catmull_rom(p: [GeoPoint; 4], t: f64) -> GeoPoint {
    let t = t.clamp(0.0, 1.0);
    let t2 = t * t;
    let t3 = t2 * t;
    let eval = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * (2.0 * b
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    GeoPoint::new(
        eval(p[0].latitude, p[1].latitude, p[2].latitude, p[3].latitude),
        eval(p[0].longitude, p[1].longitude, p[2].longitude, p[3].longitude),
    )
}

/// Position at `progress` along a polyline, blending the two points bracketing the fractional
/// index `progress * (len - 1)`.
pub fn interpolate_along(points: &[GeoPoint], progress: f64) -> Option<GeoPoint> {
    let (i, t) = bracket(points.len(), progress)?;
    if t == 0.0 || i + 1 >= points.len() {
        return Some(points[i]);
    }
    Some(points[i].lerp(points[i + 1], t))
}

/// Position at `progress` along a Catmull-Rom spline through `points`.
///
/// End segments reuse the endpoint as the missing outer control point. Fewer than three
/// points fall back to [`interpolate_along`].
pub fn catmull_rom_along(points: &[GeoPoint], progress: f64) -> Option<GeoPoint> {
    if points.len() < 3 {
        return interpolate_along(points, progress);
    }
    let (mut i, mut t) = bracket(points.len(), progress)?;
    if i + 1 >= points.len() {
        i = points.len() - 2;
        t = 1.0;
    }
    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points.get(i + 2).copied().unwrap_or(p2);
    Some(catmull_rom([p0, p1, p2, p3], t))
}

/// Downsample `points` to `target_count` entries, keeping both endpoints and choosing
/// intermediate points with a uniform rounded stride.
///
/// Lists already at or below the target are returned unchanged.
pub fn resample(points: &[GeoPoint], target_count: usize) -> Vec<GeoPoint> {
    let len = points.len();
    if len <= target_count || len <= 2 {
        return points.to_vec();
    }
    let Some(last) = points.last().copied() else {
        return Vec::new();
    };
    if target_count < 2 {
        return vec![points[0], last];
    }
    let stride = (len - 1) as f64 / (target_count - 1) as f64;
    (0..target_count)
        .map(|i| points[((i as f64 * stride).round() as usize).min(len - 1)])
        .collect()
}

// Segment index and local parameter for `progress` over `len` points.
fn bracket(len: usize, progress: f64) -> Option<(usize, f64)> {
    if len == 0 {
        return None;
    }
    if len == 1 {
        return Some((0, 0.0));
    }
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let pos = p * (len - 1) as f64;
    let i = (pos.floor() as usize).min(len - 1);
    Some((i, pos - i as f64))
}

#[cfg(test)]
#[path = "../../tests/unit/camera/smoothing.rs"]
mod tests;

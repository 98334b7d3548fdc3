use kurbo::{ParamCurve, QuadBez};

use crate::{
    foundation::core::{BezPath, Point, Vec2},
    geo::{mercator::Projector, point::GeoPoint},
};

/// Largest perpendicular offset of a synthetic arc's control point, in pixels.
pub const MAX_ARC_OFFSET_PX: f64 = 400.0;
/// Synthetic arc control offset as a fraction of the chord length.
pub const ARC_OFFSET_RATIO: f64 = 0.2;
/// Polyline resolution used to flatten synthetic arcs.
pub const ARC_SAMPLES: usize = 64;

/// Projected path of one segment, relative to its first point, with arc-length bookkeeping.
///
/// The reveal of a path is a prefix by arc length: [`RouteGeometry::partial`] draws everything up
/// to `reveal * total_length`, ending with an interpolated point so the line grows continuously.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteGeometry {
    points: Vec<Point>,
    lengths: Vec<f64>,
}

impl RouteGeometry {
    /// Build from a route polyline projected at `zoom`.
    ///
    /// Points are expressed relative to the first one, so the caller only places the start.
    pub fn from_route(route: &[GeoPoint], zoom: u32) -> Self {
        let Some(first) = route.first() else {
            return Self::from_points(vec![Point::ZERO]);
        };
        let origin = Projector::project(*first, zoom);
        let points = route
            .iter()
            .map(|&p| (Projector::project(p, zoom) - origin).to_point())
            .collect();
        Self::from_points(points)
    }

    /// Synthesize a quadratic arc from `from` to `to`.
    ///
    /// The control point sits at the chord midpoint, pushed perpendicular to the chord by
    /// `min(400px, 0.2 * chord)`. Identical endpoints collapse to a single point.
    pub fn synthetic(from: GeoPoint, to: GeoPoint, zoom: u32) -> Self {
        let chord = Projector::project(to, zoom) - Projector::project(from, zoom);
        let len = chord.hypot();
        if len.is_nan() || len <= 0.0 {
            return Self::from_points(vec![Point::ZERO]);
        }
        let normal = Vec2::new(chord.y, -chord.x) / len;
        let height = (ARC_OFFSET_RATIO * len).min(MAX_ARC_OFFSET_PX);
        let end = chord.to_point();
        let control = Point::ZERO.midpoint(end) + normal * height;
        let quad = QuadBez::new(Point::ZERO, control, end);
        let points = (0..=ARC_SAMPLES)
            .map(|i| quad.eval(i as f64 / ARC_SAMPLES as f64))
            .collect();
        Self::from_points(points)
    }

    fn from_points(points: Vec<Point>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                acc += p.distance(points[i - 1]);
            }
            lengths.push(acc);
        }
        Self { points, lengths }
    }

    /// Path vertices relative to the path start.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cumulative arc length at every vertex (first entry is `0`).
    pub fn arc_lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Total path length in pixels.
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at arc length `s`, clamped to the path.
    pub fn point_at_length(&self, s: f64) -> Point {
        let Some(&first) = self.points.first() else {
            return Point::ZERO;
        };
        if s.is_nan() || s <= 0.0 {
            return first;
        }
        // First vertex at or past `s`.
        let idx = self.lengths.partition_point(|&l| l < s);
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let (l0, l1) = (self.lengths[idx - 1], self.lengths[idx]);
        let t = if l1 > l0 { (s - l0) / (l1 - l0) } else { 1.0 };
        self.points[idx - 1].lerp(self.points[idx], t)
    }

    /// The full path.
    pub fn to_path(&self) -> BezPath {
        self.partial(1.0)
    }

    /// The revealed prefix of the path for `reveal` in `[0, 1]`.
    pub fn partial(&self, reveal: f64) -> BezPath {
        let mut path = BezPath::new();
        let Some(&first) = self.points.first() else {
            return path;
        };
        path.move_to(first);
        let target = reveal.clamp(0.0, 1.0) * self.total_length();
        if target.is_nan() || target <= 0.0 {
            return path;
        }
        for (p, &l) in self.points.iter().zip(&self.lengths).skip(1) {
            if l >= target {
                break;
            }
            path.line_to(*p);
        }
        path.line_to(self.point_at_length(target));
        path
    }

    /// SVG stroke-dash pair `(dash_array, dash_offset)` that shows the revealed prefix of the
    /// full path.
    pub fn dash(&self, reveal: f64) -> (f64, f64) {
        let total = self.total_length();
        (total, total * (1.0 - reveal.clamp(0.0, 1.0)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/geometry.rs"]
mod tests;

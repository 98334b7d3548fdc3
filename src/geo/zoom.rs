use crate::geo::{
    mercator::{MAX_ZOOM, TILE_SIZE},
    point::{GeoPoint, unwrap_longitudes},
};

/// Horizontal pixel budget the journey extent should roughly fill.
pub const PREFERRED_PIXEL_WIDTH: f64 = 1920.0;

/// Longitude degrees covered by one tile at zoom 0.
const DEGREES_PER_TILE_AT_ZOOM_0: f64 = 360.0;

/// Resolves the single zoom level used for a whole render.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomSolver;

impl ZoomSolver {
    /// Degrees of longitude covered by one tile at `zoom` (360 at zoom 0, halving per level).
    pub fn degrees_per_tile(zoom: u32) -> f64 {
        DEGREES_PER_TILE_AT_ZOOM_0 / 2f64.powi(zoom.min(MAX_ZOOM) as i32)
    }

    /// Pick the zoom in `[0, MAX_ZOOM]` whose degrees-per-tile is closest to the density
    /// needed to show `span_degrees` across `preferred_pixel_width` pixels.
    ///
    /// Equidistant candidates resolve to the lower (coarser) zoom.
    pub fn solve(span_degrees: f64, preferred_pixel_width: f64) -> u32 {
        let tiles_across = preferred_pixel_width / f64::from(TILE_SIZE);
        let wanted = if tiles_across > 0.0 && span_degrees.is_finite() {
            span_degrees.abs() / tiles_across
        } else {
            DEGREES_PER_TILE_AT_ZOOM_0
        };

        let mut best = 0;
        let mut best_diff = f64::INFINITY;
        for zoom in 0..=MAX_ZOOM {
            let diff = (Self::degrees_per_tile(zoom) - wanted).abs();
            // Strict comparison keeps the earlier (lower) zoom on ties.
            if diff < best_diff {
                best = zoom;
                best_diff = diff;
            }
        }
        best
    }

    /// Diagonal of the lat/lon bounding box around all `stops`, after antimeridian unwrapping.
    pub fn journey_span_degrees(stops: &[GeoPoint]) -> f64 {
        let unwrapped = unwrap_longitudes(stops);
        let Some(first) = unwrapped.first() else {
            return 0.0;
        };
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lon, mut max_lon) = (first.longitude, first.longitude);
        for p in &unwrapped[1..] {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lon = min_lon.min(p.longitude);
            max_lon = max_lon.max(p.longitude);
        }
        (max_lat - min_lat).hypot(max_lon - min_lon)
    }

    /// Resolve the render zoom: an explicit override is honoured verbatim, otherwise the zoom is
    /// derived once from the extent of every stop.
    pub fn resolve(stops: &[GeoPoint], zoom_override: Option<u32>) -> u32 {
        if let Some(zoom) = zoom_override {
            return zoom;
        }
        Self::solve(Self::journey_span_degrees(stops), PREFERRED_PIXEL_WIDTH)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/zoom.rs"]
mod tests;

//! Cylindrical (Web-Mercator-style) projection between degrees and zoom-dependent pixels.
//!
//! Pixel space at zoom `z` is a `W x W` square with `W = TILE_SIZE * 2^z`. `x` grows eastwards
//! from the -180° meridian, `y` grows southwards from the top edge (north).

use std::f64::consts::{FRAC_PI_4, PI};

use crate::{foundation::core::PixelPoint, geo::point::GeoPoint};

/// Edge length of one square map tile, in pixels.
pub const TILE_SIZE: u32 = 256;
/// Latitude cut-off where the Mercator projection is truncated.
pub const MAX_LATITUDE: f64 = 85.05112;
/// Highest supported zoom level.
pub const MAX_ZOOM: u32 = 20;

/// Stateless latitude/longitude <-> pixel converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Projector;

impl Projector {
    /// Width (and height) of the projected world at `zoom`, in pixels.
    pub fn world_size(zoom: u32) -> f64 {
        f64::from(TILE_SIZE) * 2f64.powi(zoom.min(MAX_ZOOM) as i32)
    }

    /// Number of tile columns (and rows) at `zoom`.
    pub fn tiles_at_zoom(zoom: u32) -> u32 {
        1u32 << zoom.min(MAX_ZOOM)
    }

    /// Project a geographic point to pixel space at `zoom`.
    ///
    /// Latitude is clamped to `±MAX_LATITUDE` first; longitude is mapped linearly and may land
    /// outside `[0, W]` for unwrapped longitudes.
    pub fn project(point: GeoPoint, zoom: u32) -> PixelPoint {
        let r = radius(zoom);
        let lambda = point.longitude.to_radians();
        let phi = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = r * (lambda + PI);
        let y = r * PI - r * (phi / 2.0 + FRAC_PI_4).tan().ln();
        PixelPoint::new(x, y)
    }

    /// Exact inverse of [`Projector::project`] for latitudes inside the valid range.
    pub fn unproject(p: PixelPoint, zoom: u32) -> GeoPoint {
        let r = radius(zoom);
        let lambda = p.x / r - PI;
        let ky = (r * PI - p.y) / r;
        let phi = 2.0 * (ky.exp().atan() - FRAC_PI_4);
        GeoPoint::new(phi.to_degrees(), lambda.to_degrees())
    }
}

fn radius(zoom: u32) -> f64 {
    Projector::world_size(zoom) / (2.0 * PI)
}

#[cfg(test)]
#[path = "../../tests/unit/geo/mercator.rs"]
mod tests;

use crate::{
    foundation::core::{PixelPoint, Point},
    geo::{
        area::BoundingArea,
        mercator::{Projector, TILE_SIZE},
    },
};

/// One map tile to fetch and draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileRef {
    /// Zoom level of the tile pyramid.
    pub zoom: u32,
    /// Column index, wrapped into `[0, tiles_at_zoom)`.
    pub column: u32,
    /// Row index in `[0, tiles_at_zoom)`.
    pub row: u32,
    /// Top-left draw position relative to the frame's pixel offset.
    pub position: PixelPoint,
}

/// Enumerates the tiles covering a visible area.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileGridCalculator;

impl TileGridCalculator {
    /// Compute the minimal rectangular grid of tiles covering `area` at `zoom`.
    ///
    /// Tiles are listed column-major (west to east, north to south within a column). Draw
    /// positions are `index * TILE_SIZE - offset`; column indices wrap around the antimeridian so
    /// they are always valid, while the draw position keeps the unwrapped index so tiles stay
    /// contiguous on screen. Rows outside the world are dropped.
    pub fn compute(area: &BoundingArea, zoom: u32, offset: PixelPoint) -> Vec<TileRef> {
        let tl = Projector::project(area.top_left, zoom);
        let br = Projector::project(area.bottom_right, zoom);
        if !(tl.x.is_finite() && tl.y.is_finite() && br.x.is_finite() && br.y.is_finite()) {
            return Vec::new();
        }

        let size = f64::from(TILE_SIZE);
        let tiles = i64::from(Projector::tiles_at_zoom(zoom));
        let (i1, i2) = tile_span(tl.x.min(br.x), tl.x.max(br.x), size);
        let (j1, j2) = tile_span(tl.y.min(br.y), tl.y.max(br.y), size);
        let (j1, j2) = (j1.max(0), j2.min(tiles - 1));

        let mut out = Vec::new();
        for i in i1..=i2 {
            let column = i.rem_euclid(tiles) as u32;
            for j in j1..=j2 {
                out.push(TileRef {
                    zoom,
                    column,
                    row: j as u32,
                    position: Point::new(i as f64 * size - offset.x, j as f64 * size - offset.y),
                });
            }
        }
        out
    }
}

// Inclusive tile indices overlapping `[lo, hi]`. An edge lying exactly on a tile boundary does
// not pull in the tile beyond it.
fn tile_span(lo: f64, hi: f64, size: f64) -> (i64, i64) {
    let first = (lo / size).floor() as i64;
    let last = ((hi / size).ceil() as i64 - 1).max(first);
    (first, last)
}

#[cfg(test)]
#[path = "../../tests/unit/tiles/grid.rs"]
mod tests;

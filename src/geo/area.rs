use crate::{
    foundation::core::{Canvas, PixelPoint, Vec2},
    geo::{mercator::Projector, point::GeoPoint},
};

/// Visible geographic window of a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingArea {
    /// North-west corner.
    pub top_left: GeoPoint,
    /// South-east corner.
    pub bottom_right: GeoPoint,
}

impl BoundingArea {
    /// Window covered by a `canvas`-sized viewport centred on `center` at `zoom`.
    pub fn around(center: GeoPoint, zoom: u32, canvas: Canvas) -> Self {
        let half = canvas.half_extent();
        Self {
            top_left: coordinates_at_offset(center, zoom, -half),
            bottom_right: coordinates_at_offset(center, zoom, half),
        }
    }
}

/// Integer pixel origin of the viewport's top-left corner in world pixels.
///
/// Everything drawn in a frame is expressed relative to this origin so coordinates stay small at
/// high zoom levels.
pub fn viewport_origin(center: GeoPoint, zoom: u32, canvas: Canvas) -> PixelPoint {
    let p = Projector::project(center, zoom) - canvas.half_extent();
    PixelPoint::new(p.x.floor(), p.y.floor())
}

fn coordinates_at_offset(center: GeoPoint, zoom: u32, offset: Vec2) -> GeoPoint {
    Projector::unproject(Projector::project(center, zoom) + offset, zoom)
}

#[cfg(test)]
#[path = "../../tests/unit/geo/area.rs"]
mod tests;

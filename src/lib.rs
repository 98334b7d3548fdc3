//! Railcam is a deterministic, frame-indexed animation engine for map journeys.
//!
//! Given an ordered list of stops it computes, for any frame index, where a virtual camera looks,
//! which background tiles cover the viewport, where every stop marker sits and how it fades, and
//! how much of each route line is drawn. Every frame is a pure function of the journey:
//!
//! - Build or load a [`Journey`] (it is validated before any frame is computed)
//! - Optionally fill missing segment routes with [`resolve_routes`]
//! - Evaluate frames with [`Evaluator`] or a whole range with [`eval_frames`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod camera;
pub(crate) mod eval;
pub(crate) mod geo;
pub(crate) mod journey;
pub(crate) mod route;
pub(crate) mod tiles;
pub(crate) mod timeline;

pub use crate::foundation::core::{
    BezPath, Canvas, Fps, FrameIndex, FrameRange, PixelPoint, Point, Rect, Vec2,
};
pub use crate::foundation::error::{RailcamError, RailcamResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{DEFAULT_SPRING_WINDOW_FRAMES, Spring};
pub use crate::camera::composer::{CameraComposer, CameraState};
pub use crate::camera::smoothing::{
    catmull_rom, catmull_rom_along, exponential_blend, interpolate_along, resample,
};
pub use crate::eval::evaluator::{Evaluator, FrameState, MarkerState, RouteFrame};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::pipeline::{BatchStats, EvalThreading, eval_frames};
pub use crate::geo::area::{BoundingArea, viewport_origin};
pub use crate::geo::mercator::{MAX_LATITUDE, MAX_ZOOM, Projector, TILE_SIZE};
pub use crate::geo::point::{
    EARTH_RADIUS_KM, GeoPoint, closer_end_point, haversine_km, unwrap_longitudes,
};
pub use crate::geo::zoom::{PREFERRED_PIXEL_WIDTH, ZoomSolver};
pub use crate::journey::builder::JourneyBuilder;
pub use crate::journey::model::{CameraConfig, CameraMode, Journey, Route, Stop};
pub use crate::route::geometry::RouteGeometry;
pub use crate::route::source::{RouteMethod, RouteSource, SyntheticRouteSource, resolve_routes};
pub use crate::route::synth::{curved_route, straight_route};
pub use crate::tiles::grid::{TileGridCalculator, TileRef};
pub use crate::tiles::style::{IndexOrder, TileSource, TileStyle, TileUrlResolver};
pub use crate::timeline::markers::{LabelPlacement, MarkerTiming, label_placement};
pub use crate::timeline::scheduler::{SegmentPhase, SegmentSchedule, SegmentScheduler, Timeline};

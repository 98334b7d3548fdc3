use crate::{
    animation::{ease::Ease, spring::DEFAULT_SPRING_WINDOW_FRAMES},
    foundation::{
        core::Fps,
        error::{RailcamError, RailcamResult},
    },
    geo::{
        mercator::MAX_ZOOM,
        point::{GeoPoint, haversine_km, unwrap_longitudes},
    },
    tiles::style::TileStyle,
    timeline::scheduler::Timeline,
};

/// Smallest accepted `total_frames` / `travel_frames`.
pub const MIN_TIMELINE_FRAMES: u64 = 30;
/// Largest accepted `camera.sample_points`.
pub const MAX_SAMPLE_POINTS: u32 = 100;

/// An ordered, named waypoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop {
    /// Display label (station name).
    #[serde(alias = "name")]
    pub label: String,
    /// Geographic position.
    #[serde(alias = "coordinate")]
    pub point: GeoPoint,
}

impl Stop {
    /// Create a stop from a label and a coordinate.
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Ordered coordinates describing the physical path of one segment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Route(pub Vec<GeoPoint>);

impl Route {
    /// Wrap a list of points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    /// Route points in travel order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when the route has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Camera path strategy, chosen once per render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Raw interpolation along the active segment.
    #[default]
    None,
    /// Exponential follow of the raw center from the start of travel.
    Exponential,
    /// Catmull-Rom spline through the resampled segment path.
    CatmullRom,
}

/// Camera smoothing options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Path strategy.
    pub mode: CameraMode,
    /// Blend strength per frame for [`CameraMode::Exponential`], in `[0, 1]`.
    pub smoothing: f64,
    /// Resampled control points per segment for [`CameraMode::CatmullRom`], in `[2, 100]`.
    pub sample_points: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::None,
            smoothing: 0.08,
            sample_points: 20,
        }
    }
}

/// Complete, immutable description of one rendered journey.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Journey {
    /// Ordered stops, at least two.
    pub stops: Vec<Stop>,
    /// Optional pre-fetched route per segment; missing entries fall back to a synthetic curve.
    #[serde(default)]
    pub segments: Vec<Option<Route>>,
    /// Total length of the render in frames.
    #[serde(default = "default_total_frames")]
    pub total_frames: u64,
    /// Frames before the camera starts moving.
    #[serde(default = "default_start_delay_frames")]
    pub start_delay_frames: u64,
    /// Frames spent travelling, shared evenly across segments.
    #[serde(default = "default_travel_frames")]
    pub travel_frames: u64,
    /// Output frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Background tile style.
    #[serde(default)]
    pub tile_style: TileStyle,
    /// Explicit zoom override, honoured verbatim.
    #[serde(default)]
    pub zoom: Option<u32>,
    /// Camera smoothing options.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Easing applied to progress within each segment.
    #[serde(default)]
    pub ease: Ease,
    /// Frames a label or marker takes to fade in once its spring fires.
    #[serde(default = "default_fade_frames")]
    pub fade_frames: f64,
}

fn default_total_frames() -> u64 {
    500
}

fn default_start_delay_frames() -> u64 {
    30
}

fn default_travel_frames() -> u64 {
    120
}

fn default_fade_frames() -> f64 {
    DEFAULT_SPRING_WINDOW_FRAMES
}

impl Journey {
    /// Parse and validate a journey from JSON text.
    pub fn from_json_str(s: &str) -> RailcamResult<Self> {
        let journey: Self = serde_json::from_str(s)?;
        journey.validate()?;
        Ok(journey)
    }

    /// Validate every configuration invariant before any frame is computed.
    pub fn validate(&self) -> RailcamResult<()> {
        if self.stops.len() < 2 {
            return Err(RailcamError::validation(format!(
                "journey needs at least 2 stops, got {}",
                self.stops.len()
            )));
        }
        for (i, stop) in self.stops.iter().enumerate() {
            if !stop.point.is_finite() {
                return Err(RailcamError::validation(format!(
                    "stop {i} ('{}') has a non-finite coordinate",
                    stop.label
                )));
            }
        }
        if self.segments.len() > self.num_segments() {
            return Err(RailcamError::validation(format!(
                "journey has {} segment routes but only {} segments",
                self.segments.len(),
                self.num_segments()
            )));
        }
        for (i, route) in self.segments.iter().enumerate() {
            let Some(route) = route else { continue };
            if route.is_empty() {
                return Err(RailcamError::validation(format!(
                    "segment {i} route must contain at least one point"
                )));
            }
            if route.points().iter().any(|p| !p.is_finite()) {
                return Err(RailcamError::validation(format!(
                    "segment {i} route contains a non-finite point"
                )));
            }
        }

        if self.total_frames < MIN_TIMELINE_FRAMES {
            return Err(RailcamError::validation(format!(
                "total_frames must be >= {MIN_TIMELINE_FRAMES}"
            )));
        }
        if self.travel_frames < MIN_TIMELINE_FRAMES {
            return Err(RailcamError::validation(format!(
                "travel_frames must be >= {MIN_TIMELINE_FRAMES}"
            )));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(RailcamError::validation("fps must have num>0 and den>0"));
        }
        if let Some(zoom) = self.zoom
            && !(1..=MAX_ZOOM).contains(&zoom)
        {
            return Err(RailcamError::validation(format!(
                "zoom must be in [1, {MAX_ZOOM}], got {zoom}"
            )));
        }
        if !(0.0..=1.0).contains(&self.camera.smoothing) {
            return Err(RailcamError::validation(
                "camera.smoothing must be in [0, 1]",
            ));
        }
        if !(2..=MAX_SAMPLE_POINTS).contains(&self.camera.sample_points) {
            return Err(RailcamError::validation(format!(
                "camera.sample_points must be in [2, {MAX_SAMPLE_POINTS}]"
            )));
        }
        if !self.fade_frames.is_finite() || self.fade_frames < 0.0 {
            return Err(RailcamError::validation(
                "fade_frames must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Number of legs between consecutive stops.
    pub fn num_segments(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Timeline derived from the frame counts of this journey.
    pub fn timeline(&self) -> Timeline {
        Timeline {
            total_frames: self.total_frames,
            start_delay_frames: self.start_delay_frames,
            travel_frames: self.travel_frames,
            fps: self.fps,
            num_segments: self.num_segments(),
        }
    }

    /// Stop coordinates in order, exactly as configured.
    pub fn stop_points(&self) -> Vec<GeoPoint> {
        self.stops.iter().map(|s| s.point).collect()
    }

    /// Stop coordinates with longitudes unwrapped so every leg takes the short way around.
    pub fn unwrapped_stop_points(&self) -> Vec<GeoPoint> {
        unwrap_longitudes(&self.stop_points())
    }

    /// Pre-fetched route for segment `index`, if any.
    pub fn route_for(&self, index: usize) -> Option<&Route> {
        self.segments.get(index).and_then(Option::as_ref)
    }

    /// Great-circle length of the journey through every stop, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|w| haversine_km(w[0].point, w[1].point))
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/journey/model.rs"]
mod tests;

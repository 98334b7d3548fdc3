use crate::{
    animation::{ease::Ease, spring::DEFAULT_SPRING_WINDOW_FRAMES},
    foundation::{core::Fps, error::RailcamResult},
    geo::point::GeoPoint,
    journey::model::{CameraConfig, CameraMode, Journey, Route, Stop},
    tiles::style::TileStyle,
};

/// Fluent constructor for [`Journey`] that validates on [`JourneyBuilder::build`].
pub struct JourneyBuilder {
    stops: Vec<Stop>,
    segments: Vec<Option<Route>>,
    total_frames: u64,
    start_delay_frames: u64,
    travel_frames: u64,
    fps: Fps,
    tile_style: TileStyle,
    zoom: Option<u32>,
    camera: CameraConfig,
    ease: Ease,
    fade_frames: f64,
}

impl Default for JourneyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyBuilder {
    /// Start a builder populated with the default timeline.
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            segments: Vec::new(),
            total_frames: 500,
            start_delay_frames: 30,
            travel_frames: 120,
            fps: Fps::default(),
            tile_style: TileStyle::default(),
            zoom: None,
            camera: CameraConfig::default(),
            ease: Ease::default(),
            fade_frames: DEFAULT_SPRING_WINDOW_FRAMES,
        }
    }

    /// Append a stop.
    pub fn stop(mut self, label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.stops.push(Stop::new(label, GeoPoint::new(latitude, longitude)));
        self
    }

    /// Attach a pre-fetched route to segment `index`.
    pub fn route(mut self, index: usize, points: Vec<GeoPoint>) -> Self {
        if self.segments.len() <= index {
            self.segments.resize(index + 1, None);
        }
        self.segments[index] = Some(Route::new(points));
        self
    }

    /// Set the render length in frames.
    pub fn total_frames(mut self, frames: u64) -> Self {
        self.total_frames = frames;
        self
    }

    /// Set the frames held on the first stop before travel starts.
    pub fn start_delay_frames(mut self, frames: u64) -> Self {
        self.start_delay_frames = frames;
        self
    }

    /// Set the frames shared by all segments.
    pub fn travel_frames(mut self, frames: u64) -> Self {
        self.travel_frames = frames;
        self
    }

    /// Set the output frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// Set the background tile style.
    pub fn tile_style(mut self, style: TileStyle) -> Self {
        self.tile_style = style;
        self
    }

    /// Pin the zoom level instead of deriving it from the stops.
    pub fn zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Select the camera path strategy.
    pub fn camera_mode(mut self, mode: CameraMode) -> Self {
        self.camera.mode = mode;
        self
    }

    /// Set the exponential blend strength.
    pub fn camera_smoothing(mut self, smoothing: f64) -> Self {
        self.camera.smoothing = smoothing;
        self
    }

    /// Set the Catmull-Rom resample count.
    pub fn camera_sample_points(mut self, n: u32) -> Self {
        self.camera.sample_points = n;
        self
    }

    /// Set the easing applied within each segment.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the label and marker fade window in frames.
    pub fn fade_frames(mut self, frames: f64) -> Self {
        self.fade_frames = frames;
        self
    }

    /// Assemble and validate the journey.
    pub fn build(self) -> RailcamResult<Journey> {
        let journey = Journey {
            stops: self.stops,
            segments: self.segments,
            total_frames: self.total_frames,
            start_delay_frames: self.start_delay_frames,
            travel_frames: self.travel_frames,
            fps: self.fps,
            tile_style: self.tile_style,
            zoom: self.zoom,
            camera: self.camera,
            ease: self.ease,
            fade_frames: self.fade_frames,
        };
        journey.validate()?;
        Ok(journey)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/journey/builder.rs"]
mod tests;

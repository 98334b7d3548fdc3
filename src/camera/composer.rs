use crate::{
    camera::smoothing::{catmull_rom_along, exponential_blend, interpolate_along, resample},
    foundation::{
        core::{Canvas, FrameIndex, PixelPoint, Vec2},
        error::RailcamResult,
    },
    geo::{
        area::viewport_origin,
        mercator::Projector,
        point::{GeoPoint, unwrap_longitudes},
        zoom::ZoomSolver,
    },
    journey::model::{CameraConfig, CameraMode, Journey},
    timeline::scheduler::{SegmentSchedule, SegmentScheduler, Timeline},
};

/// Camera position for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    /// Geographic center of the viewport (longitude may be unwrapped past ±180°).
    pub center: GeoPoint,
    /// Render zoom, constant for the whole journey.
    pub zoom: u32,
    /// Integer world-pixel position of the viewport's top-left corner.
    pub pixel_offset: PixelPoint,
}

/// Derives the camera center and marker offsets from the journey and the schedule.
///
/// Everything that does not depend on the frame (zoom, unwrapped stops and routes) is resolved
/// once in [`CameraComposer::new`]; per-frame calls are pure.
#[derive(Clone, Debug)]
pub struct CameraComposer {
    stops: Vec<GeoPoint>,
    routes: Vec<Option<Vec<GeoPoint>>>,
    zoom: u32,
    config: CameraConfig,
    timeline: Timeline,
    scheduler: SegmentScheduler,
    follow: Vec<GeoPoint>,
}

impl CameraComposer {
    /// Prepare a composer for `journey`, validating it first.
    ///
    /// In [`CameraMode::Exponential`] the follow filter is run once over the whole timeline here,
    /// so every later frame is a lookup.
    pub fn new(journey: &Journey) -> RailcamResult<Self> {
        journey.validate()?;
        let stops = journey.unwrapped_stop_points();
        let zoom = ZoomSolver::resolve(&stops, journey.zoom);
        let routes = (0..journey.num_segments())
            .map(|i| {
                journey
                    .route_for(i)
                    .map(|r| snap_route(stops[i], stops[i + 1], r.points()))
            })
            .collect();
        let mut composer = Self {
            stops,
            routes,
            zoom,
            config: journey.camera,
            timeline: journey.timeline(),
            scheduler: SegmentScheduler::new(journey.ease),
            follow: Vec::new(),
        };
        if composer.config.mode == CameraMode::Exponential {
            composer.follow = composer.follow_path();
        }
        tracing::debug!(zoom, stops = composer.stops.len(), "camera composer ready");
        Ok(composer)
    }

    /// Resolved render zoom.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Stops after antimeridian unwrapping.
    pub fn stops(&self) -> &[GeoPoint] {
        &self.stops
    }

    /// Route of segment `index`, aligned to the unwrapped stop it leaves from.
    pub fn route(&self, index: usize) -> Option<&[GeoPoint]> {
        self.routes.get(index).and_then(|r| r.as_deref())
    }

    /// Camera state at `frame` for a `canvas`-sized viewport.
    pub fn compose(
        &self,
        frame: FrameIndex,
        schedule: &SegmentSchedule,
        canvas: Canvas,
    ) -> CameraState {
        let center = match self.config.mode {
            CameraMode::None => self.ideal_center(schedule),
            CameraMode::Exponential => self.followed_center(frame),
            CameraMode::CatmullRom => self.spline_center(schedule),
        };
        CameraState {
            center,
            zoom: self.zoom,
            pixel_offset: viewport_origin(center, self.zoom, canvas),
        }
    }

    /// Pixel displacement of every stop's marker relative to `center`.
    pub fn marker_offsets(&self, center: GeoPoint) -> Vec<Vec2> {
        let c = Projector::project(center, self.zoom);
        self.stops
            .iter()
            .map(|&s| Projector::project(s, self.zoom) - c)
            .collect()
    }

    /// Raw center: along the active route when present, else straight between its stops.
    pub fn ideal_center(&self, schedule: &SegmentSchedule) -> GeoPoint {
        let Some(index) = schedule.segment else {
            return self.stops[0];
        };
        if let Some(route) = self.route(index)
            && let Some(p) = interpolate_along(route, schedule.progress)
        {
            return p;
        }
        self.stops[index].lerp(self.stops[index + 1], schedule.progress)
    }

    // Exponential follow of the raw center for every frame of the render.
    fn follow_path(&self) -> Vec<GeoPoint> {
        let mut current = self.stops[0];
        (0..self.timeline.total_frames.max(1))
            .map(|f| {
                if f >= self.timeline.start_delay_frames {
                    let schedule = self.scheduler.schedule(&self.timeline, FrameIndex(f));
                    let target = self.ideal_center(&schedule);
                    current = exponential_blend(current, target, self.config.smoothing);
                }
                current
            })
            .collect()
    }

    fn followed_center(&self, frame: FrameIndex) -> GeoPoint {
        let last = self.follow.len().saturating_sub(1);
        let idx = usize::try_from(frame.0).map_or(last, |f| f.min(last));
        self.follow.get(idx).copied().unwrap_or(self.stops[0])
    }

    fn spline_center(&self, schedule: &SegmentSchedule) -> GeoPoint {
        let Some(index) = schedule.segment else {
            return self.stops[0];
        };
        let sampled = match self.route(index) {
            Some(route) => resample(route, self.config.sample_points as usize),
            None => vec![self.stops[index], self.stops[index + 1]],
        };
        catmull_rom_along(&sampled, schedule.progress)
            .unwrap_or_else(|| self.ideal_center(schedule))
    }
}

// Unwrap a route from the stop it leaves and pin its ends onto both stops, so consecutive
// segments meet exactly.
fn snap_route(from: GeoPoint, to: GeoPoint, points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut with_anchor = Vec::with_capacity(points.len() + 1);
    with_anchor.push(from);
    with_anchor.extend_from_slice(points);
    let mut out = unwrap_longitudes(&with_anchor);
    out.remove(0);
    match out.len() {
        0 => vec![from, to],
        1 => {
            out[0] = from;
            out.push(to);
            out
        }
        n => {
            out[0] = from;
            out[n - 1] = to;
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/composer.rs"]
mod tests;

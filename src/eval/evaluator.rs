use crate::{
    animation::spring::Spring,
    camera::composer::{CameraComposer, CameraState},
    foundation::{
        core::{Canvas, FrameIndex, PixelPoint, Vec2},
        error::RailcamResult,
    },
    geo::{area::BoundingArea, mercator::Projector, point::GeoPoint},
    journey::model::Journey,
    route::geometry::RouteGeometry,
    tiles::grid::{TileGridCalculator, TileRef},
    timeline::{
        markers::{LabelPlacement, MarkerTiming, label_placement},
        scheduler::{SegmentPhase, SegmentScheduler, Timeline},
    },
};

/// Everything a renderer needs to draw one frame.
///
/// Marker offsets and route anchors are relative to the viewport center; tile positions are
/// relative to [`CameraState::pixel_offset`] (the viewport's top-left corner).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    /// Frame index after clamping into the render.
    pub frame: FrameIndex,
    /// Journey phase.
    pub phase: SegmentPhase,
    /// Active segment, `None` before travel starts.
    pub segment: Option<usize>,
    /// Eased progress within the active segment.
    pub progress: f64,
    /// Camera placement.
    pub camera: CameraState,
    /// Visible geographic window.
    pub area: BoundingArea,
    /// Background tiles covering the viewport.
    pub tiles: Vec<TileRef>,
    /// One entry per stop, in journey order.
    pub markers: Vec<MarkerState>,
    /// Routes drawn so far, in segment order.
    pub routes: Vec<RouteFrame>,
}

/// Marker and label of one stop.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkerState {
    /// Stop label.
    pub label: String,
    /// Pixel displacement from the viewport center.
    pub offset: Vec2,
    /// Label opacity in `[0, 1]`.
    pub opacity: f64,
    /// Marker scale in `[0, 1]`.
    pub scale: f64,
    /// Label side.
    pub placement: LabelPlacement,
}

/// A segment's route line and how much of it is drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteFrame {
    /// Segment index.
    pub segment: usize,
    /// Pixel position of the path start relative to the viewport center.
    pub anchor: Vec2,
    /// Path geometry relative to `anchor`.
    pub geometry: RouteGeometry,
    /// Fraction of the path length to draw.
    pub reveal: f64,
}

/// Frame-state evaluator for one journey.
///
/// All frame-independent work (validation, zoom, unwrapping, route geometry) happens in
/// [`Evaluator::new`]. [`Evaluator::eval`] is a pure function of the frame and viewport, so
/// frames can be evaluated in any order or in parallel.
#[derive(Clone, Debug)]
pub struct Evaluator {
    composer: CameraComposer,
    timeline: Timeline,
    scheduler: SegmentScheduler,
    markers: MarkerTiming,
    labels: Vec<String>,
    placements: Vec<LabelPlacement>,
    routes: Vec<(PixelPoint, RouteGeometry)>,
}

impl Evaluator {
    /// Validate `journey` and precompute its static geometry.
    pub fn new(journey: &Journey) -> RailcamResult<Self> {
        let composer = CameraComposer::new(journey)?;
        let zoom = composer.zoom();
        let stops = composer.stops();
        let placements = (0..stops.len()).map(|k| label_placement(stops, k)).collect();
        let routes = (0..journey.num_segments())
            .map(|i| {
                let geometry = match composer.route(i) {
                    Some(route) => RouteGeometry::from_route(route, zoom),
                    None => RouteGeometry::synthetic(stops[i], stops[i + 1], zoom),
                };
                (Projector::project(stops[i], zoom), geometry)
            })
            .collect();

        Ok(Self {
            timeline: journey.timeline(),
            scheduler: SegmentScheduler::new(journey.ease),
            markers: MarkerTiming::new(Spring::new(journey.fade_frames)),
            labels: journey.stops.iter().map(|s| s.label.clone()).collect(),
            placements,
            routes,
            composer,
        })
    }

    /// Validate `journey` and evaluate a single frame.
    #[tracing::instrument(skip(journey))]
    pub fn eval_frame(
        journey: &Journey,
        frame: FrameIndex,
        canvas: Canvas,
    ) -> RailcamResult<FrameState> {
        Ok(Self::new(journey)?.eval(frame, canvas))
    }

    /// Render zoom.
    pub fn zoom(&self) -> u32 {
        self.composer.zoom()
    }

    /// Timeline of the journey.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Evaluate `frame` for a `canvas`-sized viewport. Out-of-range frames are clamped.
    pub fn eval(&self, frame: FrameIndex, canvas: Canvas) -> FrameState {
        let frame = FrameIndex(frame.0.min(self.timeline.total_frames.saturating_sub(1)));
        let schedule = self.scheduler.schedule(&self.timeline, frame);
        let camera = self.composer.compose(frame, &schedule, canvas);
        let area = BoundingArea::around(camera.center, camera.zoom, canvas);
        let tiles = TileGridCalculator::compute(&area, camera.zoom, camera.pixel_offset);

        let markers = self
            .composer
            .marker_offsets(camera.center)
            .into_iter()
            .enumerate()
            .map(|(k, offset)| MarkerState {
                label: self.labels[k].clone(),
                offset,
                opacity: self.markers.label_opacity(&self.timeline, k, frame),
                scale: self.markers.marker_scale(&self.timeline, k, frame),
                placement: self.placements[k],
            })
            .collect();

        let center_px = Projector::project(camera.center, camera.zoom);
        let routes = match schedule.segment {
            None => Vec::new(),
            Some(active) => self.routes[..=active]
                .iter()
                .enumerate()
                .map(|(i, (start, geometry))| RouteFrame {
                    segment: i,
                    anchor: *start - center_px,
                    geometry: geometry.clone(),
                    reveal: if i < active { 1.0 } else { schedule.progress },
                })
                .collect(),
        };

        FrameState {
            frame,
            phase: schedule.phase,
            segment: schedule.segment,
            progress: schedule.progress,
            camera,
            area,
            tiles,
            markers,
            routes,
        }
    }

    /// Unwrapped stop coordinates.
    pub fn stops(&self) -> &[GeoPoint] {
        self.composer.stops()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;

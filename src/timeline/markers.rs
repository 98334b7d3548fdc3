use crate::{
    animation::spring::Spring,
    foundation::core::FrameIndex,
    geo::point::GeoPoint,
    timeline::scheduler::Timeline,
};

// Markers start scaling in slightly before the label fades in.
const MARKER_LEAD_FRAMES: f64 = 3.0;

/// Where a stop label sits relative to its marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPlacement {
    /// Label drawn above the marker.
    Above,
    /// Label drawn below the marker.
    Below,
}

/// Per-stop fade and scale timing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerTiming {
    spring: Spring,
}

impl MarkerTiming {
    /// Timing driven by a custom spring.
    pub fn new(spring: Spring) -> Self {
        Self { spring }
    }

    /// Label opacity of stop `k` at `frame`.
    ///
    /// The first stop fades out as travel starts; every later stop fades in from its arrival.
    pub fn label_opacity(&self, timeline: &Timeline, k: usize, frame: FrameIndex) -> f64 {
        let f = frame.0 as f64;
        if k == 0 {
            1.0 - self.spring.progress(f - timeline.start_delay_frames as f64)
        } else {
            self.spring.progress(f - timeline.arrival_frame(k))
        }
    }

    /// Marker scale of stop `k` at `frame`. The first stop is always fully visible.
    pub fn marker_scale(&self, timeline: &Timeline, k: usize, frame: FrameIndex) -> f64 {
        if k == 0 {
            return 1.0;
        }
        let f = frame.0 as f64;
        self.spring.progress(f - timeline.arrival_frame(k) + MARKER_LEAD_FRAMES)
    }
}

/// Label placement of stop `k`: above when it lies north of the mean latitude of its
/// neighbours, below otherwise.
pub fn label_placement(stops: &[GeoPoint], k: usize) -> LabelPlacement {
    let mut sum = 0.0;
    let mut count = 0.0;
    if k > 0
        && let Some(prev) = stops.get(k - 1)
    {
        sum += prev.latitude;
        count += 1.0;
    }
    if let Some(next) = stops.get(k + 1) {
        sum += next.latitude;
        count += 1.0;
    }
    match stops.get(k) {
        Some(stop) if count > 0.0 && stop.latitude > sum / count => LabelPlacement::Above,
        _ => LabelPlacement::Below,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/markers.rs"]
mod tests;

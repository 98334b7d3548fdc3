use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Fps},
};

/// Frame budget of a journey render.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Total frames in the render.
    pub total_frames: u64,
    /// Frames held on the first stop.
    pub start_delay_frames: u64,
    /// Frames shared evenly by every segment.
    pub travel_frames: u64,
    /// Output frame rate.
    pub fps: Fps,
    /// Number of segments (`stops - 1`).
    pub num_segments: usize,
}

impl Timeline {
    /// Length of one segment in (possibly fractional) frames.
    pub fn segment_duration(&self) -> f64 {
        self.travel_frames as f64 / self.num_segments.max(1) as f64
    }

    /// Frame at which stop `k` is reached; stop 0 is "reached" when travel starts.
    pub fn arrival_frame(&self, k: usize) -> f64 {
        self.start_delay_frames as f64 + k as f64 * self.segment_duration()
    }

    /// First frame after travel ends.
    pub fn travel_end(&self) -> u64 {
        self.start_delay_frames.saturating_add(self.travel_frames)
    }

    /// Clamp any requested frame into `[0, total_frames - 1]`.
    pub fn clamp_frame(&self, frame: i64) -> FrameIndex {
        let last = self.total_frames.saturating_sub(1);
        FrameIndex(u64::try_from(frame).unwrap_or(0).min(last))
    }

    /// Duration of the whole render in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.total_frames)
    }
}

/// Coarse state of the journey at a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentPhase {
    /// Before travel starts; the camera rests on the first stop.
    PreDelay,
    /// Travelling along segment `index`.
    InSegment {
        /// Active segment.
        index: usize,
    },
    /// Travel finished; pinned to the last segment at full progress.
    Done,
}

/// Scheduler output for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSchedule {
    /// Phase at this frame.
    pub phase: SegmentPhase,
    /// Active segment, `None` during [`SegmentPhase::PreDelay`].
    pub segment: Option<usize>,
    /// Linear progress within the active segment.
    pub linear_progress: f64,
    /// Eased progress within the active segment.
    pub progress: f64,
}

/// Maps a frame to the active segment and its eased progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentScheduler {
    ease: Ease,
}

impl SegmentScheduler {
    /// Scheduler using the given easing curve.
    pub fn new(ease: Ease) -> Self {
        Self { ease }
    }

    /// Evaluate the schedule at `frame`.
    ///
    /// Segment boundaries use real division, so with uneven splits a boundary falls between
    /// frames and the bucketing rounds down.
    pub fn schedule(&self, timeline: &Timeline, frame: FrameIndex) -> SegmentSchedule {
        let f = frame.0;
        if f < timeline.start_delay_frames {
            return SegmentSchedule {
                phase: SegmentPhase::PreDelay,
                segment: None,
                linear_progress: 0.0,
                progress: 0.0,
            };
        }
        let last = timeline.num_segments.saturating_sub(1);
        if f >= timeline.travel_end() {
            return SegmentSchedule {
                phase: SegmentPhase::Done,
                segment: Some(last),
                linear_progress: 1.0,
                progress: 1.0,
            };
        }

        let elapsed = (f - timeline.start_delay_frames) as f64;
        let duration = timeline.segment_duration();
        let index = ((elapsed / duration).floor() as usize).min(last);
        let linear = ((elapsed - index as f64 * duration) / duration).clamp(0.0, 1.0);
        SegmentSchedule {
            phase: SegmentPhase::InSegment { index },
            segment: Some(index),
            linear_progress: linear,
            progress: self.ease.apply(linear),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;

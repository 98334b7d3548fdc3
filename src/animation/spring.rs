//! Critically-damped approach-to-one curve used for label and marker fades.

/// Default settle window, in frames.
pub const DEFAULT_SPRING_WINDOW_FRAMES: f64 = 20.0;

// Dimensionless time at which the raw response e^-x (1 + x) has decayed to ~1e-3.
const SETTLE_RATE: f64 = 9.233_413;

/// A critically-damped response from 0 to 1 that settles within a fixed frame window.
///
/// The response is normalized so that it is exactly `1.0` at the end of the window and stays
/// there; before the window (negative frame offsets) it is exactly `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Frames needed to reach the target.
    pub window_frames: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            window_frames: DEFAULT_SPRING_WINDOW_FRAMES,
        }
    }
}

impl Spring {
    /// Create a spring that settles after `window_frames` frames (non-positive windows snap).
    pub fn new(window_frames: f64) -> Self {
        Self { window_frames }
    }

    /// Sample the response `frames` after the spring was triggered.
    ///
    /// Monotonic non-decreasing and bounded in `[0, 1]`.
    pub fn progress(self, frames: f64) -> f64 {
        if !frames.is_finite() {
            return if frames > 0.0 { 1.0 } else { 0.0 };
        }
        if frames <= 0.0 {
            return 0.0;
        }
        if self.window_frames <= 0.0 || frames >= self.window_frames {
            return 1.0;
        }
        let x = SETTLE_RATE * frames / self.window_frames;
        let raw = 1.0 - (-x).exp() * (1.0 + x);
        let full = 1.0 - (-SETTLE_RATE).exp() * (1.0 + SETTLE_RATE);
        (raw / full).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

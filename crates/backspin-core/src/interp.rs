//! Interpolated reads at fractional frame positions.
//!
//! Each method clamps its low index so the read window stays inside the
//! buffer:
//!
//! - **Nearest** reads `floor(phase)`.
//! - **Linear** reads `[low, low + 1]` with `low = min(floor(phase), frames - 2)`.
//!   The fraction is clamped to `[0, 1]`, so the last frame interval holds the
//!   final sample.
//! - **Cubic** reads `[low - 1, low + 2]` with `low = floor(phase)`. The
//!   polynomial is only evaluated for `x` in `[0, 1)`; in the outer intervals
//!   (`phase < 1` or `phase >= frames - 2`) the window would not fit and the
//!   read falls back to linear.
//!
//! Reads never leave the range spanned by their neighbouring samples near the
//! edges. A phase outside `[0, frames)` is a caller bug and trips a debug
//! assertion.

use serde::{Deserialize, Serialize};

use crate::view::BufferView;

/// Interpolation order for fractional reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// 0th order: sample at the integer part.
    Nearest,
    /// 1st order between two neighbouring frames.
    Linear,
    /// 4-point, 3rd order (Catmull-Rom).
    #[default]
    Cubic,
}

impl Interpolation {
    /// Smallest buffer, in frames, the method can read from.
    pub const fn min_frames(self) -> usize {
        match self {
            Self::Nearest => 1,
            Self::Linear => 2,
            Self::Cubic => 4,
        }
    }
}

/// Four-point cubic through `y1` (x = 0) and `y2` (x = 1).
#[inline]
pub fn cubic_interp(x: f32, y0: f32, y1: f32, y2: f32, y3: f32) -> f32 {
    let c0 = y1;
    let c1 = 0.5 * (y2 - y0);
    let c2 = y0 - 2.5 * y1 + 2.0 * y2 - 0.5 * y3;
    let c3 = 0.5 * (y3 - y0) + 1.5 * (y1 - y2);

    ((c3 * x + c2) * x + c1) * x + c0
}

impl BufferView<'_> {
    /// Interpolated sample on `channel` at `phase`.
    #[inline]
    pub fn read(&self, channel: usize, phase: f64, interpolation: Interpolation) -> f32 {
        match interpolation {
            Interpolation::Nearest => self.read_nearest(channel, phase),
            Interpolation::Linear => self.read_linear(channel, phase),
            Interpolation::Cubic => self.read_cubic(channel, phase),
        }
    }

    #[inline]
    fn check_phase(&self, phase: f64) {
        debug_assert!(
            (0.0..self.frames() as f64).contains(&phase),
            "phase {phase} outside [0, {})",
            self.frames()
        );
    }

    #[inline]
    pub fn read_nearest(&self, channel: usize, phase: f64) -> f32 {
        self.check_phase(phase);
        let index = (phase as usize).min(self.frames() - 1);
        self.frame(channel, index)
    }

    #[inline]
    pub fn read_linear(&self, channel: usize, phase: f64) -> f32 {
        self.check_phase(phase);
        debug_assert!(self.frames() >= Interpolation::Linear.min_frames());

        let low = (phase as usize).min(self.frames() - 2);
        let frac = ((phase - low as f64) as f32).min(1.0);

        let t1 = self.frame(channel, low);
        let t2 = self.frame(channel, low + 1);
        t1 + frac * (t2 - t1)
    }

    #[inline]
    pub fn read_cubic(&self, channel: usize, phase: f64) -> f32 {
        self.check_phase(phase);
        debug_assert!(self.frames() >= Interpolation::Cubic.min_frames());

        if phase < 1.0 || phase >= (self.frames() - 2) as f64 {
            return self.read_linear(channel, phase);
        }

        let low = phase as usize;
        let x = (phase - low as f64) as f32;

        let t0 = self.frame(channel, low - 1);
        let t1 = self.frame(channel, low);
        let t2 = self.frame(channel, low + 1);
        let t3 = self.frame(channel, low + 2);
        cubic_interp(x, t0, t1, t2, t3)
    }
}

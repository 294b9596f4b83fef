//! Deferred playback-direction switching.
//!
//! A flip is requested instantly but only committed when reversing cannot
//! click: the read position must be outside the edge guard band, and the
//! step the reversed playhead would take must land on a sample within
//! `threshold` of the current one. Until then the request stays pending and
//! is re-evaluated every sample.

use backspin_core::{BufferView, Interpolation, Phase};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1.0 forward, -1.0 backward.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    pub fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }
}

/// Trigger level a control signal must rise through to request a flip.
pub const TRIGGER_LEVEL: f32 = 0.5;

/// Tracks active vs requested direction and decides when a flip commits.
#[derive(Debug, Clone)]
pub struct DirectionController {
    direction: Direction,
    target: Direction,
    edge_guard: f64,
    max_deferral: Option<u32>,
    deferred: u32,
    last_trigger: f32,
}

impl DirectionController {
    pub fn new(edge_guard: f64, max_deferral: Option<u32>) -> Self {
        Self {
            direction: Direction::Forward,
            target: Direction::Forward,
            edge_guard,
            max_deferral,
            deferred: 0,
            last_trigger: 0.0,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn target(&self) -> Direction {
        self.target
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.direction != self.target
    }

    /// Samples the current request has been waiting.
    pub fn deferred_samples(&self) -> u32 {
        self.deferred
    }

    /// Flip the requested direction. A second request before the first
    /// commits cancels it.
    pub fn request_flip(&mut self) {
        self.target = self.target.flipped();
        self.deferred = 0;
    }

    /// Feed one trigger sample. Requests a flip on a rising crossing of
    /// [`TRIGGER_LEVEL`] and returns whether it fired.
    #[inline]
    pub fn trigger(&mut self, value: f32) -> bool {
        let fired = self.last_trigger < TRIGGER_LEVEL && value >= TRIGGER_LEVEL;
        self.last_trigger = value;
        if fired {
            self.request_flip();
        }
        fired
    }

    /// Whether `phase` lies in the first or last `edge_guard` frames.
    #[inline]
    pub fn in_edge_band(&self, phase: f64, frames: f64) -> bool {
        phase < self.edge_guard || phase >= frames - self.edge_guard
    }

    /// Commit a pending flip if the waveform is flat enough at `phase`.
    ///
    /// `rate` is the unsigned-direction step per sample; the probe reads one
    /// such step in the requested direction. Returns whether the direction
    /// changed.
    pub fn try_commit(
        &mut self,
        view: &BufferView<'_>,
        channel: usize,
        phase: f64,
        rate: f64,
        threshold: f32,
        interpolation: Interpolation,
    ) -> bool {
        if !self.is_pending() {
            return false;
        }

        let frames = view.frames() as f64;
        if self.in_edge_band(phase, frames) {
            self.deferred = self.deferred.saturating_add(1);
            return false;
        }

        let forced = self.max_deferral.is_some_and(|max| self.deferred >= max);
        if !forced {
            let mut probe = Phase::at(phase);
            probe.increment(rate * self.target.sign(), frames);

            let here = view.read(channel, phase, interpolation);
            let there = view.read(channel, probe.value(), interpolation);
            if !((here - there).abs() < threshold) {
                self.deferred = self.deferred.saturating_add(1);
                return false;
            }
        }

        trace!(
            from = ?self.direction,
            to = ?self.target,
            phase,
            deferred = self.deferred,
            forced,
            "direction committed"
        );
        self.direction = self.target;
        self.deferred = 0;
        true
    }

    /// Back to forward with nothing pending.
    pub fn reset(&mut self) {
        self.direction = Direction::Forward;
        self.target = Direction::Forward;
        self.deferred = 0;
        self.last_trigger = 0.0;
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new(2.0, None)
    }
}

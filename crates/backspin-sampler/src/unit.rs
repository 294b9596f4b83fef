//! Smooth-reversal playback unit.

use std::sync::Arc;

use backspin_core::Phase;

use crate::binder::{buffer_index, BufferBinder, BufferBinding};
use crate::config::ReversalConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::direction::{Direction, DirectionController};
use crate::error::Result;
use crate::signal::{BlockContext, UnitInputs};

/// Plays one channel of a host buffer at a varying rate, reversing
/// direction on trigger without clicks.
///
/// Per sample, in order: the trigger is read, a pending direction flip is
/// offered to the [`DirectionController`], the phase advances by
/// `rate × direction`, and the buffer is read at the new phase. When the
/// buffer cannot be bound the whole block is silent and the phase holds,
/// but trigger edges are still tracked.
pub struct SmoothReversalUnit {
    config: ReversalConfig,
    binder: BufferBinder,
    controller: DirectionController,
    phase: Phase,
}

impl SmoothReversalUnit {
    /// Create a unit reporting through `tracing`.
    pub fn new(config: ReversalConfig) -> Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a unit reporting binding faults to `sink`.
    pub fn with_sink(config: ReversalConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            binder: BufferBinder::new(config.min_frames(), sink),
            controller: DirectionController::new(config.edge_guard_frames, config.max_deferral),
            phase: Phase::at(config.start_frame),
            config,
        })
    }

    pub fn config(&self) -> &ReversalConfig {
        &self.config
    }

    /// Current read position in frames.
    pub fn phase(&self) -> f64 {
        self.phase.value()
    }

    pub fn direction(&self) -> Direction {
        self.controller.direction()
    }

    pub fn target_direction(&self) -> Direction {
        self.controller.target()
    }

    pub fn is_switch_pending(&self) -> bool {
        self.controller.is_pending()
    }

    /// Binding from the last block, if it resolved.
    pub fn binding(&self) -> Option<&BufferBinding> {
        self.binder.binding()
    }

    /// Request a flip outside the trigger input.
    pub fn request_direction_switch(&mut self) {
        self.controller.request_flip();
    }

    /// Back to the start frame, forward, nothing pending.
    pub fn reset(&mut self) {
        self.phase = Phase::at(self.config.start_frame);
        self.controller.reset();
        self.binder.clear();
    }

    /// Render one block into `output`. Inputs are read for
    /// `output.len()` samples.
    pub fn process(
        &mut self,
        ctx: &BlockContext<'_>,
        inputs: &UnitInputs<'_>,
        output: &mut [f32],
    ) {
        let id = buffer_index(inputs.buffer_id.at(0));
        let Some(handle) = self.binder.resolve(
            id,
            ctx.buffers,
            self.config.expected_channels,
            ctx.finishing,
        ) else {
            self.silence(inputs, output);
            return;
        };
        let Some(view) = handle.view() else {
            self.silence(inputs, output);
            return;
        };

        let frames = view.frames() as f64;
        self.phase.wrap(frames);

        let scale = if self.config.scale_to_buffer_rate && ctx.sample_rate > 0.0 {
            handle.sample_rate() / ctx.sample_rate
        } else {
            1.0
        };
        let channel = self.config.channel;
        let interpolation = self.config.interpolation;

        for (i, out) in output.iter_mut().enumerate() {
            self.controller.trigger(inputs.trigger.at(i));

            let rate = inputs.rate.at(i) as f64;
            let rate = if rate.is_finite() { rate * scale } else { 0.0 };

            if self.controller.is_pending() {
                self.controller.try_commit(
                    &view,
                    channel,
                    self.phase.value(),
                    rate,
                    inputs.threshold.at(i),
                    interpolation,
                );
            }

            let step = rate * self.controller.direction().sign();
            let phase = self.phase.increment(step, frames);
            *out = view.read(channel, phase, interpolation);
        }
    }

    /// Unbound block: the playhead holds but trigger edges still register,
    /// so a flip requested here commits once a buffer is bound again.
    fn silence(&mut self, inputs: &UnitInputs<'_>, output: &mut [f32]) {
        for i in 0..output.len() {
            self.controller.trigger(inputs.trigger.at(i));
        }
        output.fill(0.0);
    }
}

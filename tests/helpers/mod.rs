//! Test helpers and fixtures for Backspin integration tests.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`]:
//! - `FLOAT_EPSILON` (1e-6): exact reads
//! - `DSP_EPSILON` (1e-4): interpolated reads
//! - `CONTINUITY_LIMIT` (0.05): click detection on slow test signals

#![allow(dead_code)]

pub mod tolerances;

use std::fmt;
use std::sync::Arc;

use backspin::core::compat::Mutex;
use backspin::prelude::*;
use backspin::DiagnosticSink;

/// Default test sample rate.
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Standard block size for deterministic testing.
pub const TEST_BLOCK_SIZE: usize = 64;

/// Generate a sine wave at `frequency` for `num_samples`.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate an integer staircase [0, 1, 2, ..., n-1].
pub fn generate_integer_staircase(num_samples: usize) -> Vec<f32> {
    (0..num_samples).map(|i| i as f32).collect()
}

/// Pool with `data` loaded as mono in slot 0.
pub fn mono_pool(data: &[f32]) -> BufferPool {
    let pool = BufferPool::new(8);
    pool.set(0, SampleBuffer::from_mono(data, TEST_SAMPLE_RATE).unwrap())
        .unwrap();
    pool
}

/// Peak absolute difference between consecutive samples.
pub fn max_step(samples: &[f32]) -> f32 {
    samples
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(0.0_f32, f32::max)
}

/// Assert every sample is exactly zero.
pub fn assert_exact_silence(samples: &[f32]) {
    if let Some((i, s)) = samples.iter().enumerate().find(|(_, s)| **s != 0.0) {
        panic!("Expected exact silence, sample {} was {}", i, s);
    }
}

/// Diagnostic sink that records every message.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, message: &dyn fmt::Display) {
        self.messages.lock().push(message.to_string());
    }
}

/// Render `blocks` blocks of `block` samples with constant controls.
pub fn render_constant(
    unit: &mut SmoothReversalUnit,
    pool: &BufferPool,
    buffer_id: f32,
    rate: f32,
    threshold: f32,
    block: usize,
    blocks: usize,
) -> Vec<f32> {
    let ctx = BlockContext::new(pool, TEST_SAMPLE_RATE);
    let inputs = UnitInputs::new(buffer_id, rate, 0.0f32, threshold);
    let mut out = vec![0.0; block * blocks];
    for chunk in out.chunks_mut(block) {
        unit.process(&ctx, &inputs, chunk);
    }
    out
}

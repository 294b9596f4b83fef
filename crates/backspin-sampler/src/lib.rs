//! Smooth-reversal sample playback.
//!
//! Reads one channel of a host buffer at a continuously varying rate and
//! reverses direction on trigger, deferring each reversal until the local
//! waveform is flat enough that turning around cannot click.
//!
//! # Components
//!
//! - **[`BufferBinder`]**: resolves buffer identifiers to read-locked handles,
//!   caches the binding, reports each bad identifier once
//! - **[`DirectionController`]**: requested vs active direction, edge guard
//!   and flatness test
//! - **[`SmoothReversalUnit`]**: the per-block processing loop
//!
//! # Example
//!
//! ```
//! use backspin_core::{BufferPool, SampleBuffer};
//! use backspin_sampler::{BlockContext, ReversalConfig, SmoothReversalUnit, UnitInputs};
//!
//! let pool = BufferPool::new(8);
//! pool.set(0, SampleBuffer::from_mono(&[0.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 0.0], 48000.0)?)?;
//!
//! let mut unit = SmoothReversalUnit::new(ReversalConfig::default().start_frame(4.0))?;
//! let ctx = BlockContext::new(&pool, 48000.0);
//!
//! // buffer 0, rate 1.0, trigger high, threshold 0.01
//! let inputs = UnitInputs::new(0.0f32, 1.0f32, 1.0f32, 0.01f32);
//! let mut out = [0.0f32; 4];
//! unit.process(&ctx, &inputs, &mut out);
//! assert!(out[0] > out[3]);
//! # Ok::<(), backspin_sampler::Error>(())
//! ```

pub mod error;
pub use error::{BindError, Error, Result};

mod config;
pub use config::ReversalConfig;

pub mod binder;
pub use binder::{buffer_index, BufferBinder, BufferBinding};

pub mod direction;
pub use direction::{Direction, DirectionController, TRIGGER_LEVEL};

mod diagnostics;
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};

mod signal;
pub use signal::{BlockContext, Signal, UnitInputs};

mod unit;
pub use unit::SmoothReversalUnit;

//! # Backspin - click-free reversible buffer playback
//!
//! Plays a pre-loaded sample buffer at a continuously varying rate and
//! reverses direction on demand. A reversal is requested immediately but
//! applied only once the waveform under the playhead is locally flat, so
//! turning around never injects a discontinuity.
//!
//! ## Architecture
//!
//! Backspin is an umbrella crate over:
//! - **backspin-core** - buffer storage, scoped read handles, phase, interpolation
//! - **backspin-sampler** - buffer binding, direction control, processing unit
//!
//! ## Quick Start
//!
//! ```
//! use backspin::prelude::*;
//!
//! let pool = BufferPool::new(16);
//! let tent = [0.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 0.0];
//! pool.set(0, SampleBuffer::from_mono(&tent, 48000.0)?)?;
//!
//! let mut unit = SmoothReversalUnit::new(ReversalConfig::default().start_frame(4.0))?;
//!
//! let trigger = [1.0f32, 1.0, 1.0, 1.0];
//! let inputs = UnitInputs::new(0.0f32, 1.0f32, &trigger, 0.01f32);
//! let mut out = [0.0f32; 4];
//! unit.process(&BlockContext::new(&pool, 48000.0), &inputs, &mut out);
//!
//! assert_eq!(unit.direction(), Direction::Backward);
//! # Ok::<(), backspin::Error>(())
//! ```

/// Re-export of backspin-core for direct access
pub use backspin_core as core;

/// Re-export of backspin-sampler for direct access
pub use backspin_sampler as sampler;

pub use backspin_core::{
    cubic_interp, BufferHandle, BufferPool, BufferTable, BufferView, Interpolation, Phase,
    SampleBuffer, SharedBuffer,
};

pub use backspin_sampler::{
    buffer_index, BindError, BlockContext, BufferBinder, BufferBinding, DiagnosticSink,
    Direction, DirectionController, NullSink, ReversalConfig, Signal, SmoothReversalUnit,
    TracingSink, UnitInputs, TRIGGER_LEVEL,
};

mod error;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    // Buffers
    pub use crate::core::{BufferPool, BufferTable, Interpolation, SampleBuffer};

    // Playback
    pub use crate::sampler::{
        BlockContext, Direction, ReversalConfig, Signal, SmoothReversalUnit, UnitInputs,
    };
}

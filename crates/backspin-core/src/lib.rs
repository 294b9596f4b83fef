//! Buffer layer for the Backspin playback engine.
//!
//! - [`SampleBuffer`] / [`BufferPool`]: host-owned interleaved storage and the
//!   [`BufferTable`] lookup the engine resolves identifiers through
//! - [`BufferHandle`]: non-blocking scoped shared-read guard over a slot
//! - [`BufferView`]: nearest / linear / cubic reads at fractional positions
//! - [`Phase`]: wrapping read-position accumulator
//!
//! # Example
//!
//! ```
//! use backspin_core::{BufferHandle, BufferPool, BufferTable, Interpolation, Phase, SampleBuffer};
//!
//! let pool = BufferPool::new(4);
//! pool.set(0, SampleBuffer::from_mono(&[0.0, 1.0, 2.0, 3.0, 2.0, 1.0], 48000.0)?)?;
//!
//! let handle = BufferHandle::acquire(pool.get(0).unwrap()).unwrap();
//! let view = handle.view().unwrap();
//!
//! let mut phase = Phase::at(1.0);
//! phase.increment(0.5, view.frames() as f64);
//! let sample = view.read(0, phase.value(), Interpolation::Linear);
//! assert_eq!(sample, 1.5);
//! # Ok::<(), backspin_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod compat;

mod buffer;
pub use buffer::{BufferPool, BufferTable, SampleBuffer, SharedBuffer};

mod handle;
pub use handle::BufferHandle;

mod view;
pub use view::BufferView;

pub mod interp;
pub use interp::{cubic_interp, Interpolation};

mod phase;
pub use phase::Phase;

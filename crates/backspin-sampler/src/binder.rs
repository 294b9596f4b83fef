//! Buffer identifier resolution with a cached binding.
//!
//! Resolving runs once per block. While the requested identifier and the
//! buffer's generation are unchanged, the cached binding is reused and only
//! the read lock is taken. Anything else revalidates: table bounds, loaded
//! data, channel count and minimum length. All checks are O(1).
//!
//! Failures are reported once per distinct identifier so a bad id that
//! persists for thousands of blocks produces a single diagnostic.

use std::sync::Arc;

use backspin_core::{BufferHandle, BufferTable, SharedBuffer};
use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::error::BindError;

/// Identifier carried by a buffer-id input signal.
///
/// Truncates toward negative infinity; NaN maps to -1 so it can never name
/// a slot.
#[inline]
pub fn buffer_index(value: f32) -> i64 {
    if value.is_nan() {
        -1
    } else {
        value.floor() as i64
    }
}

/// A validated association between an identifier and a buffer slot.
///
/// Records the shape it was validated against; a later generation means the
/// host reshaped or reloaded the slot and the binding must be rechecked.
#[derive(Debug, Clone)]
pub struct BufferBinding {
    id: i64,
    buffer: SharedBuffer,
    channels: usize,
    frames: usize,
    generation: u64,
}

impl BufferBinding {
    #[inline]
    pub fn holds_id(&self, id: i64) -> bool {
        self.id == id
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl PartialEq for BufferBinding {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Resolves identifiers to read-locked buffer handles.
pub struct BufferBinder {
    binding: Option<BufferBinding>,
    last_invalid: Option<i64>,
    min_frames: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl BufferBinder {
    pub fn new(min_frames: usize, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            binding: None,
            last_invalid: None,
            min_frames: min_frames.max(1),
            sink,
        }
    }

    /// Current binding, if the last resolve succeeded.
    pub fn binding(&self) -> Option<&BufferBinding> {
        self.binding.as_ref()
    }

    /// Identifier of the last reported failure.
    pub fn last_invalid(&self) -> Option<i64> {
        self.last_invalid
    }

    /// Drop the cached binding and the failure memory.
    pub fn clear(&mut self) {
        self.binding = None;
        self.last_invalid = None;
    }

    /// Resolve `id` to a read-locked handle.
    ///
    /// Returns `None` when the buffer cannot be read this block. `quiet`
    /// suppresses diagnostics while the unit is finishing.
    pub fn resolve(
        &mut self,
        id: i64,
        table: &dyn BufferTable,
        expected_channels: usize,
        quiet: bool,
    ) -> Option<BufferHandle> {
        if let Some(binding) = self.binding.as_ref().filter(|b| b.holds_id(id)) {
            match BufferHandle::acquire(&binding.buffer) {
                Some(handle) if handle.generation() == binding.generation => {
                    return Some(handle);
                }
                Some(_) => {
                    debug!(id, "buffer changed shape, revalidating binding");
                }
                None => {
                    debug!(id, "buffer busy, skipping block");
                    return None;
                }
            }
        }

        match self.validate(id, table, expected_channels) {
            Ok((binding, handle)) => {
                if self.binding.as_ref() != Some(&binding) {
                    debug!(
                        id,
                        channels = binding.channels,
                        frames = binding.frames,
                        "bound buffer"
                    );
                }
                self.binding = Some(binding);
                self.last_invalid = None;
                Some(handle)
            }
            Err(BindError::Busy { .. }) => {
                debug!(id, "buffer busy, skipping block");
                None
            }
            Err(err) => {
                self.binding = None;
                if !quiet && self.last_invalid != Some(id) {
                    self.sink.emit(&err);
                    self.last_invalid = Some(id);
                }
                None
            }
        }
    }

    fn validate(
        &self,
        id: i64,
        table: &dyn BufferTable,
        expected_channels: usize,
    ) -> Result<(BufferBinding, BufferHandle), BindError> {
        let len = table.len();
        let shared = usize::try_from(id)
            .ok()
            .and_then(|index| table.get(index))
            .ok_or(BindError::InvalidId { id, len })?;

        let handle = BufferHandle::acquire(shared).ok_or(BindError::Busy { id })?;

        if !handle.is_loaded() {
            return Err(BindError::NotLoaded { id });
        }
        if handle.channels() != expected_channels {
            return Err(BindError::ChannelMismatch {
                id,
                expected: expected_channels,
                actual: handle.channels(),
            });
        }
        if handle.frames() < self.min_frames {
            return Err(BindError::TooShort {
                id,
                frames: handle.frames(),
                min: self.min_frames,
            });
        }

        let binding = BufferBinding {
            id,
            buffer: Arc::clone(shared),
            channels: handle.channels(),
            frames: handle.frames(),
            generation: handle.generation(),
        };
        Ok((binding, handle))
    }
}

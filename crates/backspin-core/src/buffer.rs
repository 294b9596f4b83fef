//! Host-owned sample storage.
//!
//! A [`SampleBuffer`] holds interleaved frames (`frame * channels + channel`).
//! Buffers live in slots of a [`BufferTable`] and are shared with the audio
//! thread as [`SharedBuffer`]s; readers take a scoped shared-read guard
//! through [`BufferHandle`](crate::BufferHandle).
//!
//! A slot may be allocated without data (not yet loaded). Every structural
//! change bumps the buffer's generation so cached bindings can notice a
//! reshape without re-running full validation.

use crate::compat::{Arc, RwLock};
use crate::error::{Error, Result};
use crate::view::BufferView;

/// A buffer shared between the host and its readers.
pub type SharedBuffer = Arc<RwLock<SampleBuffer>>;

/// Interleaved sample storage with shape metadata.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    channels: usize,
    frames: usize,
    sample_rate: f64,
    data: Option<Box<[f32]>>,
    generation: u64,
}

impl SampleBuffer {
    /// An unallocated slot: no channels, no frames, no data.
    pub fn empty() -> Self {
        Self {
            channels: 0,
            frames: 0,
            sample_rate: 0.0,
            data: None,
            generation: 0,
        }
    }

    /// Allocate the shape without data. Reads fail until [`load`](Self::load).
    pub fn unloaded(channels: usize, frames: usize, sample_rate: f64) -> Result<Self> {
        validate_shape(channels, frames)?;
        validate_sample_rate(sample_rate)?;
        Ok(Self {
            channels,
            frames,
            sample_rate,
            data: None,
            generation: 0,
        })
    }

    /// Wrap interleaved samples.
    pub fn from_interleaved(data: Vec<f32>, channels: usize, sample_rate: f64) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidShape {
                channels,
                frames: 0,
            });
        }
        if data.len() % channels != 0 {
            return Err(Error::ChannelMismatch {
                len: data.len(),
                channels,
            });
        }
        validate_sample_rate(sample_rate)?;

        let frames = data.len() / channels;
        validate_shape(channels, frames)?;

        Ok(Self {
            channels,
            frames,
            sample_rate,
            data: Some(data.into_boxed_slice()),
            generation: 0,
        })
    }

    /// Single-channel buffer from a slice.
    pub fn from_mono(data: &[f32], sample_rate: f64) -> Result<Self> {
        Self::from_interleaved(data.to_vec(), 1, sample_rate)
    }

    /// Fill an allocated buffer. `data` must match the allocated shape.
    pub fn load(&mut self, data: Vec<f32>) -> Result<()> {
        let expected = self.samples();
        if expected == 0 {
            return Err(Error::InvalidShape {
                channels: self.channels,
                frames: self.frames,
            });
        }
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        self.data = Some(data.into_boxed_slice());
        self.generation += 1;
        Ok(())
    }

    /// Drop the sample data but keep the allocated shape.
    pub fn unload(&mut self) {
        self.data = None;
        self.generation += 1;
    }

    /// Replace contents and shape with another buffer.
    pub fn assign(&mut self, other: SampleBuffer) {
        let generation = self.generation + 1;
        *self = other;
        self.generation = generation;
    }

    /// Clear back to an unallocated slot.
    pub fn free(&mut self) {
        self.assign(Self::empty());
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Total sample count (frames × channels).
    #[inline]
    pub fn samples(&self) -> usize {
        self.frames * self.channels
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Seconds per frame, or 0.0 for a slot with no sample rate.
    #[inline]
    pub fn sample_duration(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.sample_rate.recip()
        } else {
            0.0
        }
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.frames as f64 * self.sample_duration()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw interleaved data, `None` while not loaded.
    #[inline]
    pub fn data(&self) -> Option<&[f32]> {
        self.data.as_deref()
    }

    /// Validated view for interpolated reads.
    #[inline]
    pub fn view(&self) -> Option<BufferView<'_>> {
        self.data
            .as_deref()
            .map(|data| BufferView::new(data, self.channels, self.frames))
    }

    pub fn into_shared(self) -> SharedBuffer {
        Arc::new(RwLock::new(self))
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate_shape(channels: usize, frames: usize) -> Result<()> {
    if channels == 0 || frames == 0 {
        return Err(Error::InvalidShape { channels, frames });
    }
    Ok(())
}

fn validate_sample_rate(sample_rate: f64) -> Result<()> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    Ok(())
}

/// Host buffer table lookup.
///
/// Lookups are O(1) and never block; implementations hand out the shared
/// slot and leave locking to the reader.
pub trait BufferTable {
    /// Number of slots.
    fn len(&self) -> usize;

    /// Slot at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&SharedBuffer>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-size in-memory buffer table.
///
/// Slots are created up front so the audio thread never observes the table
/// itself changing; only slot contents are replaced, under the slot's write
/// lock.
#[derive(Debug, Clone)]
pub struct BufferPool {
    slots: Vec<SharedBuffer>,
}

impl BufferPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity)
                .map(|_| SampleBuffer::empty().into_shared())
                .collect(),
        }
    }

    fn slot(&self, index: usize) -> Result<&SharedBuffer> {
        self.slots.get(index).ok_or(Error::SlotOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    /// Allocate a slot with the given shape and no data.
    pub fn alloc(
        &self,
        index: usize,
        channels: usize,
        frames: usize,
        sample_rate: f64,
    ) -> Result<()> {
        let buffer = SampleBuffer::unloaded(channels, frames, sample_rate)?;
        self.slot(index)?.write().assign(buffer);
        Ok(())
    }

    /// Replace a slot's contents.
    pub fn set(&self, index: usize, buffer: SampleBuffer) -> Result<()> {
        self.slot(index)?.write().assign(buffer);
        Ok(())
    }

    /// Fill an allocated slot.
    pub fn load(&self, index: usize, data: Vec<f32>) -> Result<()> {
        self.slot(index)?.write().load(data)
    }

    /// Drop a slot's data, keeping its shape.
    pub fn unload(&self, index: usize) -> Result<()> {
        self.slot(index)?.write().unload();
        Ok(())
    }

    /// Return a slot to the unallocated state.
    pub fn free(&self, index: usize) -> Result<()> {
        self.slot(index)?.write().free();
        Ok(())
    }

    /// Shared handle to a slot, for hosts that mutate it directly.
    pub fn shared(&self, index: usize) -> Option<SharedBuffer> {
        self.slots.get(index).cloned()
    }
}

impl BufferTable for BufferPool {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Option<&SharedBuffer> {
        self.slots.get(index)
    }
}

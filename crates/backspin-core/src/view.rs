//! Borrowed view over loaded interleaved sample data.

/// Read-only view of a loaded buffer.
///
/// Only constructed from a loaded [`SampleBuffer`](crate::SampleBuffer), so
/// `data.len() == frames * channels` always holds.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    data: &'a [f32],
    channels: usize,
    frames: usize,
}

impl<'a> BufferView<'a> {
    pub(crate) fn new(data: &'a [f32], channels: usize, frames: usize) -> Self {
        debug_assert_eq!(data.len(), channels * frames);
        Self {
            data,
            channels,
            frames,
        }
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[inline]
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Sample at `frame` on `channel`.
    #[inline]
    pub fn frame(&self, channel: usize, frame: usize) -> f32 {
        debug_assert!(channel < self.channels);
        self.data[frame * self.channels + channel]
    }
}

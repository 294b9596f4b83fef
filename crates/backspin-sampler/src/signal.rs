//! Per-block inputs handed to the unit by the host.

use backspin_core::BufferTable;

/// One input signal for a block.
///
/// Audio-rate inputs carry one value per sample. Control-rate inputs may be
/// a single value or a length-1 slice; both broadcast to the whole block.
#[derive(Debug, Clone, Copy)]
pub enum Signal<'a> {
    /// Fixed value for the block.
    Constant(f32),

    /// Sample array. A short array holds its last value.
    Audio(&'a [f32]),
}

impl<'a> Signal<'a> {
    /// Value at sample `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f32 {
        match *self {
            Signal::Constant(v) => v,
            Signal::Audio(buf) => buf.get(i).or_else(|| buf.last()).copied().unwrap_or(0.0),
        }
    }
}

impl From<f32> for Signal<'_> {
    fn from(value: f32) -> Self {
        Signal::Constant(value)
    }
}

impl<'a> From<&'a [f32]> for Signal<'a> {
    fn from(buf: &'a [f32]) -> Self {
        Signal::Audio(buf)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for Signal<'a> {
    fn from(buf: &'a [f32; N]) -> Self {
        Signal::Audio(buf)
    }
}

impl<'a> From<&'a Vec<f32>> for Signal<'a> {
    fn from(buf: &'a Vec<f32>) -> Self {
        Signal::Audio(buf)
    }
}

/// The four inputs of a [`SmoothReversalUnit`](crate::SmoothReversalUnit).
#[derive(Debug, Clone, Copy)]
pub struct UnitInputs<'a> {
    /// Buffer identifier. Read once per block from sample 0.
    pub buffer_id: Signal<'a>,
    /// Playback rate in frames per sample (1.0 = original speed).
    pub rate: Signal<'a>,
    /// Rising edge through 0.5 requests a direction flip.
    pub trigger: Signal<'a>,
    /// Largest sample difference at which a pending flip may commit.
    pub threshold: Signal<'a>,
}

impl<'a> UnitInputs<'a> {
    pub fn new(
        buffer_id: impl Into<Signal<'a>>,
        rate: impl Into<Signal<'a>>,
        trigger: impl Into<Signal<'a>>,
        threshold: impl Into<Signal<'a>>,
    ) -> Self {
        Self {
            buffer_id: buffer_id.into(),
            rate: rate.into(),
            trigger: trigger.into(),
            threshold: threshold.into(),
        }
    }
}

/// Host state for one block.
#[derive(Clone, Copy)]
pub struct BlockContext<'a> {
    /// Buffer table identifiers resolve against.
    pub buffers: &'a dyn BufferTable,
    /// Host output sample rate.
    pub sample_rate: f64,
    /// The unit is being torn down; suppresses diagnostics.
    pub finishing: bool,
}

impl<'a> BlockContext<'a> {
    pub fn new(buffers: &'a dyn BufferTable, sample_rate: f64) -> Self {
        Self {
            buffers,
            sample_rate,
            finishing: false,
        }
    }

    pub fn finishing(mut self, finishing: bool) -> Self {
        self.finishing = finishing;
        self
    }
}

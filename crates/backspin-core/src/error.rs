//! Error types for backspin-core.

use thiserror::Error;

/// Error type for buffer storage operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid buffer shape: {channels} channels, {frames} frames")]
    InvalidShape { channels: usize, frames: usize },

    #[error("Sample data length {actual} does not match expected {expected}")]
    DataLength { expected: usize, actual: usize },

    #[error("Sample data length {len} is not a multiple of {channels} channels")]
    ChannelMismatch { len: usize, channels: usize },

    #[error("Buffer slot {index} out of range (table holds {len})")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(f64),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;

//! Error types.

use thiserror::Error;

/// Error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer layer error.
    #[error(transparent)]
    Core(#[from] backspin_core::Error),

    /// Rejected configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a requested buffer identifier could not be bound.
///
/// The `Display` text is the diagnostic line reported to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Buffer {id} out of range (table holds {len} buffers)")]
    InvalidId { id: i64, len: usize },

    #[error("Buffer {id} not loaded")]
    NotLoaded { id: i64 },

    #[error("Buffer {id} has {actual} channels, expected {expected}")]
    ChannelMismatch {
        id: i64,
        expected: usize,
        actual: usize,
    },

    #[error("Buffer {id} has {frames} frames, needs at least {min}")]
    TooShort { id: i64, frames: usize, min: usize },

    /// A writer holds the buffer. Transient, never reported.
    #[error("Buffer {id} is being modified")]
    Busy { id: i64 },
}

impl BindError {
    pub fn id(&self) -> i64 {
        match *self {
            Self::InvalidId { id, .. }
            | Self::NotLoaded { id }
            | Self::ChannelMismatch { id, .. }
            | Self::TooShort { id, .. }
            | Self::Busy { id } => id,
        }
    }
}

//! Centralized error type for the backspin umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] backspin_core::Error),

    #[error("Sampler: {0}")]
    Sampler(#[from] backspin_sampler::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

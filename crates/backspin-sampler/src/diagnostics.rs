//! Host diagnostic output.

use core::fmt;

/// Single-line, best-effort message sink.
///
/// Called from the audio thread at most once per distinct fault, so
/// implementations must not block.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, message: &dyn fmt::Display);
}

/// Default sink: forwards to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, message: &dyn fmt::Display) {
        tracing::warn!(target: "backspin::binder", "{}", message);
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _message: &dyn fmt::Display) {}
}

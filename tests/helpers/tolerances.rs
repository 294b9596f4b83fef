//! Tolerance constants for playback tests.

/// Floating point rounding errors (exact reads, integer-aligned phase).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Interpolated reads through the cubic kernel.
pub const DSP_EPSILON: f32 = 1e-4;

/// Largest sample-to-sample jump treated as continuous on the test signals.
pub const CONTINUITY_LIMIT: f32 = 0.05;

//! Unit configuration.

use backspin_core::Interpolation;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a [`SmoothReversalUnit`](crate::SmoothReversalUnit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalConfig {
    /// Buffer channel to read (default: 0)
    pub channel: usize,
    /// Channel count a buffer must have to bind (default: 1)
    pub expected_channels: usize,
    /// Read interpolation for output and flatness probes (default: cubic)
    pub interpolation: Interpolation,
    /// Frames at either end where a pending flip never commits (default: 2.0)
    pub edge_guard_frames: f64,
    /// Force a pending flip after this many deferred samples.
    /// `None` waits until the signal flattens (default: None)
    pub max_deferral: Option<u32>,
    /// Initial read position in frames (default: 0.0)
    pub start_frame: f64,
    /// Scale rate by buffer sample rate / host sample rate (default: false)
    pub scale_to_buffer_rate: bool,
}

impl Default for ReversalConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            expected_channels: 1,
            interpolation: Interpolation::Cubic,
            edge_guard_frames: 2.0,
            max_deferral: None,
            start_frame: 0.0,
            scale_to_buffer_rate: false,
        }
    }
}

impl ReversalConfig {
    /// Read `channel` out of buffers with `channels` channels.
    pub fn with_channels(channel: usize, channels: usize) -> Self {
        Self {
            channel,
            expected_channels: channels,
            ..Default::default()
        }
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn edge_guard_frames(mut self, frames: f64) -> Self {
        self.edge_guard_frames = frames;
        self
    }

    pub fn max_deferral(mut self, samples: Option<u32>) -> Self {
        self.max_deferral = samples;
        self
    }

    pub fn start_frame(mut self, frame: f64) -> Self {
        self.start_frame = frame;
        self
    }

    pub fn scale_to_buffer_rate(mut self, scale: bool) -> Self {
        self.scale_to_buffer_rate = scale;
        self
    }

    /// Smallest buffer, in frames, the unit will bind.
    pub fn min_frames(&self) -> usize {
        self.interpolation.min_frames()
    }

    pub fn validate(&self) -> Result<()> {
        if self.expected_channels == 0 {
            return Err(Error::Config("expected_channels must be at least 1".into()));
        }
        if self.channel >= self.expected_channels {
            return Err(Error::Config(format!(
                "channel {} out of range for {} channels",
                self.channel, self.expected_channels
            )));
        }
        if !self.edge_guard_frames.is_finite() || self.edge_guard_frames < 0.0 {
            return Err(Error::Config(format!(
                "edge_guard_frames must be finite and non-negative, got {}",
                self.edge_guard_frames
            )));
        }
        if !self.start_frame.is_finite() {
            return Err(Error::Config(format!(
                "start_frame must be finite, got {}",
                self.start_frame
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReversalConfig::default();
        assert_eq!(config.channel, 0);
        assert_eq!(config.expected_channels, 1);
        assert_eq!(config.interpolation, Interpolation::Cubic);
        assert_eq!(config.edge_guard_frames, 2.0);
        assert_eq!(config.max_deferral, None);
        assert_eq!(config.start_frame, 0.0);
        assert!(!config.scale_to_buffer_rate);
        assert_eq!(config.min_frames(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_channel_out_of_range() {
        assert!(ReversalConfig::with_channels(2, 2).validate().is_err());
        assert!(ReversalConfig::with_channels(1, 2).validate().is_ok());
        assert!(ReversalConfig::with_channels(0, 0).validate().is_err());
    }

    #[test]
    fn test_negative_guard_rejected() {
        let config = ReversalConfig::default().edge_guard_frames(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ReversalConfig =
            serde_json::from_str(r#"{ "interpolation": "linear", "max_deferral": 64 }"#).unwrap();
        assert_eq!(config.interpolation, Interpolation::Linear);
        assert_eq!(config.max_deferral, Some(64));
        assert_eq!(config.edge_guard_frames, 2.0);
    }
}

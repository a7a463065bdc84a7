//! Configuration structures and constants for the speedtrace-core library.
//!
//! This module provides the configuration system for the speed-estimation
//! pipeline, including the smoothing window, frame rate, and the detection
//! class/confidence filter used when building a trajectory.

use crate::error::{CoreError, CoreResult};

// Default constants

/// Default smoothing window size, in frames.
/// The window is centered, so a value of 10 averages roughly five frames on
/// either side of the current one.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 10;

/// Default minimum confidence (0-100) a detection must carry to be used as
/// the object position for its frame.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 40.0;

/// Default detection class selected from each frame's predictions.
pub const DEFAULT_TARGET_CLASS: &str = "tennis-ball";

/// Main configuration structure for the speedtrace-core library.
///
/// Holds the parameters required for a pipeline run. It is typically created
/// by the consumer of the library (e.g., speedtrace-cli) and passed to
/// [`crate::tracking::estimate_speeds`] and
/// [`crate::detections::FrameDetections`] helpers.
///
/// Only `fps` has no default; it comes from the source video.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Frame rate of the source video, in frames per second. Must be positive;
    /// it defines the time interval (`1/fps`) used for speed computation.
    pub fps: f64,

    /// Size of the centered moving-average window, in frames. Must be positive.
    pub smoothing_window: usize,

    /// Detection class to track (e.g., "tennis-ball").
    pub target_class: String,

    /// Minimum detection confidence (0-100) for a prediction to count.
    pub min_confidence: f64,
}

impl CoreConfig {
    /// Creates a configuration with the given frame rate and default values
    /// for everything else.
    #[must_use]
    pub fn new(fps: f64) -> Self {
        Self {
            fps,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            target_class: DEFAULT_TARGET_CLASS.to_string(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Validates the configuration, rejecting parameter values the pipeline
    /// cannot work with.
    ///
    /// A non-positive or non-finite `fps` would make the per-frame time
    /// interval infinite or undefined, and a zero window would average over
    /// nothing, so both are rejected here rather than allowed to propagate
    /// through the arithmetic.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(CoreError::Config(format!(
                "fps must be a positive, finite number (got {})",
                self.fps
            )));
        }
        if self.smoothing_window == 0 {
            return Err(CoreError::Config(
                "smoothing window must be at least 1 frame".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(CoreError::Config(format!(
                "minimum confidence must be between 0 and 100 (got {})",
                self.min_confidence
            )));
        }
        if self.target_class.is_empty() {
            return Err(CoreError::Config(
                "target class must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

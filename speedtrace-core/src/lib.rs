//! Core library for trajectory reconstruction and speed estimation.
//!
//! This crate takes a per-frame sequence of possibly-missing 2D detections of
//! a tracked object, fills interior gaps by linear interpolation, smooths
//! jitter with a centered moving average, and derives a per-frame speed in
//! pixels per second by finite differencing. It also parses detection JSON
//! into a trajectory and writes the resulting speed report for a renderer.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use speedtrace_core::{CoreConfig, DetectionsFile, SpeedReport, estimate_speeds};
//! use std::path::Path;
//!
//! let detections = DetectionsFile::load(Path::new("detections.json")).unwrap();
//! let config = CoreConfig::new(detections.fps.unwrap_or(30.0));
//! config.validate().unwrap();
//!
//! let trajectory = detections.extract_trajectory(&config.target_class, config.min_confidence);
//! let speeds = estimate_speeds(&trajectory, &config).unwrap();
//!
//! let report = SpeedReport::new(config.fps, config.smoothing_window, speeds);
//! report.write_json(Path::new("speeds.json")).unwrap();
//! ```

pub mod config;
pub mod detections;
pub mod error;
pub mod report;
pub mod tracking;
pub mod trajectory;
pub mod utils;

// Re-exports for public API
pub use config::{
    CoreConfig, DEFAULT_MIN_CONFIDENCE, DEFAULT_SMOOTHING_WINDOW, DEFAULT_TARGET_CLASS,
};
pub use detections::{Detection, DetectionsFile, FrameDetections};
pub use error::{CoreError, CoreResult};
pub use report::SpeedReport;
pub use tracking::estimate_speeds;
pub use tracking::interpolation::fill_gaps;
pub use tracking::smoothing::smooth;
pub use tracking::speed::speeds_from;
pub use trajectory::{Position, Trajectory};
pub use utils::{format_speed, format_speed_label};

//! Speed report output for the rendering collaborator.
//!
//! The renderer consumes the speed sequence index-aligned with its own
//! per-frame assets: index `i` corresponds to the inter-frame interval
//! starting at frame `i`. Two formats are written: JSON (the full report,
//! including the parameters it was computed with) and a two-column CSV for
//! tools that want tabular data.

use crate::error::CoreResult;
use crate::utils::format_speed_label;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Result of a pipeline run, ready to be handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedReport {
    /// Frame rate the speeds were computed with.
    pub fps: f64,

    /// Smoothing window the trajectory was filtered with.
    pub smoothing_window: usize,

    /// Per-frame speeds in pixels per second; the final entry is always 0.
    pub speeds: Vec<f64>,
}

impl SpeedReport {
    #[must_use]
    pub fn new(fps: f64, smoothing_window: usize, speeds: Vec<f64>) -> Self {
        Self {
            fps,
            smoothing_window,
            speeds,
        }
    }

    /// Highest speed in the sequence, or 0 for an empty report.
    #[must_use]
    pub fn peak_speed(&self) -> f64 {
        self.speeds.iter().copied().fold(0.0, f64::max)
    }

    /// Mean over the frames with measured motion (speed > 0). Zero entries
    /// are excluded because a zero is also the sentinel for frames without a
    /// measurement. Returns 0 if nothing was measured.
    #[must_use]
    pub fn mean_measured_speed(&self) -> f64 {
        let measured: Vec<f64> = self.speeds.iter().copied().filter(|&s| s > 0.0).collect();
        if measured.is_empty() {
            return 0.0;
        }
        measured.iter().sum::<f64>() / measured.len() as f64
    }

    /// Per-frame overlay labels in the renderer's format
    /// (`Speed: 123.45 px/s`).
    #[must_use]
    pub fn overlay_labels(&self) -> Vec<String> {
        self.speeds.iter().map(|&s| format_speed_label(s)).collect()
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> CoreResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Writes the speeds as CSV with a `frame,speed_px_per_s` header.
    pub fn write_csv(&self, path: &Path) -> CoreResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["frame", "speed_px_per_s"])?;
        for (frame, speed) in self.speeds.iter().enumerate() {
            writer.write_record([frame.to_string(), format!("{speed:.2}")])?;
        }
        writer.flush()?;
        Ok(())
    }
}

//! Ingest of per-frame detection results.
//!
//! The upstream detector (out of scope here) writes one entry per processed
//! frame, in frame order, each carrying zero or more predictions with a class
//! label, center coordinates in pixels, and a confidence score. This module
//! parses that JSON and reduces it to a [`Trajectory`]: one optional position
//! per frame for the tracked class.

use crate::error::{CoreError, CoreResult};
use crate::trajectory::{Position, Trajectory};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A single detection in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label assigned by the detector (e.g., "tennis-ball").
    #[serde(rename = "class")]
    pub class_name: String,

    /// Center x-coordinate of the bounding box, in pixels.
    pub x: f64,

    /// Center y-coordinate of the bounding box, in pixels.
    pub y: f64,

    /// Detector confidence for this prediction, 0-100.
    pub confidence: f64,
}

/// All predictions for one frame. A frame where the detector found nothing
/// carries an empty list, never an omitted entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameDetections {
    #[serde(default)]
    pub predictions: Vec<Detection>,
}

/// Parsed contents of a detections file: one entry per frame, plus the
/// source video's frame rate when the producer recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionsFile {
    /// Frame rate of the source video, if recorded by the producer. A value
    /// given on the command line takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,

    /// Per-frame predictions, index = frame number.
    pub frames: Vec<FrameDetections>,
}

impl DetectionsFile {
    /// Loads and parses a detections JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let file = File::open(path).map_err(|e| {
            CoreError::DetectionsFile(format!("failed to open {}: {}", path.display(), e))
        })?;
        let parsed: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            CoreError::DetectionsFile(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(parsed)
    }

    /// Total number of predictions across all frames, regardless of class.
    #[must_use]
    pub fn total_detections(&self) -> usize {
        self.frames.iter().map(|f| f.predictions.len()).sum()
    }

    /// Reduces the per-frame predictions to a trajectory for one class.
    ///
    /// For each frame, the first prediction whose class matches
    /// `target_class` and whose confidence is at least `min_confidence`
    /// becomes the frame's position; frames with no such prediction become
    /// absent entries. First match wins even if a later prediction in the
    /// same frame has higher confidence.
    #[must_use]
    pub fn extract_trajectory(&self, target_class: &str, min_confidence: f64) -> Trajectory {
        self.frames
            .iter()
            .map(|frame| {
                frame
                    .predictions
                    .iter()
                    .find(|d| d.class_name == target_class && d.confidence >= min_confidence)
                    .map(|d| Position::new(d.x, d.y))
            })
            .collect()
    }
}

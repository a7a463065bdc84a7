//! Data model for per-frame object positions.
//!
//! A [`Trajectory`] holds one entry per video frame, in frame order. Each
//! entry is either a [`Position`] in image pixel space or `None`, meaning the
//! object was not detected in that frame. Absence is ordinary data here, not
//! an error; the pipeline stages in [`crate::tracking`] are built around it.

use serde::{Deserialize, Serialize};

/// A 2D point in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position, in pixels.
    #[must_use]
    pub fn dist_to(&self, other: Position) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Point `frac` of the way along the segment from `self` to `other`,
    /// with `frac` in `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, other: Position, frac: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * frac,
            y: self.y + (other.y - self.y) * frac,
        }
    }
}

/// Per-frame sequence of optional positions for one tracked object.
///
/// The length is fixed for a pipeline run: every stage consumes and produces
/// a sequence of exactly the same length, with index = frame number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    inner: Vec<Option<Position>>,
}

impl Trajectory {
    #[must_use]
    pub fn new(inner: Vec<Option<Position>>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Position at the given frame index, or `None` for absent/out-of-range.
    #[must_use]
    pub fn get(&self, frame: usize) -> Option<Position> {
        self.inner.get(frame).copied().flatten()
    }

    /// Number of frames with a present position.
    #[must_use]
    pub fn detected_frames(&self) -> usize {
        self.inner.iter().filter(|p| p.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Option<Position>> {
        self.inner.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Option<Position>] {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Option<Position>> {
        self.inner
    }
}

impl From<Vec<Option<Position>>> for Trajectory {
    fn from(inner: Vec<Option<Position>>) -> Self {
        Self { inner }
    }
}

impl FromIterator<Option<Position>> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Option<Position>>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

//! Window smoothing: a centered moving average over present positions.
//!
//! Detector output jitters by a few pixels from frame to frame even when the
//! object moves smoothly. Because the pipeline runs offline over the whole
//! trajectory, the filter can look both backward and forward, trading latency
//! (which does not exist here) for noise reduction.

use crate::trajectory::{Position, Trajectory};

/// Smooths a trajectory with a centered moving average of size `window_size`.
///
/// For frame `i` the window covers indices
/// `[max(0, i - W/2), min(N, i + W/2 + 1))`, with `W/2` using integer floor
/// division. The output at `i` is the per-axis arithmetic mean of the present
/// positions inside the window. If the window holds no present position at
/// all (inside a leading or trailing gap the interpolator left untouched),
/// the output stays absent.
///
/// Output length always equals input length.
#[must_use]
pub fn smooth(trajectory: &Trajectory, window_size: usize) -> Trajectory {
    let positions = trajectory.as_slice();
    let n = positions.len();
    let half = window_size / 2;

    let mut smoothed = Vec::with_capacity(n);
    for i in 0..n {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(n);

        let mut count = 0usize;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for position in positions[start..end].iter().flatten() {
            count += 1;
            sum_x += position.x;
            sum_y += position.y;
        }

        if count == 0 {
            smoothed.push(None);
        } else {
            let count = count as f64;
            smoothed.push(Some(Position::new(sum_x / count, sum_y / count)));
        }
    }

    Trajectory::new(smoothed)
}

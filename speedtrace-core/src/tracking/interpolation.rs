//! Gap interpolation: fills interior runs of missing detections.
//!
//! Detection drops out for a handful of frames at a time (motion blur,
//! occlusion by the racket, the ball leaving the crop). As long as the run of
//! missing frames is bounded by a known position on both sides, the positions
//! in between are recovered by linear interpolation along the segment joining
//! the two known endpoints.

use crate::trajectory::Trajectory;

/// Fills interior gaps in a trajectory by linear interpolation.
///
/// Scans frame indices left to right. A run of absent positions that starts
/// right after a present position at `i - 1` and ends right before the next
/// present position at `j` is filled at equal parametric spacing: the segment
/// from the predecessor to the successor is divided into `j - i + 1` equal
/// steps, and the `k`-th missing frame gets the point `k` steps along. This
/// distributes the filled positions evenly between the two known endpoints
/// rather than averaging per axis.
///
/// Runs with no present position before them (leading) or after them
/// (trailing) cannot be interpolated and are left absent. An all-absent or
/// empty trajectory is returned unchanged. The scan is a single pass; after
/// filling a gap it resumes at the gap's closing position.
///
/// The input is not mutated; a fresh trajectory of the same length is
/// returned.
#[must_use]
pub fn fill_gaps(trajectory: &Trajectory) -> Trajectory {
    let mut filled = trajectory.as_slice().to_vec();

    let mut i = 1;
    while i < filled.len() {
        // A gap opens where an absent entry follows a present one.
        let prev = match (filled[i - 1], filled[i]) {
            (Some(prev), None) => prev,
            _ => {
                i += 1;
                continue;
            }
        };

        // Find the position that closes the gap. If there is none, the run
        // is trailing and stays absent, and nothing after it can be a gap
        // either.
        let Some(j) = (i + 1..filled.len()).find(|&j| filled[j].is_some()) else {
            break;
        };

        if let Some(next) = filled[j] {
            let segments = (j - i + 1) as f64;
            for k in 1..=(j - i) {
                filled[i + k - 1] = Some(prev.lerp(next, k as f64 / segments));
            }
        }

        // Resume at the closing position; the filled values never seed a new
        // gap scan.
        i = j;
    }

    Trajectory::new(filled)
}

//! Speed estimation by finite differencing of consecutive positions.

use crate::trajectory::Trajectory;

/// Computes per-frame speeds, in pixels per second, from a smoothed
/// trajectory.
///
/// The time interval between consecutive frames is `1 / fps`. For each frame
/// `i` with both `i` and `i + 1` present, the speed at `i` is the Euclidean
/// distance between the two positions divided by the interval; the value
/// belongs to the inter-frame interval starting at `i`. Where either endpoint
/// is absent the speed is `0`, and the final frame is always `0` since it has
/// no forward neighbor. The zero doubles as an "unknown" sentinel for
/// missing-data frames; consumers that need to tell "stationary" from
/// "unmeasured" must consult the smoothed trajectory itself.
///
/// Output length always equals input length. `fps` is assumed positive; the
/// configuration boundary rejects anything else before this point.
#[must_use]
pub fn speeds_from(trajectory: &Trajectory, fps: f64) -> Vec<f64> {
    let positions = trajectory.as_slice();
    let n = positions.len();
    let mut speeds = vec![0.0; n];
    if n == 0 {
        return speeds;
    }

    let time_interval = 1.0 / fps;
    for i in 0..n - 1 {
        if let (Some(a), Some(b)) = (positions[i], positions[i + 1]) {
            speeds[i] = a.dist_to(b) / time_interval;
        }
    }

    speeds
}

//! The trajectory-to-speed pipeline.
//!
//! Three pure stages applied in a fixed order over one in-memory sequence:
//!
//! 1. [`interpolation::fill_gaps`] fills interior runs of missing detections
//!    by linear interpolation between the nearest known positions.
//! 2. [`smoothing::smooth`] replaces each position with the mean of the
//!    present positions in a centered sliding window.
//! 3. [`speed::speeds_from`] derives a per-frame scalar speed from
//!    consecutive smoothed positions and the frame rate.
//!
//! Each stage takes its input by reference and returns a fresh sequence of
//! the same length; no stage revisits an earlier one. The stages are also
//! exported individually so callers can, for example, keep the smoothed
//! trajectory to distinguish "no measurement" from "zero speed" in the
//! result.

pub mod interpolation;
pub mod smoothing;
pub mod speed;

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::trajectory::Trajectory;
use log::debug;

/// Runs the full pipeline over a trajectory and returns per-frame speeds in
/// pixels per second.
///
/// Validates the configuration first: a non-positive fps or a zero smoothing
/// window is rejected with [`crate::CoreError::Config`] instead of being
/// allowed to produce non-finite speeds. An empty trajectory yields an empty
/// speed sequence.
pub fn estimate_speeds(trajectory: &Trajectory, config: &CoreConfig) -> CoreResult<Vec<f64>> {
    config.validate()?;

    let filled = interpolation::fill_gaps(trajectory);
    debug!(
        "Gap interpolation: {} of {} frames present (was {})",
        filled.detected_frames(),
        filled.len(),
        trajectory.detected_frames()
    );

    let smoothed = smoothing::smooth(&filled, config.smoothing_window);
    let speeds = speed::speeds_from(&smoothed, config.fps);
    debug!(
        "Estimated speeds for {} frames at {} fps (window {})",
        speeds.len(),
        config.fps,
        config.smoothing_window
    );

    Ok(speeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Position;

    #[test]
    fn test_pipeline_rejects_invalid_config() {
        let trajectory = Trajectory::new(vec![Some(Position::new(0.0, 0.0))]);
        let mut config = CoreConfig::new(0.0);
        assert!(estimate_speeds(&trajectory, &config).is_err());
        config.fps = 30.0;
        config.smoothing_window = 0;
        assert!(estimate_speeds(&trajectory, &config).is_err());
    }

    #[test]
    fn test_pipeline_empty_in_empty_out() {
        let config = CoreConfig::new(30.0);
        let speeds = estimate_speeds(&Trajectory::default(), &config).unwrap();
        assert!(speeds.is_empty());
    }

    #[test]
    fn test_pipeline_length_preserved() {
        let trajectory = Trajectory::new(vec![
            None,
            Some(Position::new(1.0, 1.0)),
            None,
            Some(Position::new(3.0, 3.0)),
            None,
        ]);
        let config = CoreConfig::new(30.0);
        let speeds = estimate_speeds(&trajectory, &config).unwrap();
        assert_eq!(speeds.len(), trajectory.len());
        assert_eq!(*speeds.last().unwrap(), 0.0);
    }
}

use speedtrace_core::*;
use std::fs;
use tempfile::tempdir;

fn pos(x: f64, y: f64) -> Option<Position> {
    Some(Position::new(x, y))
}

#[test]
fn test_length_preservation_at_every_stage() {
    let trajectory = Trajectory::new(vec![
        None,
        pos(1.0, 2.0),
        None,
        None,
        pos(5.0, 6.0),
        None,
    ]);
    let n = trajectory.len();

    let filled = fill_gaps(&trajectory);
    assert_eq!(filled.len(), n);

    let smoothed = smooth(&filled, 5);
    assert_eq!(smoothed.len(), n);

    let speeds = speeds_from(&smoothed, 30.0);
    assert_eq!(speeds.len(), n);
}

#[test]
fn test_interior_gap_fill_property() {
    let trajectory = Trajectory::new(vec![pos(0.0, 0.0), None, None, pos(3.0, 0.0)]);
    let filled = fill_gaps(&trajectory);
    assert_eq!(
        filled.as_slice(),
        &[pos(0.0, 0.0), pos(1.0, 0.0), pos(2.0, 0.0), pos(3.0, 0.0)]
    );
}

#[test]
fn test_leading_and_trailing_gaps_preserved_property() {
    let trajectory = Trajectory::new(vec![None, pos(1.0, 1.0), None]);
    assert_eq!(fill_gaps(&trajectory), trajectory);
}

#[test]
fn test_all_absent_identity_through_pipeline() {
    for n in [1, 4, 17] {
        let trajectory = Trajectory::new(vec![None; n]);
        assert_eq!(fill_gaps(&trajectory), trajectory);
        assert_eq!(smooth(&trajectory, 5), trajectory);

        let config = CoreConfig::new(30.0);
        let speeds = estimate_speeds(&trajectory, &config).unwrap();
        assert_eq!(speeds, vec![0.0; n]);
    }
}

#[test]
fn test_smoothing_idempotent_on_constant_input() {
    let trajectory = Trajectory::new(vec![pos(7.0, 3.0); 9]);
    assert_eq!(smooth(&trajectory, 4), trajectory);
    assert_eq!(smooth(&smooth(&trajectory, 4), 4), trajectory);
}

#[test]
fn test_speed_from_uniform_motion_property() {
    let trajectory = Trajectory::new(vec![pos(0.0, 0.0), pos(10.0, 0.0), pos(20.0, 0.0)]);
    let speeds = speeds_from(&trajectory, 10.0);
    assert_eq!(speeds, vec![100.0, 100.0, 0.0]);
}

#[test]
fn test_final_frame_sentinel_property() {
    for n in 1..8 {
        let trajectory = Trajectory::new(vec![pos(1.0, 1.0); n]);
        let speeds = speeds_from(&trajectory, 24.0);
        assert_eq!(*speeds.last().unwrap(), 0.0);
    }
}

#[test]
fn test_single_present_point_window_passes_through() {
    let trajectory = Trajectory::new(vec![None, None, pos(8.0, 4.0), None, None]);
    let smoothed = smooth(&trajectory, 3);
    assert_eq!(smoothed.get(2), pos(8.0, 4.0));
}

#[test]
fn test_full_pipeline_over_detections_file() {
    // A detector track with one interior dropout: the pipeline should still
    // produce a full-length, finite, non-negative speed sequence.
    let json = r#"{
        "fps": 10.0,
        "frames": [
            {"predictions": [{"class": "tennis-ball", "x": 0.0, "y": 0.0, "confidence": 90.0}]},
            {"predictions": []},
            {"predictions": [{"class": "tennis-ball", "x": 20.0, "y": 0.0, "confidence": 85.0}]},
            {"predictions": [{"class": "tennis-ball", "x": 30.0, "y": 0.0, "confidence": 88.0}]}
        ]
    }"#;

    let dir = tempdir().unwrap();
    let input_path = dir.path().join("detections.json");
    fs::write(&input_path, json).unwrap();

    let detections = DetectionsFile::load(&input_path).unwrap();
    let mut config = CoreConfig::new(detections.fps.unwrap());
    config.smoothing_window = 1;
    config.validate().unwrap();

    let trajectory = detections.extract_trajectory(&config.target_class, config.min_confidence);
    assert_eq!(trajectory.len(), 4);
    assert_eq!(trajectory.detected_frames(), 3);

    let speeds = estimate_speeds(&trajectory, &config).unwrap();
    assert_eq!(speeds.len(), 4);
    // Window 1 leaves positions untouched; the gap at frame 1 interpolates
    // to (10, 0), so motion is uniform at 10 px per 0.1 s.
    assert_eq!(speeds, vec![100.0, 100.0, 100.0, 0.0]);
}

#[test]
fn test_report_written_as_json_and_csv() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("speeds.json");
    let csv_path = dir.path().join("speeds.csv");

    let report = SpeedReport::new(10.0, 5, vec![100.0, 42.5, 0.0]);
    report.write_json(&json_path).unwrap();
    report.write_csv(&csv_path).unwrap();

    let reread: SpeedReport =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(reread, report);

    let csv_text = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv_text.lines();
    assert_eq!(lines.next(), Some("frame,speed_px_per_s"));
    assert_eq!(lines.next(), Some("0,100.00"));
    assert_eq!(lines.next(), Some("1,42.50"));
    assert_eq!(lines.next(), Some("2,0.00"));
}

#[test]
fn test_speeds_are_finite_and_non_negative() {
    let trajectory = Trajectory::new(vec![
        None,
        pos(3.0, -7.5),
        None,
        pos(-12.0, 4.0),
        pos(0.0, 0.0),
        None,
    ]);
    let config = CoreConfig::new(59.94);
    let speeds = estimate_speeds(&trajectory, &config).unwrap();
    for speed in speeds {
        assert!(speed.is_finite());
        assert!(speed >= 0.0);
    }
}

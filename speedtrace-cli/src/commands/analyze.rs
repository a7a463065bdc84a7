// speedtrace-cli/src/commands/analyze.rs
//
// The 'analyze' command: load a detections file, run the trajectory/speed
// pipeline from speedtrace-core, write the report, and print a summary.

use crate::cli::AnalyzeArgs;
use crate::error::CliResult;
use crate::logging::get_timestamp;
use console::style;
use log::info;
use speedtrace_core::{
    estimate_speeds, format_speed, CoreConfig, CoreError, DetectionsFile, SpeedReport,
};
use std::path::{Path, PathBuf};

/// Default report path: the input file's stem with a `_speeds.json` suffix,
/// next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("speedtrace");
    input.with_file_name(format!("{stem}_speeds.json"))
}

pub fn run_analyze(args: &AnalyzeArgs) -> CliResult<()> {
    println!(
        "{} Speedtrace analysis ({})",
        style("==>").cyan().bold(),
        get_timestamp()
    );

    let detections = DetectionsFile::load(&args.input)?;

    // A frame rate must come from somewhere: the command line wins over the
    // value the detector recorded in the file.
    let fps = args.fps.or(detections.fps).ok_or_else(|| {
        CoreError::InvalidInput(
            "no frame rate available: pass --fps or use a detections file that records one"
                .to_string(),
        )
    })?;

    let mut config = CoreConfig::new(fps);
    config.smoothing_window = args.window;
    config.target_class = args.class.clone();
    config.min_confidence = args.min_confidence;
    config.validate()?;

    let trajectory = detections.extract_trajectory(&config.target_class, config.min_confidence);
    info!(
        "Loaded {} frames, {} with a '{}' detection at confidence >= {}",
        trajectory.len(),
        trajectory.detected_frames(),
        config.target_class,
        config.min_confidence
    );

    let speeds = estimate_speeds(&trajectory, &config)?;
    let report = SpeedReport::new(config.fps, config.smoothing_window, speeds);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    report.write_json(&output)?;
    if let Some(csv_path) = &args.csv {
        report.write_csv(csv_path)?;
    }

    println!("  Frames analyzed: {}", style(trajectory.len()).bold());
    println!(
        "  Frames detected: {}",
        style(trajectory.detected_frames()).bold()
    );
    println!(
        "  Peak speed:      {}",
        style(format_speed(report.peak_speed())).green().bold()
    );
    println!(
        "  Mean speed:      {}",
        style(format_speed(report.mean_measured_speed())).bold()
    );
    println!("  Report written:  {}", style(output.display()).bold());
    if let Some(csv_path) = &args.csv {
        println!("  CSV written:     {}", style(csv_path.display()).bold());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/tmp/match_point.json"));
        assert_eq!(path, Path::new("/tmp/match_point_speeds.json"));
    }
}

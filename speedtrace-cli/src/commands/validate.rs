// speedtrace-cli/src/commands/validate.rs
//
// The 'validate' command: parse a detections file and report whether the
// analyze command could work with it, without writing any output.

use crate::cli::ValidateArgs;
use crate::error::CliResult;
use console::style;
use log::warn;
use speedtrace_core::{CoreError, DetectionsFile};

pub fn run_validate(args: &ValidateArgs) -> CliResult<()> {
    let detections = DetectionsFile::load(&args.input)?;

    if detections.frames.is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "{} contains no frames",
            args.input.display()
        )));
    }

    match detections.fps {
        Some(fps) if fps.is_finite() && fps > 0.0 => {
            println!("  Frame rate:       {fps} fps");
        }
        Some(fps) => {
            return Err(CoreError::InvalidInput(format!(
                "recorded frame rate {fps} is not usable; analyze would need --fps"
            )));
        }
        None => {
            warn!("No frame rate recorded; analyze will require --fps");
            println!("  Frame rate:       not recorded (pass --fps to analyze)");
        }
    }

    let frames_with_target = detections
        .frames
        .iter()
        .filter(|f| f.predictions.iter().any(|d| d.class_name == args.class))
        .count();

    println!("  Frames:           {}", detections.frames.len());
    println!("  Detections:       {}", detections.total_detections());
    println!(
        "  '{}' frames:      {}",
        args.class, frames_with_target
    );

    if frames_with_target == 0 {
        warn!(
            "No '{}' detections found; analyze would produce an all-zero report",
            args.class
        );
    }

    println!("{} {} is usable", style("OK").green().bold(), args.input.display());
    Ok(())
}

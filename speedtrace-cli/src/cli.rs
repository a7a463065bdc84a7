use clap::{Parser, Subcommand};
use speedtrace_core::{DEFAULT_MIN_CONFIDENCE, DEFAULT_SMOOTHING_WINDOW, DEFAULT_TARGET_CLASS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Speedtrace - Trajectory reconstruction and speed estimation",
    long_about = "Turns per-frame object detections into per-frame speeds: \
                 fills detection gaps by interpolation, smooths jitter with a \
                 centered moving average, and derives pixel-per-second speeds \
                 by finite differencing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed logging output")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate per-frame speeds from a detections file
    Analyze(AnalyzeArgs),

    /// Check a detections file for problems without writing any output
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Input detections JSON file
    #[arg(short, long, help = "Path to the per-frame detections JSON file")]
    pub input: PathBuf,

    /// Output report path
    #[arg(
        short,
        long,
        help = "Path for the JSON speed report (default: <input stem>_speeds.json)"
    )]
    pub output: Option<PathBuf>,

    /// Also write the speeds as CSV
    #[arg(long, help = "Optional path for a frame,speed CSV file")]
    pub csv: Option<PathBuf>,

    /// Frame rate of the source video
    #[arg(
        short,
        long,
        help = "Frames per second; overrides the value recorded in the detections file"
    )]
    pub fps: Option<f64>,

    /// Smoothing window size in frames
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_SMOOTHING_WINDOW,
        help = "Size of the centered moving-average window, in frames"
    )]
    pub window: usize,

    /// Detection class to track
    #[arg(
        long,
        default_value = DEFAULT_TARGET_CLASS,
        help = "Class label of the object to track"
    )]
    pub class: String,

    /// Minimum detection confidence (0-100)
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_CONFIDENCE,
        help = "Predictions below this confidence are treated as no detection"
    )]
    pub min_confidence: f64,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Input detections JSON file
    #[arg(short, long, help = "Path to the per-frame detections JSON file to check")]
    pub input: PathBuf,

    /// Detection class to look for
    #[arg(
        long,
        default_value = DEFAULT_TARGET_CLASS,
        help = "Class label expected in the file"
    )]
    pub class: String,
}

// speedtrace-cli/src/logging.rs
//
// Logging helpers for the Speedtrace CLI. The main logging implementation
// uses the standard `log` crate with `env_logger` as the backend, configured
// in main.rs; RUST_LOG (or --verbose) controls the level.

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to stamp analysis runs and generated file names.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

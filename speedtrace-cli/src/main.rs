// speedtrace-cli/src/main.rs
//
// Entry point for the Speedtrace CLI.
//
// Responsibilities:
// - Parsing command-line arguments (see cli.rs).
// - Initializing logging (env_logger; --verbose raises the default level).
// - Dispatching to the subcommand implementations in commands/.
// - Mapping errors to a non-zero exit code.

use clap::Parser;
use log::error;
use speedtrace_cli::{run_analyze, run_validate, Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Validate(args) => run_validate(args),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

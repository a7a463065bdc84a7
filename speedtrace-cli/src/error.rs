// speedtrace-cli/src/error.rs
//
// Error handling for the CLI. The CLI reuses the core library's error type
// rather than defining its own; the alias keeps command signatures uniform
// and leaves room for CLI-specific variants later.

use speedtrace_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

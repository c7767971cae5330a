//! # Tip Calculator Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (`TIP_*` environment variables)
//! 2. Initialize tracing (logging to stderr)
//! 3. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    tip_terminal_lib::run()
}

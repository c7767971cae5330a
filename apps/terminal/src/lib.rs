//! # Tip Terminal Library
//!
//! Core library for the tip calculator terminal front end.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! tip_terminal_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── session.rs      ◄─── Line loop: read, dispatch, print
//! ├── render.rs       ◄─── Summary and help text
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Bill text, split count, slider position
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing and dispatch
//! │   ├── bill.rs     ◄─── Bill entry
//! │   ├── split.rs    ◄─── Split stepper
//! │   ├── tip.rs      ◄─── Tip slider
//! │   └── form.rs     ◄─── show / json / reset
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Recompute Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Any input change ──► FormState mutates ──► TipInput (by value)        │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                      tip_core::try_calculate()          │
//! │                                                  │                      │
//! │  Summary printed ◄── FormSnapshot ◄── TipBreakdown stored               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod state;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use session::Session;
use state::ConfigState;

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • TIP_MAX_SPLIT, TIP_SLIDER_STEPS, TIP_CURRENCY_SYMBOL, TIP_LOG    │
/// │     • Bad values abort with exit code 1                                 │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG wins over TIP_LOG                                        │
/// │                                                                         │
/// │  3. Run Session ──────────────────────────────────────────────────────► │
/// │     • One command per line until `quit` or EOF                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let config = match ConfigState::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    info!(
        max_split = config.max_split,
        slider_steps = config.slider_steps.get(),
        "Starting tip calculator"
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match session.run(stdin.lock(), stdout.lock()) {
        Ok(()) => {
            info!("Session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Session aborted by I/O error");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tip=trace` - Show trace for tip crates only
/// - Default: `TIP_LOG`, else `info,tip=debug`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so stdout stays clean for the summary and `json` output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

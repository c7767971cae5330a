//! # Session
//!
//! The read-dispatch-print loop. Generic over reader and writer so tests
//! can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::commands::{self, Command, Outcome};
use crate::error::ApiError;
use crate::render;
use crate::state::{ConfigState, FormState};

/// One user's form plus the configuration it was built with.
#[derive(Debug)]
pub struct Session {
    form: FormState,
    config: ConfigState,
}

impl Session {
    pub fn new(config: ConfigState) -> Self {
        Session {
            form: FormState::new(&config),
            config,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Parses and runs one line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, ApiError> {
        let command: Command = line.parse()?;
        commands::dispatch(command, &mut self.form, &self.config)
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Command errors are printed and the loop continues. Only I/O errors
    /// end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", render::WELCOME)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line) {
                Ok(Outcome::Render(snapshot)) => {
                    writeln!(output, "{}", render::render_summary(&snapshot, &self.config))?
                }
                Ok(Outcome::Json(json)) => writeln!(output, "{json}")?,
                Ok(Outcome::Help) => writeln!(output, "{}", render::HELP)?,
                Ok(Outcome::Quit) => {
                    debug!("quit requested");
                    break;
                }
                Err(err) => {
                    warn!(code = ?err.code, message = %err.message, "command rejected");
                    writeln!(output, "error: {err}")?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }
}

//! # Commands Module
//!
//! All commands a user can type at the prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! ├── bill.rs     ◄─── bill <amount>
//! ├── split.rs    ◄─── split + / split -
//! ├── tip.rs      ◄─── tip <position> / pct <n>
//! └── form.rs     ◄─── show / json / reset
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "tip 0.5"                                                              │
//! │      │  str::parse::<Command>()                                         │
//! │      ▼                                                                  │
//! │  Command::Tip(0.5)                                                      │
//! │      │  dispatch(command, &mut form, &config)                           │
//! │      ▼                                                                  │
//! │  tip::set_tip_position(&mut form, 0.5) -> Result<Outcome, ApiError>    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Outcome::Render(FormSnapshot) ──► session prints the summary           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bill;
pub mod form;
pub mod split;
pub mod tip;

use std::str::FromStr;

use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, FormSnapshot, FormState};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the bill text (empty clears it)
    Bill(String),
    /// Split stepper `+`
    SplitUp,
    /// Split stepper `-`
    SplitDown,
    /// Raw slider position in `[0.0, 1.0]`
    Tip(f32),
    /// Slider stop nearest to a whole percentage
    Pct(u32),
    Show,
    Json,
    Reset,
    Help,
    Quit,
}

/// What the session should print after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print the summary for this snapshot
    Render(FormSnapshot),
    /// Print this JSON document as-is
    Json(String),
    /// Print the help text
    Help,
    /// End the session
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "bill" => Ok(Command::Bill(rest.to_string())),
            "split" => match rest {
                "+" => Ok(Command::SplitUp),
                "-" => Ok(Command::SplitDown),
                _ => Err(ApiError::invalid_argument("Usage: split + | split -")),
            },
            "tip" => rest
                .parse()
                .map(Command::Tip)
                .map_err(|_| ApiError::invalid_argument("Usage: tip <position 0.0-1.0>")),
            "pct" => rest
                .parse()
                .map(Command::Pct)
                .map_err(|_| ApiError::invalid_argument("Usage: pct <percent 0-100>")),
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ApiError::unknown_command(verb)),
        }
    }
}

/// Runs a command against the form.
pub fn dispatch(
    command: Command,
    form: &mut FormState,
    config: &ConfigState,
) -> Result<Outcome, ApiError> {
    debug!(?command, "dispatch");

    match command {
        Command::Bill(text) => bill::set_bill(form, &text),
        Command::SplitUp => split::increment_split(form, config),
        Command::SplitDown => split::decrement_split(form),
        Command::Tip(position) => tip::set_tip_position(form, position),
        Command::Pct(pct) => tip::set_tip_percentage(form, pct),
        Command::Show => Ok(form::show(form)),
        Command::Json => form::to_json(form),
        Command::Reset => Ok(form::reset(form)),
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_commands() {
        assert_eq!("bill 42.5".parse::<Command>().unwrap(), Command::Bill("42.5".into()));
        assert_eq!("bill".parse::<Command>().unwrap(), Command::Bill(String::new()));
        assert_eq!("split +".parse::<Command>().unwrap(), Command::SplitUp);
        assert_eq!("  SPLIT   - ".parse::<Command>().unwrap(), Command::SplitDown);
        assert_eq!("tip 0.5".parse::<Command>().unwrap(), Command::Tip(0.5));
        assert_eq!("pct 20".parse::<Command>().unwrap(), Command::Pct(20));
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        let err = "fly away".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);

        let err = "split 3".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = "tip lots".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = "pct -5".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }
}

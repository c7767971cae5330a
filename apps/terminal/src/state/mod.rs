//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │       FormState          │        │      ConfigState         │      │
//! │  │                          │ bounds │                          │      │
//! │  │  bill_text               │◄───────│  max_split               │      │
//! │  │  split (SplitCount)      │        │  slider_steps            │      │
//! │  │  slider_position         │        │  currency_symbol         │      │
//! │  │  breakdown (derived)     │        │  log_filter              │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  FormState: mutated by commands, single owner (the session)            │
//! │  ConfigState: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{
    ConfigError, ConfigState, ENV_CURRENCY_SYMBOL, ENV_LOG, ENV_MAX_SPLIT, ENV_SLIDER_STEPS,
};
pub use form::{FormSnapshot, FormState};

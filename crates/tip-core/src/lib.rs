//! # tip-core: Pure Calculation Logic for the Tip Calculator
//!
//! This crate is the **heart** of the tip calculator. It contains the tip and
//! split arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tip Calculator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front End (tip-terminal)                        │   │
//! │  │   bill text ──► split +/- ──► tip slider ──► summary            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TipInput (by value)                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ tip-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calculator │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │ compute_tip│  │ TipInput  │  │   Money   │  │ parse_bill│  │   │
//! │  │   │ per person │  │ SplitCount│  │  display  │  │  checks   │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - `compute_tip` and `compute_total_per_person`
//! - [`types`] - Input/output structs and bounded newtypes
//! - [`money`] - Integer-cents type for display
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks for callers that need them
//!
//! ## Example Usage
//!
//! ```rust
//! use tip_core::{compute_tip, compute_total_per_person};
//!
//! assert_eq!(compute_tip(100.0, 20), 20.0);
//! assert_eq!(compute_total_per_person(100.0, 4, 20), 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tip_core::compute_tip` instead of
// `use tip_core::calculator::compute_tip`

pub use calculator::{
    calculate, compute_tip, compute_total_per_person, try_calculate, try_compute_tip,
    try_compute_total_per_person,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest number of people a bill can be split between.
pub const MIN_SPLIT_COUNT: u32 = 1;

/// Default upper bound for the split count.
///
/// ## Business Reason
/// The split stepper stops at 100 people.
/// The front end can override it through configuration.
pub const DEFAULT_MAX_SPLIT: u32 = 100;

/// Highest tip percentage the slider can produce.
pub const MAX_TIP_PERCENTAGE: u32 = 100;

/// Largest bill the form and the checked calculator accept.
///
/// Twice this still fits `i64` cents, so every result can be displayed.
pub const MAX_BILL_AMOUNT: f64 = 1_000_000_000_000.0;

/// Most interior slider steps worth configuring.
///
/// 99 steps already give a stop at every whole percentage.
pub const MAX_SLIDER_STEPS: u32 = MAX_TIP_PERCENTAGE - 1;

/// Default number of interior slider steps.
///
/// 5 steps give 7 stops: 0, 17, 33, 50, 67, 83, 100 percent.
pub const DEFAULT_SLIDER_STEPS: u32 = 5;

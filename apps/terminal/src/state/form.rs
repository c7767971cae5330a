//! # Form State
//!
//! The presentation-layer state: what the user has typed and dragged.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  User Action            Command             State Change                │
//! │  ───────────            ───────             ────────────                │
//! │                                                                         │
//! │  Type bill ───────────► bill 100 ─────────► bill_text = "100"           │
//! │                                                                         │
//! │  Tap + ───────────────► split + ──────────► split = min(split+1, max)   │
//! │                                                                         │
//! │  Tap - ───────────────► split - ──────────► split = max(split-1, 1)     │
//! │                                                                         │
//! │  Drag slider ─────────► tip 0.2 ──────────► slider = snap(0.2)          │
//! │                                                                         │
//! │  NOTE: every change ends in recompute(), which rebuilds a TipInput     │
//! │        from the current values and stores the new TipBreakdown.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tip_core::validation::{is_bill_entered, parse_bill};
use tip_core::{try_calculate, SliderSteps, SplitCount, TipBreakdown, TipInput, TipPercentage};
use tracing::{debug, warn};

use super::ConfigState;

/// Everything the renderer and the `json` command need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub bill_text: String,
    /// `None` while the bill text is empty or not a valid amount
    pub bill_amount: Option<f64>,
    pub split_count: u32,
    pub tip_percentage: u32,
    pub slider_position: f32,
    pub tip_amount: f64,
    pub total_per_person: f64,
}

/// The bill form.
///
/// ## Invariants
/// - `split` stays in `1..=max_split`
/// - `slider_position` is always a reachable stop of `slider_steps`
/// - `breakdown` always matches the current inputs (zero when no bill)
#[derive(Debug, Clone)]
pub struct FormState {
    bill_text: String,
    split: SplitCount,
    slider_position: f32,
    breakdown: TipBreakdown,
    max_split: u32,
    slider_steps: SliderSteps,
}

impl FormState {
    /// Creates an empty form using the configured bounds.
    pub fn new(config: &ConfigState) -> Self {
        FormState {
            bill_text: String::new(),
            split: SplitCount::one(),
            slider_position: 0.0,
            breakdown: TipBreakdown::zero(),
            max_split: config.max_split,
            slider_steps: config.slider_steps,
        }
    }

    /// Replaces the bill text. Anything is accepted; invalid text just
    /// means no calculation.
    pub fn set_bill_text(&mut self, text: &str) {
        self.bill_text = text.trim().to_string();
        self.recompute();
    }

    /// Whether the split and tip controls are shown.
    pub fn controls_enabled(&self) -> bool {
        is_bill_entered(&self.bill_text)
    }

    /// Adds one person, up to the configured maximum.
    ///
    /// Returns `false` when already at the maximum.
    pub fn increment_split(&mut self) -> bool {
        let next = self.split.increment(self.max_split);
        let changed = next != self.split;
        self.split = next;
        self.recompute();
        changed
    }

    /// Removes one person, never going below 1.
    ///
    /// Returns `false` when already at 1.
    pub fn decrement_split(&mut self) -> bool {
        let next = self.split.decrement();
        let changed = next != self.split;
        self.split = next;
        self.recompute();
        changed
    }

    /// Moves the slider. The position is snapped to the nearest stop.
    pub fn set_slider_position(&mut self, position: f32) {
        self.slider_position = self.slider_steps.snap(position);
        self.recompute();
    }

    /// Clears the form back to its initial state.
    pub fn reset(&mut self) {
        self.bill_text.clear();
        self.split = SplitCount::one();
        self.slider_position = 0.0;
        self.recompute();
    }

    /// Parsed bill amount, if the text is a valid amount.
    pub fn bill_amount(&self) -> Option<f64> {
        parse_bill(&self.bill_text).ok()
    }

    pub fn split_count(&self) -> SplitCount {
        self.split
    }

    pub fn slider_position(&self) -> f32 {
        self.slider_position
    }

    /// Tip percentage derived from the current slider position.
    pub fn tip_percentage(&self) -> TipPercentage {
        TipPercentage::from_slider_position(self.slider_position)
    }

    pub fn breakdown(&self) -> TipBreakdown {
        self.breakdown
    }

    /// The calculator input for the current values, if a bill is entered.
    pub fn input(&self) -> Option<TipInput> {
        self.bill_amount()
            .map(|bill| TipInput::new(bill, self.split, self.tip_percentage()))
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            bill_text: self.bill_text.clone(),
            bill_amount: self.bill_amount(),
            split_count: self.split.get(),
            tip_percentage: self.tip_percentage().value(),
            slider_position: self.slider_position,
            tip_amount: self.breakdown.tip_amount,
            total_per_person: self.breakdown.total_per_person,
        }
    }

    fn recompute(&mut self) {
        let Some(input) = self.input() else {
            self.breakdown = TipBreakdown::zero();
            return;
        };

        self.breakdown = match try_calculate(&input) {
            Ok(breakdown) => {
                debug!(
                    bill = input.bill_amount,
                    split = input.split_count,
                    tip_pct = input.tip_percentage,
                    tip = breakdown.tip_amount,
                    per_person = breakdown.total_per_person,
                    "recomputed"
                );
                breakdown
            }
            Err(e) => {
                warn!(error = %e, "calculation rejected form input");
                TipBreakdown::zero()
            }
        };
    }
}

//! # Domain Types
//!
//! Core domain types used by the calculator and the front end.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐         calculate()        ┌─────────────────┐    │
//! │  │    TipInput     │ ─────────────────────────► │  TipBreakdown   │    │
//! │  │  ─────────────  │                            │  ─────────────  │    │
//! │  │  bill_amount    │                            │  tip_amount     │    │
//! │  │  split_count    │                            │  total_per_     │    │
//! │  │  tip_percentage │                            │    person       │    │
//! │  └─────────────────┘                            └─────────────────┘    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TipPercentage  │   │   SplitCount    │   │   SliderSteps   │       │
//! │  │  0..=100        │   │   1..=max       │   │   0 = continuous│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these carry identity or lifecycle. The front end rebuilds a
//! `TipInput` on every change and passes it by value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{validate_slider_steps, validate_split_count, validate_tip_percentage};
use crate::{MAX_SLIDER_STEPS, MAX_TIP_PERCENTAGE, MIN_SPLIT_COUNT};

// =============================================================================
// Tip Percentage
// =============================================================================

/// Tip rate as a whole percentage in `0..=100`.
///
/// Deserializing goes through [`TryFrom<u32>`], so out-of-range JSON is
/// rejected like any other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32")]
#[ts(export)]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Creates a tip percentage, or `None` if it is above 100.
    pub const fn new(pct: u32) -> Option<Self> {
        if pct > MAX_TIP_PERCENTAGE {
            None
        } else {
            Some(TipPercentage(pct))
        }
    }

    /// Maps a slider position to a percentage via `round(position * 100)`.
    ///
    /// Positions outside `[0.0, 1.0]` are clamped and NaN reads as 0.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::from_slider_position(0.5).value(), 50);
    /// assert_eq!(TipPercentage::from_slider_position(1.0 / 6.0).value(), 17);
    /// assert_eq!(TipPercentage::from_slider_position(2.0).value(), 100);
    /// ```
    pub fn from_slider_position(position: f32) -> Self {
        let position = clamp_position(position);
        TipPercentage((position * MAX_TIP_PERCENTAGE as f32).round() as u32)
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        TipPercentage(0)
    }

    /// Returns the whole percentage.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the slider position this percentage corresponds to.
    #[inline]
    pub fn as_slider_position(&self) -> f32 {
        self.0 as f32 / MAX_TIP_PERCENTAGE as f32
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage::zero()
    }
}

impl TryFrom<u32> for TipPercentage {
    type Error = ValidationError;

    fn try_from(pct: u32) -> Result<Self, Self::Error> {
        validate_tip_percentage(pct)
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32")]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Creates a split count, or `None` for zero.
    pub const fn new(count: u32) -> Option<Self> {
        if count < MIN_SPLIT_COUNT {
            None
        } else {
            Some(SplitCount(count))
        }
    }

    /// A single payer.
    #[inline]
    pub const fn one() -> Self {
        SplitCount(MIN_SPLIT_COUNT)
    }

    /// Returns the count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One more person, unless already at `max`.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::SplitCount;
    ///
    /// let two = SplitCount::one().increment(100);
    /// assert_eq!(two.get(), 2);
    /// assert_eq!(two.increment(2).get(), 2);
    /// ```
    pub const fn increment(self, max: u32) -> Self {
        if self.0 < max {
            SplitCount(self.0 + 1)
        } else {
            self
        }
    }

    /// One fewer person, never below 1.
    pub const fn decrement(self) -> Self {
        if self.0 > MIN_SPLIT_COUNT {
            SplitCount(self.0 - 1)
        } else {
            SplitCount(MIN_SPLIT_COUNT)
        }
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::one()
    }
}

/// Only the lower bound is known here; the form applies its own maximum.
impl TryFrom<u32> for SplitCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        validate_split_count(count, u32::MAX)
    }
}

// =============================================================================
// Slider Steps
// =============================================================================

/// Discrete interior steps on the tip slider.
///
/// ## Quantization
/// ```text
/// steps = 5  →  7 stops on [0, 1]
///
///   0 ──── 1/6 ──── 2/6 ──── 3/6 ──── 4/6 ──── 5/6 ──── 1
///   0%     17%      33%      50%      67%      83%     100%
///
/// steps = 0  →  continuous, every integer percentage reachable
/// ```
///
/// [`new`](SliderSteps::new) takes any count. Configuration goes through
/// [`TryFrom<u32>`], which caps it at [`MAX_SLIDER_STEPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "u32")]
#[ts(export)]
pub struct SliderSteps(u32);

impl SliderSteps {
    /// Creates a slider with `steps` interior stops.
    #[inline]
    pub const fn new(steps: u32) -> Self {
        SliderSteps(steps)
    }

    /// A slider without quantization.
    #[inline]
    pub const fn continuous() -> Self {
        SliderSteps(0)
    }

    /// Returns the number of interior steps.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_continuous(&self) -> bool {
        self.0 == 0
    }

    /// Snaps a position to the nearest stop.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::SliderSteps;
    ///
    /// let steps = SliderSteps::new(5);
    /// assert_eq!(steps.snap(0.5), 0.5);
    /// assert_eq!(steps.snap(0.2), 1.0 / 6.0);
    /// assert_eq!(SliderSteps::continuous().snap(0.2), 0.2);
    /// ```
    pub fn snap(&self, position: f32) -> f32 {
        let position = clamp_position(position);
        if self.is_continuous() {
            return position;
        }

        let intervals = self.0.saturating_add(1) as f32;
        (position * intervals).round() / intervals
    }

    /// Every tip percentage the slider can produce, in ascending order.
    pub fn reachable_percentages(&self) -> Vec<TipPercentage> {
        if self.is_continuous() || self.0 >= MAX_SLIDER_STEPS {
            return (0..=MAX_TIP_PERCENTAGE).map(TipPercentage).collect();
        }

        let intervals = self.0 + 1;
        let mut stops: Vec<TipPercentage> = (0..=intervals)
            .map(|k| TipPercentage::from_slider_position(k as f32 / intervals as f32))
            .collect();
        // Very fine sliders collapse neighbouring stops onto one percentage.
        stops.dedup();
        stops
    }
}

impl Default for SliderSteps {
    fn default() -> Self {
        SliderSteps(crate::DEFAULT_SLIDER_STEPS)
    }
}

impl TryFrom<u32> for SliderSteps {
    type Error = ValidationError;

    fn try_from(steps: u32) -> Result<Self, Self::Error> {
        validate_slider_steps(steps).map(SliderSteps)
    }
}

// =============================================================================
// Tip Input / Breakdown
// =============================================================================

/// Everything the calculator needs, passed by value on each recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipInput {
    /// Pre-tip bill amount. Expected to be non-negative.
    pub bill_amount: f64,

    /// Number of people sharing. Expected to be at least 1.
    pub split_count: u32,

    /// Whole tip percentage. Expected to be in `0..=100`.
    pub tip_percentage: u32,
}

impl TipInput {
    /// Builds an input whose split and percentage are already in range.
    pub fn new(bill_amount: f64, split_count: SplitCount, tip_percentage: TipPercentage) -> Self {
        TipInput {
            bill_amount,
            split_count: split_count.get(),
            tip_percentage: tip_percentage.value(),
        }
    }
}

/// The two values shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipBreakdown {
    /// Tip in currency units.
    pub tip_amount: f64,

    /// `(bill + tip) / split`.
    pub total_per_person: f64,
}

impl TipBreakdown {
    /// Nothing calculated yet.
    #[inline]
    pub const fn zero() -> Self {
        TipBreakdown {
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }
}

fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

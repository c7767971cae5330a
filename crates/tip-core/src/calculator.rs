//! # Calculator Module
//!
//! The two pure functions the whole app is built around.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bill_amount ──┬──────────────────────────────┐                         │
//! │                │                              ▼                         │
//! │                ├──► compute_tip ──► tip ──► (bill + tip) / split        │
//! │  tip_pct ──────┘                                   │                    │
//! │                                                    ▼                    │
//! │  split_count ─────────────────────────────► total_per_person            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `compute_tip` and `compute_total_per_person` are unchecked: the caller
//! keeps the bill non-negative, the split at least 1 and the percentage in
//! `0..=100`. The `try_*` versions check those preconditions and return a
//! [`CoreError`] instead.

use crate::error::{CoreError, CoreResult};
use crate::types::{TipBreakdown, TipInput};
use crate::{MAX_BILL_AMOUNT, MAX_TIP_PERCENTAGE, MIN_SPLIT_COUNT};

// =============================================================================
// Unchecked Calculations
// =============================================================================

/// Returns the tip for a bill: `bill_amount * tip_percentage / 100`.
///
/// The product is taken before the division, so bills above roughly
/// `f64::MAX / 100` overflow to infinity. Bills accepted by
/// [`parse_bill`](crate::validation::parse_bill) stay far below that.
///
/// ## Example
/// ```rust
/// use tip_core::compute_tip;
///
/// assert_eq!(compute_tip(100.0, 20), 20.0);
/// assert_eq!(compute_tip(0.0, 50), 0.0);
/// ```
#[inline]
pub fn compute_tip(bill_amount: f64, tip_percentage: u32) -> f64 {
    bill_amount * f64::from(tip_percentage) / 100.0
}

/// Returns what each person pays: `(bill + tip) / split_count`.
///
/// A `split_count` of 0 divides by zero and yields infinity (or NaN for a
/// zero bill). Use [`try_compute_total_per_person`] when that can happen.
///
/// ## Example
/// ```rust
/// use tip_core::compute_total_per_person;
///
/// assert_eq!(compute_total_per_person(100.0, 4, 20), 30.0);
/// assert_eq!(compute_total_per_person(57.0, 1, 0), 57.0);
/// ```
#[inline]
pub fn compute_total_per_person(bill_amount: f64, split_count: u32, tip_percentage: u32) -> f64 {
    let tip = compute_tip(bill_amount, tip_percentage);
    (bill_amount + tip) / f64::from(split_count)
}

/// Runs both calculations for one input snapshot.
///
/// ## User Workflow
/// ```text
/// bill "100", split 4, slider 0.2
///      │
///      ▼
/// TipInput { 100.0, 4, 20 }
///      │
///      ▼
/// calculate() ← THIS FUNCTION
///      │
///      ▼
/// TipBreakdown { tip: 20.0, per person: 30.0 }
/// ```
pub fn calculate(input: &TipInput) -> TipBreakdown {
    TipBreakdown {
        tip_amount: compute_tip(input.bill_amount, input.tip_percentage),
        total_per_person: compute_total_per_person(
            input.bill_amount,
            input.split_count,
            input.tip_percentage,
        ),
    }
}

// =============================================================================
// Checked Calculations
// =============================================================================

/// Checked [`calculate`].
///
/// ## Example
/// ```rust
/// use tip_core::{try_calculate, TipInput};
///
/// let input = TipInput { bill_amount: 100.0, split_count: 4, tip_percentage: 20 };
/// assert_eq!(try_calculate(&input).unwrap().total_per_person, 30.0);
///
/// let empty = TipInput { split_count: 0, ..input };
/// assert!(try_calculate(&empty).is_err());
/// ```
pub fn try_calculate(input: &TipInput) -> CoreResult<TipBreakdown> {
    Ok(TipBreakdown {
        tip_amount: try_compute_tip(input.bill_amount, input.tip_percentage)?,
        total_per_person: try_compute_total_per_person(
            input.bill_amount,
            input.split_count,
            input.tip_percentage,
        )?,
    })
}

/// Checked [`compute_tip`].
///
/// ## Errors
/// - [`CoreError::InvalidBillAmount`] for a negative, NaN or infinite bill,
///   or one above [`MAX_BILL_AMOUNT`]
/// - [`CoreError::TipPercentageTooLarge`] above 100 percent
pub fn try_compute_tip(bill_amount: f64, tip_percentage: u32) -> CoreResult<f64> {
    check_bill(bill_amount)?;
    check_tip_percentage(tip_percentage)?;
    Ok(compute_tip(bill_amount, tip_percentage))
}

/// Checked [`compute_total_per_person`].
///
/// ## Errors
/// Everything [`try_compute_tip`] rejects, plus
/// [`CoreError::SplitTooSmall`] for a split count of 0.
///
/// ## Example
/// ```rust
/// use tip_core::{try_compute_total_per_person, CoreError};
///
/// assert_eq!(try_compute_total_per_person(100.0, 4, 20).unwrap(), 30.0);
/// assert!(matches!(
///     try_compute_total_per_person(100.0, 0, 20),
///     Err(CoreError::SplitTooSmall { min: 1 })
/// ));
/// ```
pub fn try_compute_total_per_person(
    bill_amount: f64,
    split_count: u32,
    tip_percentage: u32,
) -> CoreResult<f64> {
    check_bill(bill_amount)?;
    check_tip_percentage(tip_percentage)?;
    if split_count < MIN_SPLIT_COUNT {
        return Err(CoreError::SplitTooSmall {
            min: MIN_SPLIT_COUNT,
        });
    }
    Ok(compute_total_per_person(
        bill_amount,
        split_count,
        tip_percentage,
    ))
}

fn check_bill(bill_amount: f64) -> CoreResult<()> {
    if !(0.0..=MAX_BILL_AMOUNT).contains(&bill_amount) {
        return Err(CoreError::InvalidBillAmount {
            amount: bill_amount,
        });
    }
    Ok(())
}

fn check_tip_percentage(tip_percentage: u32) -> CoreResult<()> {
    if tip_percentage > MAX_TIP_PERCENTAGE {
        return Err(CoreError::TipPercentageTooLarge {
            requested: tip_percentage,
            max: MAX_TIP_PERCENTAGE,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SplitCount, TipPercentage};
    use proptest::prelude::*;

    #[test]
    fn test_tip_concrete_values() {
        assert_eq!(compute_tip(100.0, 20), 20.0);
        assert_eq!(compute_tip(0.0, 50), 0.0);
        assert_eq!(compute_tip(80.0, 15), 12.0);
        assert_eq!(compute_tip(42.0, 100), 42.0);
    }

    #[test]
    fn test_total_per_person_concrete_values() {
        assert_eq!(compute_total_per_person(100.0, 4, 20), 30.0);
        assert_eq!(compute_total_per_person(90.0, 3, 0), 30.0);
        assert_eq!(compute_total_per_person(200.0, 1, 50), 300.0);
    }

    #[test]
    fn test_calculate_matches_functions() {
        let input = TipInput::new(
            100.0,
            SplitCount::new(4).unwrap(),
            TipPercentage::new(20).unwrap(),
        );
        let breakdown = calculate(&input);
        assert_eq!(breakdown.tip_amount, 20.0);
        assert_eq!(breakdown.total_per_person, 30.0);
    }

    /// The unchecked path does not guard the split; document what it returns.
    #[test]
    fn test_unchecked_zero_split_is_infinite() {
        assert!(compute_total_per_person(10.0, 0, 10).is_infinite());
        assert!(compute_total_per_person(0.0, 0, 10).is_nan());
    }

    #[test]
    fn test_try_compute_tip_rejects_bad_input() {
        assert!(matches!(
            try_compute_tip(-1.0, 10),
            Err(CoreError::InvalidBillAmount { .. })
        ));
        assert!(matches!(
            try_compute_tip(f64::NAN, 10),
            Err(CoreError::InvalidBillAmount { .. })
        ));
        assert!(matches!(
            try_compute_tip(10.0, 101),
            Err(CoreError::TipPercentageTooLarge {
                requested: 101,
                max: 100
            })
        ));
        assert!(matches!(
            try_compute_tip(1e307, 100),
            Err(CoreError::InvalidBillAmount { .. })
        ));
        assert_eq!(try_compute_tip(100.0, 20).unwrap(), 20.0);
    }

    /// Multiplying first overflows for huge bills; the checked path refuses them.
    #[test]
    fn test_huge_bill_overflows_unchecked_only() {
        assert!(compute_tip(1e307, 100).is_infinite());
        assert_eq!(
            try_compute_tip(MAX_BILL_AMOUNT, 100).unwrap(),
            MAX_BILL_AMOUNT
        );
        assert!(try_compute_total_per_person(MAX_BILL_AMOUNT, 1, 100)
            .unwrap()
            .is_finite());
    }

    #[test]
    fn test_try_calculate() {
        let input = TipInput::new(
            60.0,
            SplitCount::new(3).unwrap(),
            TipPercentage::new(50).unwrap(),
        );
        assert_eq!(try_calculate(&input).unwrap(), calculate(&input));

        let negative = TipInput {
            bill_amount: -1.0,
            ..input
        };
        assert!(matches!(
            try_calculate(&negative),
            Err(CoreError::InvalidBillAmount { .. })
        ));
    }

    #[test]
    fn test_try_total_rejects_zero_split() {
        assert!(matches!(
            try_compute_total_per_person(10.0, 0, 10),
            Err(CoreError::SplitTooSmall { min: 1 })
        ));
        assert_eq!(try_compute_total_per_person(100.0, 4, 20).unwrap(), 30.0);
    }

    proptest! {
        #[test]
        fn prop_tip_is_bill_times_rate(bill in 0.0f64..1_000_000.0, pct in 0u32..=100) {
            prop_assert_eq!(compute_tip(bill, pct), bill * f64::from(pct) / 100.0);
        }

        #[test]
        fn prop_total_is_bill_plus_tip_over_split(
            bill in 0.0f64..1_000_000.0,
            split in 1u32..=100,
            pct in 0u32..=100
        ) {
            let expected = (bill + compute_tip(bill, pct)) / f64::from(split);
            prop_assert_eq!(compute_total_per_person(bill, split, pct), expected);
        }

        #[test]
        fn prop_zero_tip_and_single_payer(bill in 0.0f64..1_000_000.0) {
            prop_assert_eq!(compute_tip(bill, 0), 0.0);
            prop_assert_eq!(compute_total_per_person(bill, 1, 0), bill);
        }

        #[test]
        fn prop_tip_monotonic_in_percentage(bill in 0.0f64..1_000_000.0, pct in 0u32..100) {
            prop_assert!(compute_tip(bill, pct + 1) >= compute_tip(bill, pct));
        }

        #[test]
        fn prop_total_non_increasing_in_split(
            bill in 0.0f64..1_000_000.0,
            split in 1u32..100,
            pct in 0u32..=100
        ) {
            prop_assert!(
                compute_total_per_person(bill, split + 1, pct)
                    <= compute_total_per_person(bill, split, pct)
            );
        }

        #[test]
        fn prop_checked_agrees_with_unchecked(
            bill in 0.0f64..1_000_000.0,
            split in 1u32..=100,
            pct in 0u32..=100
        ) {
            prop_assert_eq!(
                try_compute_total_per_person(bill, split, pct).unwrap(),
                compute_total_per_person(bill, split, pct)
            );
        }
    }
}

//! # Validation Module
//!
//! Input validation for the tip calculator front end.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (tip-terminal)                                          │
//! │  ├── is_bill_entered: "is the bill field non-empty"                    │
//! │  └── Hides split/tip controls until it is                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_bill: text → non-negative f64                               │
//! │  └── bounds for split count, tip percentage, config values             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: calculator (unchecked)                                       │
//! │  └── Trusts its inputs completely                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tip_core::validation::{parse_bill, validate_split_count};
//!
//! assert_eq!(parse_bill(" 42.50 ").unwrap(), 42.5);
//! assert_eq!(validate_split_count(4, 100).unwrap().get(), 4);
//! ```

use crate::error::ValidationError;
use crate::types::{SplitCount, TipPercentage};
use crate::{MAX_BILL_AMOUNT, MAX_SLIDER_STEPS, MAX_TIP_PERCENTAGE, MIN_SPLIT_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Bill Text
// =============================================================================

/// The form's only gate: is there anything in the bill field?
///
/// ## Example
/// ```rust
/// use tip_core::validation::is_bill_entered;
///
/// assert!(is_bill_entered("12"));
/// assert!(!is_bill_entered("   "));
/// ```
#[inline]
pub fn is_bill_entered(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Parses the bill text into an amount.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Must be a decimal number
/// - Must be finite and in `0..=MAX_BILL_AMOUNT` (zero is allowed)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types into "Enter Bill"                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_bill(text) ← THIS FUNCTION                                      │
/// │       │                                                                 │
/// │       ├── empty?        → Required       (no calculation)              │
/// │       ├── "abc"?        → InvalidFormat  (no calculation)              │
/// │       ├── "-5", "inf"?  → OutOfRange     (no calculation)              │
/// │       │                                                                 │
/// │       └── OK → TipInput.bill_amount                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_bill(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "bill".to_string(),
        });
    }

    let amount: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "bill".to_string(),
        reason: "must be a number".to_string(),
    })?;

    // Also rejects NaN and both infinities.
    if !(0.0..=MAX_BILL_AMOUNT).contains(&amount) {
        return Err(ValidationError::OutOfRange {
            field: "bill".to_string(),
            min: 0,
            max: MAX_BILL_AMOUNT as i64,
        });
    }

    Ok(amount)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a split count against the configured maximum.
///
/// ## Rules
/// - At least 1
/// - At most `max`
pub fn validate_split_count(count: u32, max: u32) -> ValidationResult<SplitCount> {
    match SplitCount::new(count) {
        Some(split) if count <= max => Ok(split),
        _ => Err(ValidationError::OutOfRange {
            field: "split".to_string(),
            min: i64::from(MIN_SPLIT_COUNT),
            max: i64::from(max),
        }),
    }
}

/// Validates a whole tip percentage.
pub fn validate_tip_percentage(pct: u32) -> ValidationResult<TipPercentage> {
    TipPercentage::new(pct).ok_or_else(|| ValidationError::OutOfRange {
        field: "tip".to_string(),
        min: 0,
        max: i64::from(MAX_TIP_PERCENTAGE),
    })
}

/// Validates a configured split maximum.
///
/// A maximum below 1 would leave the stepper with no legal value.
pub fn validate_max_split(max: u32) -> ValidationResult<u32> {
    if max < MIN_SPLIT_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "max_split".to_string(),
            min: i64::from(MIN_SPLIT_COUNT),
            max: i64::from(u32::MAX),
        });
    }

    Ok(max)
}

/// Validates a configured slider step count.
///
/// ## Rules
/// - 0 means continuous
/// - At most [`MAX_SLIDER_STEPS`]; finer sliders reach no new percentages
pub fn validate_slider_steps(steps: u32) -> ValidationResult<u32> {
    if steps > MAX_SLIDER_STEPS {
        return Err(ValidationError::OutOfRange {
            field: "slider_steps".to_string(),
            min: 0,
            max: i64::from(MAX_SLIDER_STEPS),
        });
    }

    Ok(steps)
}

/// Validates a slider position typed by hand.
pub fn validate_slider_position(position: f32) -> ValidationResult<f32> {
    if !(0.0..=1.0).contains(&position) {
        return Err(ValidationError::InvalidFormat {
            field: "slider position".to_string(),
            reason: "must be between 0.0 and 1.0".to_string(),
        });
    }

    Ok(position)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill() {
        assert_eq!(parse_bill("100").unwrap(), 100.0);
        assert_eq!(parse_bill("  12.75\n").unwrap(), 12.75);
        assert_eq!(parse_bill("0").unwrap(), 0.0);

        assert!(matches!(parse_bill(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_bill("   "), Err(ValidationError::Required { .. })));
        assert!(matches!(
            parse_bill("12,50"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_bill("inf"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_bill("NaN"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(parse_bill("-5"), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_parse_bill_upper_bound() {
        assert_eq!(parse_bill("1000000000000").unwrap(), MAX_BILL_AMOUNT);
        assert!(matches!(
            parse_bill("1e307"),
            Err(ValidationError::OutOfRange { min: 0, .. })
        ));
        assert_eq!(
            parse_bill("1000000000000.01").unwrap_err().to_string(),
            "bill must be between 0 and 1000000000000"
        );
    }

    #[test]
    fn test_is_bill_entered() {
        assert!(is_bill_entered("1"));
        assert!(is_bill_entered(" abc "));
        assert!(!is_bill_entered(""));
        assert!(!is_bill_entered("\t"));
    }

    #[test]
    fn test_validate_split_count() {
        assert_eq!(validate_split_count(1, 100).unwrap().get(), 1);
        assert_eq!(validate_split_count(100, 100).unwrap().get(), 100);
        assert!(validate_split_count(0, 100).is_err());
        assert!(validate_split_count(101, 100).is_err());
    }

    #[test]
    fn test_validate_tip_percentage() {
        assert_eq!(validate_tip_percentage(0).unwrap().value(), 0);
        assert_eq!(validate_tip_percentage(100).unwrap().value(), 100);
        let err = validate_tip_percentage(150).unwrap_err();
        assert_eq!(err.to_string(), "tip must be between 0 and 100");
    }

    #[test]
    fn test_validate_max_split() {
        assert_eq!(validate_max_split(100).unwrap(), 100);
        assert_eq!(validate_max_split(1).unwrap(), 1);
        assert!(validate_max_split(0).is_err());
    }

    #[test]
    fn test_validate_slider_steps() {
        assert_eq!(validate_slider_steps(0).unwrap(), 0);
        assert_eq!(validate_slider_steps(99).unwrap(), 99);
        assert!(validate_slider_steps(100).is_err());
        assert!(validate_slider_steps(u32::MAX).is_err());
    }

    #[test]
    fn test_validate_slider_position() {
        assert!(validate_slider_position(0.0).is_ok());
        assert!(validate_slider_position(1.0).is_ok());
        assert!(validate_slider_position(1.01).is_err());
        assert!(validate_slider_position(f32::NAN).is_err());
    }
}

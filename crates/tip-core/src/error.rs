//! # Error Types
//!
//! Domain-specific error types for tip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tip-core errors (this file)                                           │
//! │  ├── CoreError        - Checked calculation failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tip-terminal errors (in app)                                          │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → Terminal                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The unchecked calculator functions never produce these. Only the `try_*`
//! variants and the validation helpers do.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checked calculation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Bill amount is negative, NaN or infinite.
    #[error("Invalid bill amount: {amount}")]
    InvalidBillAmount { amount: f64 },

    /// Split count of zero would divide by zero.
    #[error("Split count must be at least {min}")]
    SplitTooSmall { min: u32 },

    /// Tip percentage is above the slider maximum.
    #[error("Tip percentage {requested} exceeds maximum allowed ({max})")]
    TipPercentageTooLarge { requested: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. non-numeric bill text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

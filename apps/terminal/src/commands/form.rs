//! # Form Commands
//!
//! Read-only views of the form, plus reset.

use super::Outcome;
use crate::error::ApiError;
use crate::state::FormState;

/// Shows the current summary.
pub fn show(form: &FormState) -> Outcome {
    Outcome::Render(form.snapshot())
}

/// Serializes the current snapshot for scripted callers.
pub fn to_json(form: &FormState) -> Result<Outcome, ApiError> {
    serde_json::to_string(&form.snapshot())
        .map(Outcome::Json)
        .map_err(|e| ApiError::internal(format!("Failed to serialize form: {}", e)))
}

/// Clears bill, split and slider.
pub fn reset(form: &mut FormState) -> Outcome {
    form.reset();
    Outcome::Render(form.snapshot())
}

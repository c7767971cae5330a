//! # Tip Commands
//!
//! The tip slider. `tip` takes a raw position, `pct` picks the stop for a
//! whole percentage. Both go through the configured slider steps.

use tip_core::validation::{validate_slider_position, validate_tip_percentage};
use tracing::debug;

use super::Outcome;
use crate::error::ApiError;
use crate::state::FormState;

/// Moves the slider to `position`.
pub fn set_tip_position(form: &mut FormState, position: f32) -> Result<Outcome, ApiError> {
    debug!(position, "set_tip_position command");

    if !form.controls_enabled() {
        return Err(ApiError::bill_required());
    }

    let position = validate_slider_position(position)?;
    form.set_slider_position(position);
    Ok(Outcome::Render(form.snapshot()))
}

/// Moves the slider to the stop nearest `pct` percent.
///
/// With the default 5-step slider `pct 20` lands on 17%.
pub fn set_tip_percentage(form: &mut FormState, pct: u32) -> Result<Outcome, ApiError> {
    debug!(pct, "set_tip_percentage command");

    if !form.controls_enabled() {
        return Err(ApiError::bill_required());
    }

    let pct = validate_tip_percentage(pct)?;
    form.set_slider_position(pct.as_slider_position());
    Ok(Outcome::Render(form.snapshot()))
}

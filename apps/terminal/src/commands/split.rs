//! # Split Commands
//!
//! The `-` / `+` stepper next to "Split".

use tracing::debug;

use super::Outcome;
use crate::error::ApiError;
use crate::state::{ConfigState, FormState};

/// Adds one person to the split.
///
/// At the configured maximum the count stays put and the summary is shown
/// unchanged.
pub fn increment_split(form: &mut FormState, config: &ConfigState) -> Result<Outcome, ApiError> {
    if !form.controls_enabled() {
        return Err(ApiError::bill_required());
    }

    if !form.increment_split() {
        debug!(max = config.max_split, "split already at maximum");
    }
    Ok(Outcome::Render(form.snapshot()))
}

/// Removes one person from the split, never below 1.
pub fn decrement_split(form: &mut FormState) -> Result<Outcome, ApiError> {
    if !form.controls_enabled() {
        return Err(ApiError::bill_required());
    }

    if !form.decrement_split() {
        debug!("split already at minimum");
    }
    Ok(Outcome::Render(form.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_requires_bill() {
        let config = ConfigState::default();
        let mut form = FormState::new(&config);

        let err = increment_split(&mut form, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::BillRequired);
        let err = decrement_split(&mut form).unwrap_err();
        assert_eq!(err.code, ErrorCode::BillRequired);
        assert_eq!(form.split_count().get(), 1);
    }

    #[test]
    fn test_stepper() {
        let config = ConfigState::default();
        let mut form = FormState::new(&config);
        form.set_bill_text("100");

        increment_split(&mut form, &config).unwrap();
        let Outcome::Render(snapshot) = increment_split(&mut form, &config).unwrap() else {
            panic!("expected a render");
        };
        assert_eq!(snapshot.split_count, 3);

        decrement_split(&mut form).unwrap();
        decrement_split(&mut form).unwrap();
        decrement_split(&mut form).unwrap();
        assert_eq!(form.split_count().get(), 1);
    }
}

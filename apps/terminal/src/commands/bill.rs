//! # Bill Commands
//!
//! The "Enter Bill" field.

use tip_core::validation::{is_bill_entered, parse_bill};
use tracing::debug;

use super::Outcome;
use crate::error::ApiError;
use crate::state::FormState;

/// Sets the bill text.
///
/// ## Behavior
/// - Empty text clears the bill and hides the split/tip controls
/// - Text that is not an amount in `0..=MAX_BILL_AMOUNT` is rejected and
///   the previous bill is kept
/// - Otherwise the bill is replaced and the summary recomputed
pub fn set_bill(form: &mut FormState, text: &str) -> Result<Outcome, ApiError> {
    debug!(text = %text, "set_bill command");

    if is_bill_entered(text) {
        parse_bill(text)?;
    }

    form.set_bill_text(text);
    Ok(Outcome::Render(form.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    #[test]
    fn test_set_bill() {
        let mut form = FormState::new(&ConfigState::default());
        let Outcome::Render(snapshot) = set_bill(&mut form, "80").unwrap() else {
            panic!("expected a render");
        };
        assert_eq!(snapshot.bill_amount, Some(80.0));
        assert_eq!(snapshot.total_per_person, 80.0);
    }

    #[test]
    fn test_rejects_bad_bill_and_keeps_previous() {
        let mut form = FormState::new(&ConfigState::default());
        set_bill(&mut form, "80").unwrap();

        let err = set_bill(&mut form, "eighty").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "bill has invalid format: must be a number");

        let err = set_bill(&mut form, "-3").unwrap_err();
        assert_eq!(err.message, "bill must be between 0 and 1000000000000");

        let err = set_bill(&mut form, "1e307").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(form.bill_amount(), Some(80.0));
    }

    #[test]
    fn test_empty_bill_clears() {
        let mut form = FormState::new(&ConfigState::default());
        set_bill(&mut form, "80").unwrap();
        set_bill(&mut form, "").unwrap();
        assert!(!form.controls_enabled());
        assert_eq!(form.breakdown().total_per_person, 0.0);
    }
}

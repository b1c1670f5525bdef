//! UI-owned mutable state for the calculator screen.
//!
//! The two state cells — raw amount text and selected rate — live here and
//! nowhere else. The calculation core only ever reads them through function
//! arguments; derived totals are recomputed, never stored back into the form.

use vat_core::VatRate;

/// The calculator form: everything the user can change on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorForm {
    /// Raw amount text, exactly as typed (defaults to empty).
    pub amount_input: String,
    /// Currently selected preset rate (defaults to 0%).
    pub vat_rate: VatRate,
}

impl CalculatorForm {
    /// Create a form with initial values, e.g. from CLI flags.
    pub fn new(amount_input: String, vat_rate: VatRate) -> Self {
        Self {
            amount_input,
            vat_rate,
        }
    }

    /// Clear the form back to screen-initialization defaults.
    pub fn reset(&mut self) {
        self.amount_input.clear();
        self.vat_rate = VatRate::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_form_is_empty_at_zero_percent() {
        let form = CalculatorForm::default();

        assert_eq!(form.amount_input, "");
        assert_eq!(form.vat_rate, VatRate::Zero);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = CalculatorForm::new("99.99".to_string(), VatRate::Twenty);

        form.reset();

        assert_eq!(form, CalculatorForm::default());
    }
}

//! VAT arithmetic and input validation.
//!
//! Everything here is a total, pure function over IEEE-754 doubles. No
//! rounding happens at this layer; two-decimal formatting is a display
//! concern owned by the UI shell.

use crate::input::{AmountParseError, parse_amount};
use crate::rate::VatRate;
use crate::summary::BillSummary;

/// Returns whether amount text is worth converting at all.
///
/// True iff the trimmed input is non-empty. Total over all strings; numeric
/// well-formedness is checked separately by [`parse_amount`].
///
/// # Examples
///
/// ```
/// use vat_core::calculator::validate;
///
/// assert!(!validate(""));
/// assert!(!validate("   "));
/// assert!(validate("5"));
/// assert!(validate("  5  "));
/// ```
pub fn validate(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Computes the VAT owed on `amount` at an integer percentage.
///
/// Defined for any integer percentage, not only the selector presets.
/// Non-finite amounts propagate IEEE-754 semantics unchanged.
///
/// # Examples
///
/// ```
/// use vat_core::calculator::compute_vat;
///
/// assert_eq!(compute_vat(200.0, 20), 40.0);
/// assert_eq!(compute_vat(200.0, 0), 0.0);
/// ```
pub fn compute_vat(amount: f64, vat_percentage: i32) -> f64 {
    (f64::from(vat_percentage) * amount) / 100.0
}

/// Computes the total bill: base amount plus VAT.
///
/// # Examples
///
/// ```
/// use vat_core::calculator::compute_total;
///
/// assert_eq!(compute_total(40.0, 200.0), 240.0);
/// ```
pub fn compute_total(vat_amount: f64, amount: f64) -> f64 {
    vat_amount + amount
}

/// Derives a [`BillSummary`] from the current input state.
///
/// The explicit state-to-derived step the UI shell invokes on every change:
///
/// * empty or whitespace-only input is not an error and yields
///   [`BillSummary::ZERO`];
/// * non-empty input must parse as a finite number, otherwise the parse
///   error is returned for the shell to surface;
/// * otherwise VAT and total are computed from scratch. No caching or
///   memoization; the computation is O(1).
pub fn recompute(input: &str, rate: VatRate) -> Result<BillSummary, AmountParseError> {
    if !validate(input) {
        return Ok(BillSummary::ZERO);
    }
    let amount = parse_amount(input)?;
    let vat_amount = compute_vat(amount, rate.percentage());
    let total_amount = compute_total(vat_amount, amount);
    tracing::debug!(amount, rate = %rate, vat_amount, total_amount, "recomputed");
    Ok(BillSummary {
        vat_amount,
        total_amount,
    })
}

//! End-to-end tests of the raw-text → recompute → display pipeline.
//!
//! These complement the unit tests inside calculator.rs by driving the same
//! sequence the UI shell performs on every change: validity check, parse,
//! compute, format.

use pretty_assertions::assert_eq;
use vat_core::{BillSummary, VatRate, recompute, validate};

#[test]
fn typing_an_amount_then_pressing_twenty_percent() {
    // User types "200", then selects the 20% preset.
    let input = "200";
    assert!(validate(input));

    let summary = recompute(input, VatRate::Twenty).unwrap();

    assert_eq!(summary.vat_amount, 40.0);
    assert_eq!(summary.total_amount, 240.0);
    assert_eq!(summary.to_string(), "vat $40.00, total $240.00");
}

#[test]
fn blank_input_shows_zeros_for_every_rate() {
    assert!(!validate(""));

    for &rate in VatRate::all() {
        let summary = recompute("", rate).unwrap();

        assert_eq!(summary, BillSummary::ZERO);
        assert_eq!(summary.to_string(), "vat $0.00, total $0.00");
    }
}

#[test]
fn fractional_amount_rounds_only_at_display_time() {
    let summary = recompute("99.99", VatRate::Five).unwrap();

    // Unrounded internally...
    assert!((summary.vat_amount - 4.9995).abs() < 1e-9);
    assert!((summary.total_amount - 104.9895).abs() < 1e-9);
    // ...two decimals at the display boundary.
    assert_eq!(summary.to_string(), "vat $5.00, total $104.99");
}

#[test]
fn rate_change_alone_triggers_a_fresh_result() {
    let input = "1,000";

    let at_five = recompute(input, VatRate::Five).unwrap();
    let at_ten = recompute(input, VatRate::Ten).unwrap();

    assert_eq!(at_five.vat_amount, 50.0);
    assert_eq!(at_ten.vat_amount, 100.0);
    assert_eq!(at_ten.total_amount, 1100.0);
}

#[test]
fn garbage_input_is_rejected_not_converted() {
    assert!(validate("12a")); // non-empty, so validity alone is not enough

    assert!(recompute("12a", VatRate::Twenty).is_err());
}

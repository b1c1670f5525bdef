use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived totals for one recomputation.
///
/// A `BillSummary` has no identity of its own: it is recomputed from the
/// current input on every change and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillSummary {
    /// VAT owed on the base amount, unrounded.
    pub vat_amount: f64,
    /// Base amount plus VAT, unrounded.
    pub total_amount: f64,
}

impl BillSummary {
    /// The summary shown while no valid amount has been entered.
    pub const ZERO: BillSummary = BillSummary {
        vat_amount: 0.0,
        total_amount: 0.0,
    };
}

impl fmt::Display for BillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vat ${:.2}, total ${:.2}",
            self.vat_amount, self.total_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_summary_has_zero_fields() {
        assert_eq!(BillSummary::ZERO.vat_amount, 0.0);
        assert_eq!(BillSummary::ZERO.total_amount, 0.0);
        assert_eq!(BillSummary::ZERO, BillSummary::default());
    }

    #[test]
    fn display_formats_to_two_decimals() {
        let summary = BillSummary {
            vat_amount: 4.9995,
            total_amount: 104.9895,
        };

        assert_eq!(summary.to_string(), "vat $5.00, total $104.99");
    }
}

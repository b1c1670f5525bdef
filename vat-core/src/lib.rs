pub mod calculator;
pub mod input;
pub mod rate;
pub mod summary;

pub use calculator::{compute_total, compute_vat, recompute, validate};
pub use input::{AmountParseError, parse_amount};
pub use rate::VatRate;
pub use summary::BillSummary;

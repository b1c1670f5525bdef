mod currency;

pub use currency::currency_field;

mod calculator;

pub use calculator::CalculatorScreen;

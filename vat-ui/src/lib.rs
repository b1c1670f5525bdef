pub mod app;
pub mod screens;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::VatApp;

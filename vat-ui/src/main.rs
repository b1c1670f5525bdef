use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vat_core::VatRate;
use vat_ui::VatApp;
use vat_ui::state::CalculatorForm;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// VAT calculator.
///
/// Opens a single window that computes the VAT amount and total bill for a
/// user-entered base amount at one of four preset percentages.
#[derive(Debug, Parser)]
struct Cli {
    /// Initial VAT percentage preset. One of 0, 5, 10, 20.
    #[arg(long, default_value = "0")]
    rate: VatRate,

    /// Initial amount text to prefill the entry field.
    #[arg(long, default_value = "")]
    amount: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let form = CalculatorForm::new(cli.amount, cli.rate);
    debug!(rate = %form.vat_rate, "starting with initial form");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 480.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "VAT Calculator",
        options,
        Box::new(|cc| Ok(Box::new(VatApp::new(cc, form)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))?;

    Ok(())
}

use egui::Context;
use tracing::info;
use vat_core::{BillSummary, recompute};

use crate::screens::CalculatorScreen;
use crate::state::CalculatorForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Error,
}

/// Main application state.
pub struct VatApp {
    pub form: CalculatorForm,
    pub summary: BillSummary,
    pub status_message: Option<(String, MessageType)>,
    /// Form snapshot behind the current `summary`. Recomputation runs only
    /// when the form has changed since this snapshot.
    last_computed: Option<CalculatorForm>,
}

impl VatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, form: CalculatorForm) -> Self {
        Self::from_form(form)
    }

    /// Construct without an eframe context; also the test entry point.
    pub fn from_form(form: CalculatorForm) -> Self {
        Self {
            form,
            summary: BillSummary::ZERO,
            status_message: None,
            last_computed: None,
        }
    }

    pub fn show_message(&mut self, msg: impl Into<String>, msg_type: MessageType) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Recompute derived totals from the current form state.
    ///
    /// Empty input and a valid number both yield a summary; non-numeric text
    /// falls back to the zero summary with the parse error shown in the
    /// status bar. A later valid edit clears that error automatically.
    pub fn recalculate(&mut self) {
        match recompute(&self.form.amount_input, self.form.vat_rate) {
            Ok(summary) => {
                self.summary = summary;
                if matches!(self.status_message, Some((_, MessageType::Error))) {
                    self.clear_message();
                }
            }
            Err(e) => {
                self.summary = BillSummary::ZERO;
                self.show_message(e.to_string(), MessageType::Error);
            }
        }
    }

    fn recalculate_if_changed(&mut self) {
        if self.last_computed.as_ref() != Some(&self.form) {
            self.recalculate();
            self.last_computed = Some(self.form.clone());
        }
    }

    fn reset(&mut self) {
        info!("resetting calculator form");
        self.form.reset();
        self.show_message("Form reset", MessageType::Info);
    }
}

impl eframe::App for VatApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Edits from the previous frame land here; every keystroke and
        // rate press goes through a full recomputation.
        self.recalculate_if_changed();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reset").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // The single calculator screen
        egui::CentralPanel::default().show(ctx, |ui| {
            CalculatorScreen::show(self, ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vat_core::VatRate;

    use super::*;

    fn app_with(amount: &str, rate: VatRate) -> VatApp {
        VatApp::from_form(CalculatorForm::new(amount.to_string(), rate))
    }

    #[test]
    fn valid_amount_produces_totals() {
        let mut app = app_with("200", VatRate::Twenty);

        app.recalculate();

        assert_eq!(app.summary.vat_amount, 40.0);
        assert_eq!(app.summary.total_amount, 240.0);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn empty_amount_produces_zero_totals_without_error() {
        let mut app = app_with("", VatRate::Ten);

        app.recalculate();

        assert_eq!(app.summary, BillSummary::ZERO);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn garbage_amount_shows_error_and_zero_totals() {
        let mut app = app_with("12a", VatRate::Twenty);

        app.recalculate();

        assert_eq!(app.summary, BillSummary::ZERO);
        let (msg, msg_type) = app.status_message.clone().unwrap();
        assert_eq!(msg_type, MessageType::Error);
        assert!(msg.contains("12a"));
    }

    #[test]
    fn fixing_the_amount_clears_the_error() {
        let mut app = app_with("12a", VatRate::Twenty);
        app.recalculate();
        assert!(app.status_message.is_some());

        app.form.amount_input = "12".to_string();
        app.recalculate();

        assert_eq!(app.status_message, None);
        assert_eq!(app.summary.vat_amount, 2.4);
    }

    #[test]
    fn reset_restores_defaults_and_reports_it() {
        let mut app = app_with("99.99", VatRate::Five);
        app.recalculate();

        app.reset();
        app.recalculate();

        assert_eq!(app.form, CalculatorForm::default());
        assert_eq!(app.summary, BillSummary::ZERO);
        let (_, msg_type) = app.status_message.clone().unwrap();
        assert_eq!(msg_type, MessageType::Info);
    }
}

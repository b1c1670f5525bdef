use egui::{RichText, Ui};
use vat_core::VatRate;

use crate::app::VatApp;
use crate::utils::{echo_amount, format_currency};
use crate::widgets::currency_field;

pub struct CalculatorScreen;

impl CalculatorScreen {
    /// Consistent card width for both panels
    const GROUP_WIDTH: f32 = 340.0;
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 110.0;

    pub fn show(app: &mut VatApp, ui: &mut Ui) {
        let group_width = ui.available_width().min(Self::GROUP_WIDTH);

        ui.vertical_centered(|ui| {
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                Self::total_panel(app, ui, group_width);
                ui.add_space(10.0);
                Self::content_panel(app, ui, group_width);
            });
        });
    }

    /// The highlighted header showing the running total.
    fn total_panel(app: &VatApp, ui: &mut Ui, group_width: f32) {
        ui.group(|ui| {
            ui.set_min_width(group_width - 20.0);
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(RichText::new("TOTAL").size(20.0).strong());
                ui.label(
                    RichText::new(format_currency(app.summary.total_amount))
                        .size(32.0)
                        .strong(),
                );
                ui.add_space(10.0);
            });
        });
    }

    /// Entry field, derived rows, and the four-way rate selector.
    fn content_panel(app: &mut VatApp, ui: &mut Ui, group_width: f32) {
        ui.group(|ui| {
            ui.set_min_width(group_width - 20.0);

            currency_field(ui, "Enter amount", &mut app.form.amount_input);
            ui.add_space(5.0);
            ui.separator();

            egui::Grid::new("derived_rows")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.set_min_width(Self::LABEL_WIDTH);
                        ui.label(RichText::new("Amount").strong());
                    });
                    ui.label(echo_amount(&app.form.amount_input));
                    ui.end_row();

                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.set_min_width(Self::LABEL_WIDTH);
                        ui.label(RichText::new("VAT Amount").strong());
                    });
                    ui.label(format_currency(app.summary.vat_amount));
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.label(format!("{}%", app.form.vat_rate.percentage()));
            });
            ui.add_space(5.0);

            Self::rate_buttons(app, ui);
            ui.add_space(5.0);
        });
    }

    /// Exactly four discrete choices; pressing one replaces the selection.
    fn rate_buttons(app: &mut VatApp, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let spacing = (ui.available_width() - 4.0 * 52.0).max(0.0) / 5.0;
            ui.add_space(spacing);
            for &rate in VatRate::all() {
                let selected = app.form.vat_rate == rate;
                let button = egui::SelectableLabel::new(selected, rate.label());
                if ui.add_sized([52.0, 40.0], button).clicked() {
                    app.form.vat_rate = rate;
                }
                ui.add_space(spacing);
            }
        });
    }
}

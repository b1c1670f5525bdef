use egui::{Response, RichText, Ui};

/// A labelled currency entry row: bold label, `$` prefix, single-line field.
///
/// The field applies no numeric pre-validation; whatever the user types is
/// handed back verbatim through `value`.
pub fn currency_field(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        ui.add_space(8.0);
        ui.label("$");
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(ui.available_width())
                .hint_text("0.00"),
        )
    })
    .inner
}

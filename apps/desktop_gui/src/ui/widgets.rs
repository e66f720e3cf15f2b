use client_core::{FieldBinding, FieldKind};
use eframe::egui;

/// Draws a single-line input attached to `binding`; edits are written back
/// through [`FieldBinding::on_change`].
pub fn field_input(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    mut binding: FieldBinding<'_>,
) -> egui::Response {
    let mut buffer = binding.value().to_string();
    let hint = match binding.kind() {
        FieldKind::Url => "https://",
        FieldKind::Text => "",
    };

    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(&mut buffer)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    let response = ui.add(edit);
    if response.changed() {
        binding.on_change(buffer);
    }
    response
}

/// Bordered banner with a dismiss button. Returns `true` when dismissed.
pub fn notification_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let mut dismissed = false;
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.fg_stroke.color))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

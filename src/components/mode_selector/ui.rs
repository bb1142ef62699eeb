use super::MODE_BUTTONS;
use crate::metrics::Mode;

/// Draws the three mode buttons. Returns true when the mode changed.
pub fn show_mode_selector(ui: &mut egui::Ui, mode: &mut Mode) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for button in &MODE_BUTTONS {
            let text = egui::RichText::new(button.label).color(egui::Color32::BLACK);
            let widget = egui::Button::new(text)
                .fill(button.fill)
                .selected(*mode == button.mode)
                .min_size(egui::vec2(160.0, 32.0));
            if ui.add(widget).clicked() && *mode != button.mode {
                *mode = button.mode;
                changed = true;
            }
        }
    });
    changed
}

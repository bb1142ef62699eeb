use super::{ChartSpan, DisplayOptions};
use crate::metrics::History;

/// Floating window for the meter and chart options. Closing it clears `open`.
pub fn show_display_options(
    ctx: &egui::Context,
    open: &mut bool,
    options: &mut DisplayOptions,
    history: &History,
) {
    egui::Window::new("Display")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::Grid::new("display_options")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Chart shows");
                    egui::ComboBox::from_id_salt("chart_span")
                        .selected_text(options.chart_span.label())
                        .show_ui(ui, |ui| {
                            for span in ChartSpan::ALL {
                                ui.selectable_value(&mut options.chart_span, span, span.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Line width");
                    ui.add(egui::Slider::new(
                        &mut options.line_width,
                        DisplayOptions::LINE_WIDTH_RANGE,
                    ));
                    ui.end_row();

                    ui.label("Bar width");
                    ui.add(
                        egui::Slider::new(&mut options.bar_width, DisplayOptions::BAR_WIDTH_RANGE)
                            .suffix(" px"),
                    );
                    ui.end_row();
                });

            ui.separator();
            let kept = match history.retention() {
                Some(limit) => format!("{} of {} samples kept", history.len(), limit),
                None => format!("{} samples kept", history.len()),
            };
            ui.weak(kept);

            if ui.button("Reset").clicked() {
                *options = DisplayOptions::default();
            }
        });
}

use super::status_text;
use crate::components::usage_chart::show_usage_chart;
use crate::components::usage_meters::{show_usage_meters, MeterReadings};
use crate::components::DisplayOptions;
use crate::metrics::{DisplayState, Scheduler};

/// Meters on top, chart below. `failure` is shown between them once sampling
/// has stopped; the last readings stay on screen.
pub fn show_dashboard(
    ui: &mut egui::Ui,
    state: &DisplayState,
    options: &DisplayOptions,
    failure: Option<&str>,
) {
    let readings = MeterReadings::latest(state.history());
    show_usage_meters(ui, readings.as_ref(), options.bar_width);

    if let Some(message) = failure {
        ui.add_space(4.0);
        ui.colored_label(
            ui.visuals().error_fg_color,
            format!("Sampling stopped: {message}"),
        );
    }

    ui.add_space(8.0);
    show_usage_chart(ui, state.history(), state.mode(), options);
}

/// Sampler status for the top bar; "stopped" once the sampler is gone.
pub fn show_status(ui: &mut egui::Ui, scheduler: Option<&Scheduler>) {
    match scheduler {
        Some(scheduler) => ui.weak(status_text(scheduler.phase(), scheduler.interval())),
        None => ui.weak("Stopped"),
    };
}

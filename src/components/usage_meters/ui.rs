use super::MeterReadings;
use crate::components::usage_chart::Series;

pub fn show_usage_meters(ui: &mut egui::Ui, readings: Option<&MeterReadings>, bar_width: f32) {
    let Some(readings) = readings else {
        ui.label("Waiting for first sample…");
        return;
    };

    egui::Grid::new("usage_meters")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            meter_row(ui, readings.cpu_label(), readings.cpu_fraction(), Series::Cpu, bar_width);
            meter_row(ui, readings.ram_label(), readings.ram_fraction(), Series::Ram, bar_width);
        });
}

fn meter_row(ui: &mut egui::Ui, label: String, fraction: f32, series: Series, width: f32) {
    ui.label(label);
    ui.add(
        egui::ProgressBar::new(fraction)
            .desired_width(width)
            .fill(series.color()),
    );
    ui.end_row();
}

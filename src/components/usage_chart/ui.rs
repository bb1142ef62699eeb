use super::{chart_series, format_time_axis};
use crate::components::DisplayOptions;
use crate::metrics::{History, Mode};
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Time-series chart of the visible series, rebuilt from `history` every frame.
pub fn show_usage_chart(
    ui: &mut egui::Ui,
    history: &History,
    mode: Mode,
    options: &DisplayOptions,
) {
    let plot = Plot::new("usage_chart")
        .legend(Legend::default())
        .show_axes(true)
        .x_axis_label("Time")
        .y_axis_label("Usage (%)")
        .x_axis_formatter(|mark, _range| format_time_axis(mark.value))
        .label_formatter(|name, point| {
            format!("{name}\n{}  {:.1}%", format_time_axis(point.x), point.y)
        })
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    plot.show(ui, |plot_ui| {
        for line in chart_series(history, mode, options.chart_span) {
            plot_ui.line(
                Line::new(PlotPoints::from(line.points))
                    .name(line.series.name())
                    .color(line.series.color())
                    .width(options.line_width),
            );
        }
    });
}

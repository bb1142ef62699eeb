use crate::components::display_options::ChartSpan;
use crate::metrics::{History, Mode};
use chrono::{DateTime, Local};
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Cpu,
    Ram,
}

impl Series {
    pub fn name(self) -> &'static str {
        match self {
            Series::Cpu => "CPU Usage",
            Series::Ram => "RAM Usage",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Series::Cpu => Color32::from_rgb(0x4B, 0x99, 0xF2),
            Series::Ram => Color32::from_rgb(0x4C, 0xAF, 0x50),
        }
    }
}

/// One line of the chart: `[seconds since epoch, percent]` points, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub series: Series,
    pub points: Vec<[f64; 2]>,
}

/// Builds the lines to plot for `mode`, CPU before RAM. Only samples within
/// `span` of the newest one are included.
pub fn chart_series(history: &History, mode: Mode, span: ChartSpan) -> Vec<ChartSeries> {
    let xs: Vec<f64> = history.timestamps().map(timestamp_to_x).collect();
    let start = span
        .seconds()
        .and_then(|width| {
            let newest = *xs.last()?;
            xs.iter().position(|&x| x >= newest - width)
        })
        .unwrap_or(0);
    let xs = &xs[start..];

    let mut lines = Vec::with_capacity(2);
    if mode.show_cpu() {
        lines.push(line(Series::Cpu, xs, history.cpu().skip(start)));
    }
    if mode.show_ram() {
        lines.push(line(Series::Ram, xs, history.ram().skip(start)));
    }
    lines
}

fn line(series: Series, xs: &[f64], values: impl Iterator<Item = f32>) -> ChartSeries {
    ChartSeries {
        series,
        points: xs
            .iter()
            .zip(values)
            .map(|(&x, y)| [x, f64::from(y)])
            .collect(),
    }
}

pub fn timestamp_to_x(timestamp: &DateTime<Local>) -> f64 {
    timestamp.timestamp_millis() as f64 / 1000.0
}

/// Formats an x-axis value as local wall-clock time.
pub fn format_time_axis(x: f64) -> String {
    DateTime::from_timestamp_millis((x * 1000.0).round() as i64)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Sample;
    use chrono::TimeDelta;

    fn history(readings: &[(f32, f32)]) -> History {
        let offsets: Vec<i64> = (0..readings.len() as i64).collect();
        history_at(&offsets, readings)
    }

    fn history_at(offsets: &[i64], readings: &[(f32, f32)]) -> History {
        let start = Local::now();
        let mut history = History::new();
        for (&offset, &(cpu, ram)) in offsets.iter().zip(readings) {
            history.record(Sample::new(start + TimeDelta::seconds(offset), cpu, ram));
        }
        history
    }

    fn names(lines: &[ChartSeries]) -> Vec<&'static str> {
        lines.iter().map(|line| line.series.name()).collect()
    }

    #[test]
    fn cpu_only_draws_one_cpu_line() {
        let lines = chart_series(&history(&[(10.0, 50.0)]), Mode::CpuOnly, ChartSpan::All);
        assert_eq!(names(&lines), vec!["CPU Usage"]);
    }

    #[test]
    fn ram_only_draws_one_ram_line() {
        let lines = chart_series(&history(&[(10.0, 50.0)]), Mode::RamOnly, ChartSpan::All);
        assert_eq!(names(&lines), vec!["RAM Usage"]);
    }

    #[test]
    fn both_draws_two_lines() {
        let lines = chart_series(&history(&[(10.0, 50.0)]), Mode::Both, ChartSpan::All);
        assert_eq!(names(&lines), vec!["CPU Usage", "RAM Usage"]);
    }

    #[test]
    fn points_follow_recording_order() {
        let lines = chart_series(
            &history(&[(10.0, 50.0), (20.0, 55.0), (15.0, 60.0)]),
            Mode::Both,
            ChartSpan::All,
        );

        let cpu = &lines[0].points;
        let ram = &lines[1].points;
        assert_eq!(cpu.len(), 3);
        assert!(cpu.windows(2).all(|w| w[0][0] < w[1][0]));
        assert_eq!(cpu.iter().map(|p| p[1]).collect::<Vec<_>>(), vec![10.0, 20.0, 15.0]);
        assert_eq!(ram.iter().map(|p| p[1]).collect::<Vec<_>>(), vec![50.0, 55.0, 60.0]);
        assert_eq!(
            cpu.iter().map(|p| p[0]).collect::<Vec<_>>(),
            ram.iter().map(|p| p[0]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn building_twice_is_identical() {
        let history = history(&[(10.0, 50.0), (20.0, 55.0)]);
        assert_eq!(
            chart_series(&history, Mode::Both, ChartSpan::All),
            chart_series(&history, Mode::Both, ChartSpan::All)
        );
    }

    #[test]
    fn empty_history_gives_empty_lines() {
        let lines = chart_series(&History::new(), Mode::Both, ChartSpan::LastMinute);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.points.is_empty()));
    }

    #[test]
    fn span_keeps_only_recent_samples() {
        let history = history_at(&[0, 40, 90], &[(10.0, 50.0), (20.0, 55.0), (15.0, 60.0)]);

        let recent = chart_series(&history, Mode::Both, ChartSpan::LastMinute);
        assert_eq!(recent[0].points.iter().map(|p| p[1]).collect::<Vec<_>>(), vec![20.0, 15.0]);
        assert_eq!(recent[1].points.iter().map(|p| p[1]).collect::<Vec<_>>(), vec![55.0, 60.0]);

        let wide = chart_series(&history, Mode::CpuOnly, ChartSpan::LastFiveMinutes);
        assert_eq!(wide[0].points.len(), 3);
    }

    #[test]
    fn axis_labels_are_wall_clock() {
        let timestamp = Local::now();
        let label = format_time_axis(timestamp_to_x(&timestamp));
        assert_eq!(label, timestamp.format("%H:%M:%S").to_string());
    }
}

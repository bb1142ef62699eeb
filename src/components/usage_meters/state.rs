use crate::metrics::History;

/// The newest readings, as shown next to the progress bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterReadings {
    pub cpu_percent: f32,
    pub ram_percent: f32,
}

impl MeterReadings {
    pub fn latest(history: &History) -> Option<Self> {
        history.latest().map(|sample| Self {
            cpu_percent: sample.cpu_percent,
            ram_percent: sample.ram_percent,
        })
    }

    pub fn cpu_label(&self) -> String {
        format!("CPU Usage: {:.1}%", self.cpu_percent)
    }

    pub fn ram_label(&self) -> String {
        format!("RAM Usage: {:.1}%", self.ram_percent)
    }

    /// Progress bar fill in `0.0..=1.0`.
    pub fn cpu_fraction(&self) -> f32 {
        self.cpu_percent / 100.0
    }

    pub fn ram_fraction(&self) -> f32 {
        self.ram_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Sample;
    use chrono::{Local, TimeDelta};

    #[test]
    fn nothing_before_first_sample() {
        assert_eq!(MeterReadings::latest(&History::new()), None);
    }

    #[test]
    fn shows_the_newest_sample() {
        let start = Local::now();
        let mut history = History::new();
        for (i, (cpu, ram)) in [(10.0, 50.0), (20.0, 55.0), (15.0, 60.0)].into_iter().enumerate() {
            history.record(Sample::new(start + TimeDelta::seconds(i as i64), cpu, ram));
        }

        let readings = MeterReadings::latest(&history).unwrap();
        assert_eq!(readings.cpu_label(), "CPU Usage: 15.0%");
        assert_eq!(readings.ram_label(), "RAM Usage: 60.0%");
        assert!((readings.cpu_fraction() - 0.15).abs() < f32::EPSILON);
        assert!((readings.ram_fraction() - 0.60).abs() < f32::EPSILON);
    }
}

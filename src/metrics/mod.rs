mod circular_buffer;
mod history;
mod sampler;
mod scheduler;
mod state;

pub use circular_buffer::CircularBuffer;
pub use history::History;
pub use sampler::{Sampler, SystemSampler};
pub use scheduler::{Phase, Scheduler};
pub use state::{DisplayState, Mode};

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Pause between the end of one render and the start of the next sample.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// How long a CPU reading measures utilization for.
pub const CPU_MEASUREMENT_WINDOW: Duration = Duration::from_millis(1000);

/// One hour of samples at the default interval.
pub const HISTORY_RETENTION: NonZeroUsize = match NonZeroUsize::new(3600) {
    Some(limit) => limit,
    None => panic!("history retention must be non-zero"),
};

/// One timestamped CPU/RAM reading, both in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f32,
    pub ram_percent: f32,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, cpu_percent: f32, ram_percent: f32) -> Self {
        Self {
            timestamp,
            cpu_percent,
            ram_percent,
        }
    }

    /// Takes a CPU and a RAM reading and stamps them with the time the
    /// measurement finished.
    pub fn capture(sampler: &mut impl Sampler) -> Result<Self> {
        let cpu_percent = checked_percent("cpu", sampler.sample_cpu()?)?;
        let ram_percent = checked_percent("ram", sampler.sample_ram()?)?;
        Ok(Self::new(Local::now(), cpu_percent, ram_percent))
    }
}

fn checked_percent(metric: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value.clamp(0.0, 100.0))
    } else {
        Err(Error::InvalidReading { metric, value })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Sampler;
    use crate::error::{Error, Result};
    use std::collections::VecDeque;

    /// Replays canned readings; fails with `Unsupported` once exhausted.
    pub struct ScriptedSampler {
        cpu: VecDeque<Result<f32>>,
        ram: VecDeque<Result<f32>>,
    }

    impl ScriptedSampler {
        pub fn new(readings: &[(f32, f32)]) -> Self {
            Self {
                cpu: readings.iter().map(|&(cpu, _)| Ok(cpu)).collect(),
                ram: readings.iter().map(|&(_, ram)| Ok(ram)).collect(),
            }
        }

        pub fn failing() -> Self {
            Self {
                cpu: VecDeque::from([Err(Error::Unsupported)]),
                ram: VecDeque::new(),
            }
        }
    }

    impl Sampler for ScriptedSampler {
        fn sample_cpu(&mut self) -> Result<f32> {
            self.cpu.pop_front().unwrap_or(Err(Error::Unsupported))
        }

        fn sample_ram(&mut self) -> Result<f32> {
            self.ram.pop_front().unwrap_or(Err(Error::Unsupported))
        }
    }
}

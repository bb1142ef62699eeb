use crate::error::{Error, Result};
use std::thread;
use std::time::Duration;
use sysinfo::System;

/// Source of instantaneous CPU and memory utilization, in percent.
pub trait Sampler: Send {
    /// Blocks for the measurement window and returns global CPU usage.
    fn sample_cpu(&mut self) -> Result<f32>;

    /// Returns the share of physical memory currently in use.
    fn sample_ram(&mut self) -> Result<f32>;
}

/// Reads the host's CPU and memory counters through `sysinfo`.
#[derive(Debug)]
pub struct SystemSampler {
    system: System,
    measurement_window: Duration,
}

impl SystemSampler {
    pub fn new(measurement_window: Duration) -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::Unsupported);
        }

        let mut system = System::new();
        system.refresh_cpu_usage();
        Ok(Self {
            system,
            // sysinfo needs two refreshes at least this far apart
            measurement_window: measurement_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        })
    }

    pub fn measurement_window(&self) -> Duration {
        self.measurement_window
    }
}

impl Sampler for SystemSampler {
    fn sample_cpu(&mut self) -> Result<f32> {
        self.system.refresh_cpu_usage();
        thread::sleep(self.measurement_window);
        self.system.refresh_cpu_usage();
        Ok(self.system.global_cpu_usage())
    }

    fn sample_ram(&mut self) -> Result<f32> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(Error::NoMemoryInfo);
        }
        Ok((self.system.used_memory() as f64 / total as f64 * 100.0) as f32)
    }
}

use super::{CircularBuffer, Sample};
use chrono::{DateTime, Local};
use std::num::NonZeroUsize;

/// Chronological record of samples, stored as three aligned series.
#[derive(Default, Debug, Clone)]
pub struct History {
    timestamps: CircularBuffer<DateTime<Local>>,
    cpu: CircularBuffer<f32>,
    ram: CircularBuffer<f32>,
}

impl History {
    /// Creates a history that never drops samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history holding at most `limit` samples, oldest dropped first.
    pub fn with_retention(limit: NonZeroUsize) -> Self {
        Self {
            timestamps: CircularBuffer::bounded(limit),
            cpu: CircularBuffer::bounded(limit),
            ram: CircularBuffer::bounded(limit),
        }
    }

    pub fn retention(&self) -> Option<NonZeroUsize> {
        self.timestamps.capacity()
    }

    pub fn record(&mut self, sample: Sample) {
        self.timestamps.push(sample.timestamp);
        self.cpu.push(sample.cpu_percent);
        self.ram.push(sample.ram_percent);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = &DateTime<Local>> + '_ {
        self.timestamps.iter()
    }

    pub fn cpu(&self) -> impl Iterator<Item = f32> + '_ {
        self.cpu.iter().copied()
    }

    pub fn ram(&self) -> impl Iterator<Item = f32> + '_ {
        self.ram.iter().copied()
    }

    pub fn latest(&self) -> Option<Sample> {
        Some(Sample {
            timestamp: *self.timestamps.last()?,
            cpu_percent: *self.cpu.last()?,
            ram_percent: *self.ram.last()?,
        })
    }
}

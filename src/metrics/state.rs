use super::{History, Sample, HISTORY_RETENTION};
use crate::error::{Error, Result};
use log::warn;

/// Which series the chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    CpuOnly,
    RamOnly,
    #[default]
    Both,
}

impl Mode {
    pub fn from_visibility(show_cpu: bool, show_ram: bool) -> Option<Self> {
        match (show_cpu, show_ram) {
            (true, false) => Some(Self::CpuOnly),
            (false, true) => Some(Self::RamOnly),
            (true, true) => Some(Self::Both),
            (false, false) => None,
        }
    }

    pub fn show_cpu(self) -> bool {
        matches!(self, Self::CpuOnly | Self::Both)
    }

    pub fn show_ram(self) -> bool {
        matches!(self, Self::RamOnly | Self::Both)
    }
}

/// Everything the view reads: the sample history and the selected mode.
/// Lives for one run only; a new launch starts empty and in [`Mode::Both`].
#[derive(Debug)]
pub struct DisplayState {
    history: History,
    mode: Mode,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(History::with_retention(HISTORY_RETENTION))
    }
}

impl DisplayState {
    pub fn new(history: History) -> Self {
        Self {
            history,
            mode: Mode::default(),
        }
    }

    pub fn record(&mut self, sample: Sample) {
        self.history.record(sample);
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn latest(&self) -> Option<Sample> {
        self.history.latest()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Overwrites the visibility flags. Hiding both series is rejected and
    /// leaves the current mode in place.
    pub fn set_visibility(&mut self, show_cpu: bool, show_ram: bool) -> Result<()> {
        let Some(mode) = Mode::from_visibility(show_cpu, show_ram) else {
            warn!("ignoring request to hide both series");
            return Err(Error::NothingVisible);
        };
        self.mode = mode;
        Ok(())
    }
}

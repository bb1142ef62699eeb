use super::{Sample, Sampler};
use crate::error::{Error, Result};
use egui::mutex::RwLock;
use log::{debug, error, info};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Where the sampling loop is within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sampling,
    /// A sample was handed to the UI and has not been drawn yet.
    Rendering,
    Waiting,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Idle | Phase::Waiting => Phase::Sampling,
            Phase::Sampling => Phase::Rendering,
            Phase::Rendering => Phase::Waiting,
        }
    }
}

/// UI-side handle to the sampling thread.
///
/// The thread takes one sample, hands it over, waits for [`Scheduler::rendered`],
/// sleeps for the interval and starts again. It exits after a failed sample or
/// once this handle is dropped.
pub struct Scheduler {
    samples: Receiver<Result<Sample>>,
    rendered: Sender<()>,
    phase: Arc<RwLock<Phase>>,
    interval: Duration,
}

impl Scheduler {
    /// Starts the sampling thread. `notify` is called from that thread each
    /// time a result is ready, typically to request a repaint.
    pub fn spawn<S, F>(sampler: S, interval: Duration, notify: F) -> Result<Self>
    where
        S: Sampler + 'static,
        F: Fn() + Send + 'static,
    {
        let (sample_tx, samples) = mpsc::channel();
        let (rendered, rendered_rx) = mpsc::channel();
        let phase = Arc::new(RwLock::new(Phase::Idle));

        let worker = Worker {
            sampler,
            interval,
            notify,
            samples: sample_tx,
            rendered: rendered_rx,
            phase: Arc::clone(&phase),
        };
        thread::Builder::new()
            .name("sampler".to_owned())
            .spawn(move || worker.run())?;
        info!("Started sampler thread, interval {:?}", interval);

        Ok(Self {
            samples,
            rendered,
            phase,
            interval,
        })
    }

    /// Returns the pending result, if any, without blocking.
    pub fn poll(&self) -> Option<Result<Sample>> {
        match self.samples.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(Error::WorkerStopped)),
        }
    }

    /// Tells the thread the last sample has been recorded and drawn.
    pub fn rendered(&self) {
        // a stopped worker has nothing left to wake up
        let _ = self.rendered.send(());
    }

    pub fn phase(&self) -> Phase {
        *self.phase.read()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

struct Worker<S, F> {
    sampler: S,
    interval: Duration,
    notify: F,
    samples: Sender<Result<Sample>>,
    rendered: Receiver<()>,
    phase: Arc<RwLock<Phase>>,
}

impl<S: Sampler, F: Fn()> Worker<S, F> {
    fn advance(&self) {
        let mut phase = self.phase.write();
        *phase = phase.next();
    }

    fn run(mut self) {
        loop {
            self.advance();
            let result = Sample::capture(&mut self.sampler);
            match &result {
                Ok(sample) => debug!(
                    "Sampled cpu={:.1}% ram={:.1}%",
                    sample.cpu_percent, sample.ram_percent
                ),
                Err(err) => error!("Sampling failed: {err}"),
            }
            let failed = result.is_err();

            self.advance();
            if self.samples.send(result).is_err() {
                break;
            }
            (self.notify)();
            if failed || self.rendered.recv().is_err() {
                break;
            }

            self.advance();
            thread::sleep(self.interval);
        }
        info!("Sampler thread exiting");
    }
}

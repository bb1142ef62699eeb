#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("system metrics are not supported on this platform")]
    Unsupported,

    #[error("total physical memory reported as zero")]
    NoMemoryInfo,

    #[error("invalid {metric} reading: {value}")]
    InvalidReading { metric: &'static str, value: f32 },

    #[error("at least one series must stay visible")]
    NothingVisible,

    #[error("failed to spawn sampler thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("sampler thread stopped")]
    WorkerStopped,
}

pub type Result<T> = std::result::Result<T, Error>;

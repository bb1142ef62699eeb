#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod error;
pub mod metrics;
pub use app::ResourceMonitorApp;
pub use error::{Error, Result};

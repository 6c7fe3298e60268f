//! ktop: a terminal dashboard for CPU, memory, network, GPU and process usage.

pub mod app;
pub mod bench;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod logging;
pub mod persist;
pub mod profile;
pub mod render;
pub mod sampler;
pub mod scheduler;
pub mod theme;

pub use error::{Error, Result};

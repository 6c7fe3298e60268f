//! `env_logger` setup. The TUI owns the terminal, so it logs to a file.

use env_logger::{Builder, Env, Target};
use std::{fs, fs::OpenOptions, path::PathBuf};

pub const LOG_ENV: &str = "KTOP_LOG";
const DEFAULT_LEVEL: &str = "warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// `<cache dir>/ktop/ktop.log`, appended.
    File,
    Stderr,
}

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ktop").join("ktop.log"))
}

/// Installs the global logger. Logging stays off if the log file cannot be opened.
pub fn init(sink: Sink) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_LEVEL));
    match sink {
        Sink::Stderr => {
            builder.target(Target::Stderr);
        }
        Sink::File => {
            let Some(path) = log_path() else {
                return;
            };
            if let Some(dir) = path.parent() {
                if fs::create_dir_all(dir).is_err() {
                    return;
                }
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
                return;
            };
            builder.target(Target::Pipe(Box::new(file)));
        }
    }
    let _ = builder.try_init();
}

//! Error type shared by the sampler, theme engine, persistence and frontend.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A single process disappeared or became unreadable mid-scan.
    #[error("process {pid} vanished while sampling")]
    TransientSample { pid: u32 },

    /// The GPU telemetry facility is absent or failing.
    #[error("gpu telemetry unavailable: {0}")]
    TelemetryUnavailable(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("cannot access theme file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed theme file {}: {source}", path.display())]
    PersistenceFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record in the built-in palette table failed validation.
    #[error("invalid theme '{theme}': {reason}")]
    InvalidCatalog { theme: String, reason: String },

    #[error("process introspection is not available on this system")]
    NoProcessAccess,

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_error_names_the_file() {
        let err = Error::Persistence {
            path: PathBuf::from("/tmp/ktop/config.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/ktop/config.json"), "{display}");
        assert!(display.contains("denied"), "{display}");
    }

    #[test]
    fn catalog_error_names_the_theme() {
        let err = Error::InvalidCatalog {
            theme: "Broken".to_string(),
            reason: "needs at least 2 stops".to_string(),
        };
        assert_eq!(err.to_string(), "invalid theme 'Broken': needs at least 2 stops");
    }
}

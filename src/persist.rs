//! Persisted theme selection.

use crate::{
    error::{Error, Result},
    theme::{Catalog, DEFAULT_THEME},
};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    theme: Option<String>,
}

pub trait ThemeStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, theme: &str) -> Result<()>;
}

/// `{"theme": "<name>"}` in a JSON file.
#[derive(Clone, Debug)]
pub struct JsonThemeStore {
    path: PathBuf,
}

impl JsonThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/ktop/config.json`, e.g. `~/.config/ktop/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ktop").join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for JsonThemeStore {
    fn load(&self) -> Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let state: PersistedState =
            serde_json::from_str(&contents).map_err(|source| Error::PersistenceFormat {
                path: self.path.clone(),
                source,
            })?;
        Ok(state.theme)
    }

    fn save(&self, theme: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let state = PersistedState {
            theme: Some(theme.to_string()),
        };
        let json = serde_json::to_string_pretty(&state).map_err(|source| {
            Error::PersistenceFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json + "\n").map_err(|e| self.io_error(e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600));
        }
        Ok(())
    }
}

/// Wraps a store so failures degrade to in-memory operation with a single warning.
pub struct Persistence {
    store: Option<Box<dyn ThemeStore>>,
    saved: Option<String>,
}

impl Persistence {
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        Self {
            store: Some(store),
            saved: None,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            store: None,
            saved: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.store.is_none()
    }

    pub fn load(&mut self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.load() {
            Ok(theme) => {
                self.saved.clone_from(&theme);
                theme
            }
            Err(err @ Error::PersistenceFormat { .. }) => {
                log::warn!("{err}; ignoring saved theme");
                None
            }
            Err(err) => {
                self.degrade(&err);
                None
            }
        }
    }

    /// Writes `theme` unless it is already what was last saved.
    pub fn save(&mut self, theme: &str) {
        if self.saved.as_deref() == Some(theme) {
            return;
        }
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match store.save(theme) {
            Ok(()) => self.saved = Some(theme.to_string()),
            Err(err) => self.degrade(&err),
        }
    }

    fn degrade(&mut self, err: &Error) {
        log::warn!("{err}; theme selection will not be saved this session");
        self.store = None;
    }
}

/// Saved theme index, or the default when missing, malformed or unknown.
pub fn load_persisted(persistence: &mut Persistence, catalog: &Catalog) -> usize {
    match persistence.load() {
        Some(name) => catalog.index_of(&name).unwrap_or_else(|err| {
            log::warn!("{err} in saved settings; using {DEFAULT_THEME}");
            catalog.default_index()
        }),
        None => catalog.default_index(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartupTheme {
    pub index: usize,
    /// What exit persistence falls back to; a `--theme` override is not written back.
    pub persisted: usize,
    /// Shown in the status bar when the CLI override was rejected.
    pub notice: Option<String>,
}

/// A valid `--theme` wins; otherwise the persisted or default theme.
pub fn resolve_startup_theme(
    cli_theme: Option<&str>,
    persistence: &mut Persistence,
    catalog: &Catalog,
) -> StartupTheme {
    let persisted = load_persisted(persistence, catalog);
    let Some(name) = cli_theme else {
        return StartupTheme {
            index: persisted,
            persisted,
            notice: None,
        };
    };
    match catalog.index_of(name) {
        Ok(index) => StartupTheme {
            index,
            persisted,
            notice: None,
        },
        Err(err) => {
            let notice = format!("{err}; using {}", catalog.get(persisted).name);
            log::warn!("{notice}");
            StartupTheme {
                index: persisted,
                persisted,
                notice: Some(notice),
            }
        }
    }
}

//! Application state and command handling.

use crate::{
    error::Result,
    history::HistoryStore,
    input::Command,
    persist::Persistence,
    render::View,
    sampler::Snapshot,
    theme::{Catalog, Theme},
};
use std::time::Duration;

pub const REFRESH_STEP: Duration = Duration::from_millis(100);
pub const MIN_REFRESH: Duration = Duration::from_millis(100);
pub const MAX_REFRESH: Duration = Duration::from_secs(10);

/// Themes per row in the picker grid.
pub const PICKER_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    PickerOpen,
    Terminated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub refresh: Duration,
    /// Index of the active theme in the catalog.
    pub theme: usize,
    pub mode: Mode,
    /// Hovered picker entry; meaningful only while the picker is open.
    pub cursor: usize,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(refresh: Duration, theme: usize) -> Self {
        Self {
            refresh,
            theme,
            mode: Mode::Idle,
            cursor: theme,
            notice: None,
        }
    }
}

pub struct App {
    pub state: AppState,
    catalog: Catalog,
    history: HistoryStore,
    snapshot: Snapshot,
    persistence: Persistence,
    /// The theme written on exit: the last one picked or loaded, never a CLI override.
    saved_theme: usize,
}

impl App {
    pub fn new(
        state: AppState,
        catalog: Catalog,
        history: HistoryStore,
        persistence: Persistence,
    ) -> Self {
        let saved_theme = state.theme;
        Self {
            state,
            catalog,
            history,
            snapshot: Snapshot::default(),
            persistence,
            saved_theme,
        }
    }

    /// Sets what exit persistence writes when the active theme came from elsewhere.
    pub fn with_saved_theme(mut self, index: usize) -> Self {
        if index < self.catalog.len() {
            self.saved_theme = index;
        }
        self
    }

    pub fn is_terminated(&self) -> bool {
        self.state.mode == Mode::Terminated
    }

    pub fn theme(&self) -> &Theme {
        self.catalog.get(self.state.theme)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Replaces the current snapshot and appends it to history.
    pub fn ingest(&mut self, snapshot: Snapshot) {
        self.history.record(&snapshot);
        self.snapshot = snapshot;
    }

    pub fn view(&self) -> View<'_> {
        View {
            snapshot: &self.snapshot,
            history: &self.history,
            theme: self.theme(),
            catalog: &self.catalog,
            state: &self.state,
        }
    }

    /// Applies one command. Returns true when the screen should be redrawn now.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::None => false,
            Command::Quit => {
                self.shutdown();
                false
            }
            Command::Redraw => true,
            Command::OpenThemePicker => {
                self.state.mode = Mode::PickerOpen;
                self.state.cursor = self.state.theme;
                true
            }
            Command::CloseThemePicker => {
                self.state.mode = Mode::Idle;
                true
            }
            Command::Select => {
                let name = self.catalog.get(self.state.cursor).name;
                if let Err(err) = self.select_theme(name) {
                    log::warn!("{err}");
                }
                self.state.mode = Mode::Idle;
                true
            }
            Command::NavigateUp
            | Command::NavigateDown
            | Command::NavigateLeft
            | Command::NavigateRight => {
                self.state.cursor = move_cursor(self.state.cursor, command, self.catalog.len());
                true
            }
            Command::FasterRefresh => {
                let floor = MIN_REFRESH.min(self.state.refresh);
                self.state.refresh = self.state.refresh.saturating_sub(REFRESH_STEP).max(floor);
                true
            }
            Command::SlowerRefresh => {
                let ceiling = MAX_REFRESH.max(self.state.refresh);
                self.state.refresh = (self.state.refresh + REFRESH_STEP).min(ceiling);
                true
            }
        }
    }

    /// Activates `name` and persists the choice.
    pub fn select_theme(&mut self, name: &str) -> Result<()> {
        self.catalog.select(&mut self.state, name)?;
        self.saved_theme = self.state.theme;
        self.persistence.save(self.catalog.get(self.saved_theme).name);
        Ok(())
    }

    pub fn shutdown(&mut self) {
        self.state.mode = Mode::Terminated;
        let name = self.catalog.get(self.saved_theme).name;
        self.persistence.save(name);
    }
}

fn move_cursor(cursor: usize, command: Command, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    match command {
        Command::NavigateUp if cursor >= PICKER_COLUMNS => cursor - PICKER_COLUMNS,
        Command::NavigateDown if cursor + PICKER_COLUMNS < len => cursor + PICKER_COLUMNS,
        Command::NavigateLeft if cursor % PICKER_COLUMNS > 0 => cursor - 1,
        Command::NavigateRight
            if cursor % PICKER_COLUMNS < PICKER_COLUMNS - 1 && cursor + 1 < len =>
        {
            cursor + 1
        }
        _ => cursor,
    }
}

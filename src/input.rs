//! Keyboard and terminal events mapped to commands.

use crate::app::Mode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{io, time::Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    OpenThemePicker,
    CloseThemePicker,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    FasterRefresh,
    SlowerRefresh,
    Redraw,
    None,
}

pub trait EventSource {
    /// Waits up to `timeout` and returns at most one event.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

pub fn poll(
    source: &mut impl EventSource,
    timeout: Duration,
    mode: Mode,
) -> io::Result<Command> {
    Ok(source
        .poll_event(timeout)?
        .map_or(Command::None, |event| route(&event, mode)))
}

pub fn route(event: &Event, mode: Mode) -> Command {
    match event {
        Event::Key(key) => map_key(key, mode),
        Event::Resize(..) => Command::Redraw,
        _ => Command::None,
    }
}

pub fn map_key(key: &KeyEvent, mode: Mode) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }
    let picker = mode == Mode::PickerOpen;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Esc if picker => Command::CloseThemePicker,
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('t') | KeyCode::Char('T') if picker => Command::CloseThemePicker,
        KeyCode::Char('t') | KeyCode::Char('T') => Command::OpenThemePicker,
        KeyCode::Up if picker => Command::NavigateUp,
        KeyCode::Down if picker => Command::NavigateDown,
        KeyCode::Left if picker => Command::NavigateLeft,
        KeyCode::Right if picker => Command::NavigateRight,
        KeyCode::Enter if picker => Command::Select,
        KeyCode::Char('+') | KeyCode::Char('=') if !picker => Command::FasterRefresh,
        KeyCode::Char('-') | KeyCode::Char('_') if !picker => Command::SlowerRefresh,
        _ => Command::None,
    }
}

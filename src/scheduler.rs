//! The cooperative loop: fast input polling, periodic sampling, redraw on demand.

use crate::{
    app::App,
    error::{Error, Result},
    input::{self, EventSource},
    profile::Profile,
    render::{self, View},
    sampler::MetricSource,
};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Where frames go.
pub trait Frontend {
    fn draw(&mut self, view: &View<'_>) -> Result<()>;
}

impl<B: Backend> Frontend for Terminal<B> {
    fn draw(&mut self, view: &View<'_>) -> Result<()> {
        Terminal::draw(self, |frame| render::draw(frame, view))
            .map(|_| ())
            .map_err(|err| Error::Render(err.to_string()))
    }
}

pub struct Scheduler<S, E, C> {
    source: S,
    events: E,
    clock: C,
    tick: Duration,
    profile: Profile,
}

impl<S: MetricSource, E: EventSource, C: Clock> Scheduler<S, E, C> {
    pub fn new(source: S, events: E, clock: C, tick: Duration) -> Self {
        Self {
            source,
            events,
            clock,
            tick,
            profile: Profile::off(),
        }
    }

    /// Runs until a command terminates the app.
    pub fn run(&mut self, app: &mut App, frontend: &mut impl Frontend) -> Result<()> {
        let mut last_sample = self.sample(app);
        frontend.draw(&app.view())?;

        loop {
            let command = input::poll(&mut self.events, self.tick, app.state.mode)?;
            let changed = app.handle(command);
            if app.is_terminated() {
                log::info!("quit requested");
                return Ok(());
            }

            let due = self.clock.now().saturating_duration_since(last_sample) >= app.state.refresh;
            if due {
                last_sample = self.sample(app);
            }
            if due || changed {
                frontend.draw(&app.view())?;
            }
        }
    }

    fn sample(&mut self, app: &mut App) -> Instant {
        let snapshot = self.source.sample(&mut self.profile);
        app.ingest(snapshot);
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{AppState, Mode},
        history::HistoryStore,
        persist::{Persistence, tests::MemoryStore},
        sampler::Snapshot,
        theme::Catalog,
    };
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        io,
        rc::Rc,
    };

    #[derive(Clone)]
    struct FakeClock {
        base: Instant,
        offset: Rc<Cell<Duration>>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            self.base + self.offset.get()
        }
    }

    /// Each poll consumes the full timeout. `None` entries are idle ticks; `q` once exhausted.
    struct Script {
        events: VecDeque<Option<Event>>,
        clock: FakeClock,
    }

    impl Script {
        fn new(clock: &FakeClock, events: impl IntoIterator<Item = Option<Event>>) -> Self {
            Self {
                events: events.into_iter().collect(),
                clock: clock.clone(),
            }
        }
    }

    impl EventSource for Script {
        fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
            self.clock.advance(timeout);
            Ok(self
                .events
                .pop_front()
                .unwrap_or_else(|| Some(key(KeyCode::Char('q')))))
        }
    }

    #[derive(Default)]
    struct Counting {
        samples: Rc<Cell<u32>>,
    }

    impl MetricSource for Counting {
        fn sample(&mut self, _profile: &mut Profile) -> Snapshot {
            self.samples.set(self.samples.get() + 1);
            let mut snapshot = Snapshot::default();
            snapshot.cpu.percent = f64::from(self.samples.get());
            snapshot
        }
    }

    #[derive(Default)]
    struct Frames(RefCell<Vec<(Mode, usize)>>);

    impl Frontend for Frames {
        fn draw(&mut self, view: &View<'_>) -> Result<()> {
            self.0.borrow_mut().push((view.state.mode, view.state.cursor));
            Ok(())
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app(refresh: Duration, store: &MemoryStore) -> App {
        let catalog = Catalog::builtin().unwrap();
        let state = AppState::new(refresh, catalog.default_index());
        App::new(
            state,
            catalog,
            HistoryStore::new(60),
            Persistence::new(Box::new(store.clone())),
        )
    }

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn t_then_q_terminates() {
        let clock = FakeClock::new();
        let store = MemoryStore::default();
        let mut app = app(Duration::from_secs(1), &store);
        let events = Script::new(
            &clock,
            [Some(key(KeyCode::Char('t'))), Some(key(KeyCode::Char('q')))],
        );
        let mut frames = Frames::default();
        Scheduler::new(Counting::default(), events, clock, TICK)
            .run(&mut app, &mut frames)
            .unwrap();

        assert!(app.is_terminated());
        let modes: Vec<_> = frames.0.borrow().iter().map(|(m, _)| *m).collect();
        assert_eq!(modes, vec![Mode::Idle, Mode::PickerOpen]);
        assert_eq!(store.slot.borrow().as_deref(), Some("Default"));
    }

    #[test]
    fn escape_closes_then_quits() {
        let clock = FakeClock::new();
        let store = MemoryStore::default();
        let mut app = app(Duration::from_secs(1), &store);
        let events = Script::new(
            &clock,
            [
                Some(key(KeyCode::Char('t'))),
                Some(key(KeyCode::Esc)),
                Some(key(KeyCode::Esc)),
                Some(key(KeyCode::Char('t'))),
            ],
        );
        let mut frames = Frames::default();
        let mut scheduler = Scheduler::new(Counting::default(), events, clock, TICK);
        scheduler.run(&mut app, &mut frames).unwrap();

        assert!(app.is_terminated());
        let modes: Vec<_> = frames.0.borrow().iter().map(|(m, _)| *m).collect();
        assert_eq!(modes, vec![Mode::Idle, Mode::PickerOpen, Mode::Idle]);
        // The trailing `t` was never read.
        assert_eq!(scheduler.events.events.len(), 1);
    }

    #[test]
    fn samples_at_refresh_cadence_not_tick_cadence() {
        let clock = FakeClock::new();
        let store = MemoryStore::default();
        let mut app = app(Duration::from_secs(1), &store);
        let events = Script::new(&clock, std::iter::repeat_n(None, 40));
        let source = Counting::default();
        let samples = Rc::clone(&source.samples);
        let mut frames = Frames::default();
        Scheduler::new(source, events, clock, TICK)
            .run(&mut app, &mut frames)
            .unwrap();

        // Startup plus one per elapsed second over 40 idle 50ms polls.
        assert_eq!(samples.get(), 3);
        assert_eq!(frames.0.borrow().len(), 3);
        assert_eq!(app.history().window(crate::history::Channel::Cpu), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn commands_redraw_without_sampling() {
        let clock = FakeClock::new();
        let store = MemoryStore::default();
        let mut app = app(Duration::from_secs(10), &store);
        let events = Script::new(
            &clock,
            [
                Some(key(KeyCode::Char('t'))),
                Some(key(KeyCode::Down)),
                Some(key(KeyCode::Right)),
                Some(key(KeyCode::Enter)),
            ],
        );
        let source = Counting::default();
        let samples = Rc::clone(&source.samples);
        let mut frames = Frames::default();
        Scheduler::new(source, events, clock, TICK)
            .run(&mut app, &mut frames)
            .unwrap();

        assert_eq!(samples.get(), 1);
        let cursors: Vec<_> = frames.0.borrow().iter().map(|(_, c)| *c).collect();
        assert_eq!(cursors, vec![0, 0, 3, 4, 4]);
        assert_eq!(app.state.theme, 4);
        let expected = app.catalog().get(4).name;
        assert_eq!(store.slot.borrow().as_deref(), Some(expected));
    }

    #[test]
    fn draws_into_a_terminal() {
        let clock = FakeClock::new();
        let store = MemoryStore::default();
        let mut app = app(Duration::from_secs(1), &store);
        let events = Script::new(&clock, [Some(key(KeyCode::Char('t')))]);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        Scheduler::new(Counting::default(), events, clock, TICK)
            .run(&mut app, &mut terminal)
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Theme"), "picker overlay not drawn");
    }
}

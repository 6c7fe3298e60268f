use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ktop::{
    app::{App, AppState},
    bench,
    config::{Cli, Settings},
    history::HistoryStore,
    input::CrosstermEvents,
    logging::{self, Sink},
    persist::{JsonThemeStore, Persistence, resolve_startup_theme},
    sampler::{Sampler, gpu},
    scheduler::{Scheduler, SystemClock},
    theme::Catalog,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = Settings::from_cli(Cli::parse());
    logging::init(if settings.benchmark.is_some() {
        Sink::Stderr
    } else {
        Sink::File
    });

    let catalog = Catalog::builtin()?;
    let mut persistence = match settings
        .config_path
        .clone()
        .or_else(JsonThemeStore::default_path)
    {
        Some(path) => {
            let store = JsonThemeStore::new(path);
            log::debug!("theme settings at {}", store.path().display());
            Persistence::new(Box::new(store))
        }
        None => {
            log::warn!("no config directory; theme selection will not be saved");
            Persistence::in_memory()
        }
    };
    let startup = resolve_startup_theme(settings.theme.as_deref(), &mut persistence, &catalog);
    if let Some(notice) = &startup.notice {
        eprintln!("ktop: {notice}");
    }
    let mut state = AppState::new(settings.refresh, startup.index);
    state.notice = startup.notice;

    let mut sampler = Sampler::new(gpu::detect(settings.gpu))?;
    let mut app = App::new(
        state,
        catalog,
        HistoryStore::new(settings.history),
        persistence,
    )
    .with_saved_theme(startup.persisted);

    if let Some(cycles) = settings.benchmark {
        let profile = bench::run(&mut sampler, &mut app, cycles)?;
        print!("{}", profile.report());
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = Scheduler::new(sampler, CrosstermEvents, SystemClock, settings.tick)
        .run(&mut app, &mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if !app.is_terminated() {
        app.shutdown();
    }
    res?;
    Ok(())
}

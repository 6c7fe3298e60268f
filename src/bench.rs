//! Headless timing run behind `--benchmark`.

use crate::{
    app::App,
    error::{Error, Result},
    profile::Profile,
    render,
    sampler::MetricSource,
};
use ratatui::{Terminal, backend::TestBackend};

pub const BENCH_WIDTH: u16 = 160;
pub const BENCH_HEIGHT: u16 = 48;

/// Samples, records and renders `cycles` times off-screen.
pub fn run(source: &mut impl MetricSource, app: &mut App, cycles: u32) -> Result<Profile> {
    let mut terminal = Terminal::new(TestBackend::new(BENCH_WIDTH, BENCH_HEIGHT))
        .map_err(|err| Error::Render(err.to_string()))?;
    let mut profile = Profile::recording();

    for cycle in 0..cycles {
        let snapshot = source.sample(&mut profile);
        profile.time("history", || app.ingest(snapshot));
        let view = app.view();
        profile
            .time("render", || terminal.draw(|frame| render::draw(frame, &view)).map(|_| ()))
            .map_err(|err| Error::Render(err.to_string()))?;
        log::debug!("benchmark cycle {} of {cycles}", cycle + 1);
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::AppState,
        history::HistoryStore,
        persist::Persistence,
        sampler::Snapshot,
        theme::Catalog,
    };
    use std::time::Duration;

    struct Fixed;

    impl MetricSource for Fixed {
        fn sample(&mut self, profile: &mut Profile) -> Snapshot {
            profile.time("cpu", Snapshot::default)
        }
    }

    #[test]
    fn reports_every_stage_per_cycle() {
        let catalog = Catalog::builtin().unwrap();
        let state = AppState::new(Duration::from_secs(1), catalog.default_index());
        let mut app = App::new(state, catalog, HistoryStore::new(10), Persistence::in_memory());

        let profile = run(&mut Fixed, &mut app, 5).unwrap();
        for op in ["cpu", "history", "render"] {
            assert_eq!(profile.get(op).map(|s| s.count), Some(5), "{op}");
        }
        assert_eq!(app.history().len(crate::history::Channel::Cpu), 5);
    }
}

//! Turns the latest snapshot, history and theme into a frame.

mod panels;
mod picker;
pub mod widgets;

use crate::{
    app::{AppState, Mode},
    history::HistoryStore,
    sampler::Snapshot,
    theme::{Catalog, Theme},
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Everything a frame is drawn from.
pub struct View<'a> {
    pub snapshot: &'a Snapshot,
    pub history: &'a HistoryStore,
    pub theme: &'a Theme,
    pub catalog: &'a Catalog,
    pub state: &'a AppState,
}

pub fn draw(frame: &mut Frame, view: &View<'_>) {
    let [body, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
    if view.state.mode == Mode::PickerOpen {
        picker::draw(frame, body, view);
    } else {
        dashboard(frame, body, view);
    }
    status_bar(frame, status, view);
}

fn dashboard(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let (gpu_area, rest) = if view.snapshot.gpus.is_empty() {
        (None, area)
    } else {
        let [gpu, rest] = Layout::vertical([Constraint::Fill(1), Constraint::Fill(2)]).areas(area);
        (Some(gpu), rest)
    };
    if let Some(gpu) = gpu_area {
        panels::gpu_row(frame, gpu, view);
    }

    let [middle, bottom] = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(rest);
    let [net, cpu, mem] = Layout::horizontal([Constraint::Fill(1); 3]).areas(middle);
    panels::network_panel(frame, net, view);
    panels::cpu_panel(frame, cpu, view);
    panels::memory_panel(frame, mem, view);

    let [mem_procs, cpu_procs] = Layout::horizontal([Constraint::Fill(1); 2]).areas(bottom);
    panels::memory_table(frame, mem_procs, view);
    panels::cpu_table(frame, cpu_procs, view);
}

fn status_bar(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let key = Style::new().fg(view.theme.accents.cpu.into());
    let dim = Style::new().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(" q/ESC", key),
        Span::styled(" quit  ", dim),
        Span::styled("t", key),
        Span::styled(" theme  ", dim),
        Span::styled("+/-", key),
        Span::styled(" refresh ", dim),
        Span::raw(format!(
            "│ {} │ {:.1}s ",
            view.theme.name,
            view.state.refresh.as_secs_f64()
        )),
    ];
    if let Some(notice) = &view.state.notice {
        spans.push(Span::styled(
            format!("│ {notice}"),
            Style::new().fg(view.theme.thresholds.critical.into()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Full-screen theme picker overlay.

use super::{View, widgets::gradient_bar};
use crate::{app::PICKER_COLUMNS, format::trim_text, theme::Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

const SWATCH: &str = "■";
const PREVIEW_LEVEL: f64 = 0.65;

fn swatches(theme: &Theme) -> Vec<Span<'static>> {
    let a = theme.accents;
    [a.gpu, a.cpu, a.mem, a.net, a.proc_cpu, a.proc_mem]
        .into_iter()
        .map(|c| Span::styled(SWATCH, Style::new().fg(c.into())))
        .collect()
}

/// First grid row to show so that the cursor row stays visible.
fn first_visible_row(cursor: usize, visible_rows: usize) -> usize {
    (cursor / PICKER_COLUMNS).saturating_sub(visible_rows.saturating_sub(1))
}

pub fn draw(frame: &mut Frame, area: Rect, view: &View<'_>) {
    frame.render_widget(Clear, area);
    let [grid, preview] =
        Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(area);
    draw_grid(frame, grid, view);
    if let Some(hovered) = view.catalog.themes().get(view.state.cursor) {
        draw_preview(frame, preview, hovered);
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let accent = view.theme.accents.cpu;
    let block = Block::bordered()
        .title(format!(" Themes ({}) ", view.catalog.len()))
        .title_bottom(" ←↑↓→ move  Enter apply  Esc/t close ")
        .border_style(Style::new().fg(accent.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = usize::from(inner.width) / PICKER_COLUMNS;
    // marker, gap, name, gap, six swatches, gap
    let name_width = cell_width.saturating_sub(10);
    let visible_rows = usize::from(inner.height);
    let first = first_visible_row(view.state.cursor, visible_rows);

    let themes = view.catalog.themes();
    let lines: Vec<Line> = themes
        .chunks(PICKER_COLUMNS)
        .enumerate()
        .skip(first)
        .take(visible_rows)
        .map(|(row, chunk)| {
            let mut spans = Vec::new();
            for (col, theme) in chunk.iter().enumerate() {
                let index = row * PICKER_COLUMNS + col;
                let marker = if index == view.state.theme { "*" } else { " " };
                let mut style = Style::new();
                if index == view.state.cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                let name = trim_text(theme.name, name_width.saturating_sub(2));
                spans.push(Span::styled(
                    format!("{marker} {name:<w$}", w = name_width),
                    style,
                ));
                spans.push(Span::raw(" "));
                spans.extend(swatches(theme));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_preview(frame: &mut Frame, area: Rect, theme: &Theme) {
    let border = theme.accents.cpu;
    let block = Block::bordered()
        .title(format!(" Preview: {} ", theme.name))
        .border_style(Style::new().fg(border.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let a = theme.accents;
    let labeled = [
        ("GPU", a.gpu),
        ("CPU", a.cpu),
        ("Memory", a.mem),
        ("Network", a.net),
        ("Proc CPU", a.proc_cpu),
        ("Proc Mem", a.proc_mem),
    ];
    let mut lines: Vec<Line> = labeled
        .into_iter()
        .map(|(label, color)| {
            Line::from(vec![
                Span::styled(format!("{SWATCH}{SWATCH} "), Style::new().fg(color.into())),
                Span::raw(label),
            ])
        })
        .collect();
    lines.push(Line::raw(""));

    let bar_width = usize::from(inner.width).saturating_sub(5);
    let mut bar = gradient_bar(PREVIEW_LEVEL, bar_width, theme);
    bar.push(Span::raw(format!(" {:.0}%", PREVIEW_LEVEL * 100.0)));
    lines.push(Line::from(bar));
    lines.push(Line::raw(""));

    let t = theme.thresholds;
    lines.push(Line::from(vec![
        Span::styled("normal ", Style::new().fg(t.normal.into())),
        Span::styled("warning ", Style::new().fg(t.warning.into())),
        Span::styled("critical", Style::new().fg(t.critical.into())),
    ]));
    lines.push(Line::styled(
        format!("{} gradient stops", theme.stops.len()),
        Style::new().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_follows_the_cursor() {
        assert_eq!(first_visible_row(0, 5), 0);
        assert_eq!(first_visible_row(14, 5), 0);
        assert_eq!(first_visible_row(15, 5), 1);
        assert_eq!(first_visible_row(49, 5), 12);
        assert_eq!(first_visible_row(49, 0), 16);
    }
}

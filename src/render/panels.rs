//! The dashboard blocks.

use super::{
    View,
    widgets::{fraction, gradient_bar, net_scale, sparkline},
};
use crate::{
    format::{fmt_bytes, fmt_speed, gib, short_gpu_name, trim_text},
    history::Channel,
    sampler::{GpuReading, ProcessReading},
    theme::{Rgb, Theme},
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

const LABEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 8;

fn accent_block(title: String, accent: Rgb) -> Block<'static> {
    Block::bordered()
        .title(Span::styled(
            title,
            Style::new().fg(accent.into()).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::new().fg(accent.into()))
}

/// `Label ████░░░  42.0%` fitted to `width`.
fn meter(label: &str, frac: f64, value: String, width: usize, theme: &Theme) -> Line<'static> {
    let bar_width = width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1);
    let pct = frac * 100.0;
    let mut spans = vec![Span::raw(format!("{label:<w$}", w = LABEL_WIDTH))];
    spans.extend(gradient_bar(frac, bar_width, theme));
    spans.push(Span::styled(
        format!(" {value:>w$}", w = VALUE_WIDTH),
        Style::new().fg(theme.threshold(pct).into()),
    ));
    Line::from(spans)
}

fn percent_meter(label: &str, pct: f64, width: usize, theme: &Theme) -> Line<'static> {
    meter(label, fraction(pct, 100.0), format!("{pct:.1}%"), width, theme)
}

fn remaining(area: Rect, used: usize) -> usize {
    usize::from(area.height).saturating_sub(used)
}

pub fn gpu_row(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let gpus = &view.snapshot.gpus;
    let areas = Layout::horizontal(gpus.iter().map(|_| Constraint::Fill(1))).split(area);
    for (gpu, area) in gpus.iter().zip(areas.iter()) {
        gpu_block(frame, *area, gpu, view);
    }
}

fn gpu_block(frame: &mut Frame, area: Rect, gpu: &GpuReading, view: &View<'_>) {
    let theme = view.theme;
    let block = accent_block(format!(" GPU {} ", gpu.index), theme.accents.gpu)
        .title_bottom(Line::from(format!(" {} ", short_gpu_name(&gpu.name))).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let spark_rows = remaining(inner, 2) / 2;

    let mut lines = vec![percent_meter("Util", gpu.util_percent, width, theme)];
    let util = view.history.tail(Channel::GpuUtil(gpu.index), width);
    lines.extend(sparkline(&util, 100.0, width, spark_rows, theme));

    lines.push(percent_meter("Mem", gpu.mem_percent(), width, theme));
    lines.push(Line::styled(
        format!(
            "{:>width$}",
            format!("{:.1}/{:.1} GB", gib(gpu.mem_used), gib(gpu.mem_total))
        ),
        Style::new().fg(Color::Gray),
    ));
    let mem = view.history.tail(Channel::GpuMem(gpu.index), width);
    lines.extend(sparkline(&mem, 100.0, width, spark_rows.saturating_sub(1), theme));

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn network_panel(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let theme = view.theme;
    let block = accent_block(" Network ".to_string(), theme.accents.net);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let rx = view.history.tail(Channel::NetRx, width);
    let tx = view.history.tail(Channel::NetTx, width);
    let (rx_scale, tx_scale) = (net_scale(&rx), net_scale(&tx));
    let net = view.snapshot.network;
    // Two meters and the peak line; the sparklines share the rest.
    let spark_rows = remaining(inner, 3) / 2;
    let rate = |label, value: f64, scale| {
        meter(label, fraction(value, scale), fmt_speed(value), width, theme)
    };

    let mut lines = vec![rate("RX", net.rx_rate, rx_scale)];
    lines.extend(sparkline(&rx, rx_scale, width, spark_rows, theme));
    lines.push(rate("TX", net.tx_rate, tx_scale));
    lines.extend(sparkline(&tx, tx_scale, width, spark_rows, theme));
    lines.push(Line::styled(
        format!("Peak: {}", fmt_speed(rx_scale.max(tx_scale))),
        Style::new().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn cpu_panel(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let theme = view.theme;
    let cpu = &view.snapshot.cpu;
    let block = accent_block(" CPU ".to_string(), theme.accents.cpu);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let mut lines = vec![
        percent_meter("CPU", cpu.percent, width, theme),
        Line::styled(
            format!("{} cores @ {} MHz", cpu.cores, cpu.freq_mhz),
            Style::new().fg(Color::Gray),
        ),
    ];
    let history = view.history.tail(Channel::Cpu, width);
    lines.extend(sparkline(&history, 100.0, width, remaining(inner, 2), theme));
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn memory_panel(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let theme = view.theme;
    let (mem, swap) = (view.snapshot.memory, view.snapshot.swap);
    let block = accent_block(" Memory ".to_string(), theme.accents.mem);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let detail = Style::new().fg(Color::Gray);
    let mut lines = vec![
        percent_meter("RAM", mem.percent(), width, theme),
        Line::styled(
            format!(
                "{:.1}/{:.1} GB  shared {:.1} GB",
                gib(mem.used),
                gib(mem.total),
                gib(mem.shared)
            ),
            detail,
        ),
        percent_meter("Swap", swap.percent(), width, theme),
        Line::styled(format!("{:.1}/{:.1} GB", gib(swap.used), gib(swap.total)), detail),
    ];
    let history = view.history.tail(Channel::Memory, width);
    lines.extend(sparkline(&history, 100.0, width, remaining(inner, 4), theme));
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn memory_table(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let theme = view.theme;
    let rows = view.snapshot.top_mem.iter().map(|p| {
        Row::new([
            Cell::from(p.pid.to_string()),
            Cell::from(trim_text(&p.name, 18)),
            Cell::from(fmt_bytes(p.mem_used)),
            Cell::from(fmt_bytes(p.mem_shared)),
            percent_cell(p.mem_percent, theme),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(7),
        ],
    )
    .header(header(["PID", "Name", "Used", "Shared", "Mem%"]))
    .block(accent_block(" Top Processes by Memory ".to_string(), theme.accents.proc_mem));
    frame.render_widget(table, area);
}

pub fn cpu_table(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let theme = view.theme;
    let rows = view.snapshot.top_cpu.iter().map(|p: &ProcessReading| {
        Row::new([
            Cell::from(p.pid.to_string()),
            Cell::from(trim_text(&p.name, 18)),
            percent_cell(p.cpu_percent, theme),
            Cell::from(fmt_bytes(p.mem_used)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(header(["PID", "Name", "CPU%", "Mem"]))
    .block(accent_block(" Top Processes by CPU ".to_string(), theme.accents.proc_cpu));
    frame.render_widget(table, area);
}

fn header<const N: usize>(titles: [&'static str; N]) -> Row<'static> {
    Row::new(titles.map(Cell::from)).style(Style::new().add_modifier(Modifier::BOLD))
}

fn percent_cell(pct: f64, theme: &Theme) -> Cell<'static> {
    Cell::from(Span::styled(
        format!("{pct:>5.1}"),
        Style::new().fg(theme.threshold(pct).into()),
    ))
}

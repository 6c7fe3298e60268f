//! Gradient bars and sparklines built from styled spans.

use crate::theme::Theme;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Smallest full-scale value for network bars and sparklines, bytes/s.
pub const NET_SCALE_FLOOR: f64 = 1024.0;

const GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const FILLED: &str = "█";
const EMPTY: &str = "░";

fn unit(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

/// `value / scale` clamped to [0, 1]; zero for a non-positive scale.
pub fn fraction(value: f64, scale: f64) -> f64 {
    if scale > 0.0 { unit(value / scale) } else { 0.0 }
}

/// Peak of the visible window, never below the floor.
pub fn net_scale(window: &[f64]) -> f64 {
    window
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(NET_SCALE_FLOOR, f64::max)
}

/// A `width`-cell bar; each filled cell takes the gradient color at its position.
pub fn gradient_bar(frac: f64, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let frac = unit(frac);
    let filled = ((frac * width as f64).round() as usize).min(width);
    let mut spans = Vec::with_capacity(width);
    for i in 0..filled {
        let at = frac * (i + 1) as f64 / filled as f64;
        spans.push(Span::styled(
            FILLED,
            Style::new().fg(theme.gradient(at).into()),
        ));
    }
    if width > filled {
        spans.push(Span::styled(
            EMPTY.repeat(width - filled),
            Style::new().fg(Color::DarkGray),
        ));
    }
    spans
}

/// Renders the newest `width` points right-aligned over `height` rows.
pub fn sparkline(
    values: &[f64],
    scale: f64,
    width: usize,
    height: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let skip = values.len().saturating_sub(width);
    let points = &values[skip..];
    let pad = width - points.len();
    let levels: Vec<(usize, Color)> = points
        .iter()
        .map(|&v| {
            let f = fraction(v, scale);
            let level = (f * (height * 8) as f64).round() as usize;
            (level, theme.gradient(f).into())
        })
        .collect();

    (0..height)
        .map(|row| {
            let floor = (height - 1 - row) * 8;
            let mut spans = Vec::with_capacity(points.len() + 1);
            if pad > 0 {
                spans.push(Span::raw(" ".repeat(pad)));
            }
            for &(level, color) in &levels {
                let glyph = GLYPHS[level.saturating_sub(floor).min(8)];
                spans.push(Span::styled(glyph.to_string(), Style::new().fg(color)));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Catalog;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bar_fills_proportionally() {
        let catalog = Catalog::builtin().unwrap();
        let theme = catalog.get(0);
        assert_eq!(text(&gradient_bar(0.5, 10, theme)), "█████░░░░░");
        assert_eq!(text(&gradient_bar(2.0, 4, theme)), "████");
        assert_eq!(text(&gradient_bar(f64::NAN, 3, theme)), "░░░");
    }

    #[test]
    fn bar_tip_matches_gradient_at_value() {
        let catalog = Catalog::builtin().unwrap();
        let theme = catalog.get(0);
        let spans = gradient_bar(0.6, 10, theme);
        let tip = spans[5].style.fg;
        assert_eq!(tip, Some(theme.gradient(0.6).into()));
        assert_eq!(spans[0].style.fg, Some(theme.gradient(0.6 / 6.0).into()));
    }

    #[test]
    fn sparkline_keeps_newest_points() {
        let catalog = Catalog::builtin().unwrap();
        let theme = catalog.get(0);
        let values = [100.0, 0.0, 50.0, 100.0];
        let lines = sparkline(&values, 100.0, 3, 1, theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), " ▄█");

        let padded = sparkline(&[100.0], 100.0, 4, 1, theme);
        assert_eq!(padded[0].to_string(), "   █");
    }

    #[test]
    fn taller_sparklines_stack_levels() {
        let catalog = Catalog::builtin().unwrap();
        let theme = catalog.get(0);
        let lines = sparkline(&[75.0], 100.0, 1, 2, theme);
        assert_eq!(lines[0].to_string(), "▄");
        assert_eq!(lines[1].to_string(), "█");
    }

    #[test]
    fn network_scale_uses_window_peak_with_floor() {
        assert_eq!(net_scale(&[]), NET_SCALE_FLOOR);
        assert_eq!(net_scale(&[10.0, 300.0]), NET_SCALE_FLOOR);
        assert_eq!(net_scale(&[5000.0, 20_000.0, 100.0]), 20_000.0);
    }
}

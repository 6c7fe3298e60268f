//! Palettes and gradient interpolation.

pub mod catalog;

use crate::{
    app::AppState,
    error::{Error, Result},
};
use catalog::{THEMES, ThemeSpec};
use ratatui::style::Color;
use std::collections::HashSet;

pub const DEFAULT_THEME: &str = "Default";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb`.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    /// Rec. 709 relative luminance over the raw channel values, 0-255.
    pub fn luminance(self) -> f64 {
        0.2126 * f64::from(self.0) + 0.7152 * f64::from(self.1) + 0.0722 * f64::from(self.2)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accents {
    pub gpu: Rgb,
    pub cpu: Rgb,
    pub mem: Rgb,
    pub net: Rgb,
    pub proc_cpu: Rgb,
    pub proc_mem: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub normal: Rgb,
    pub warning: Rgb,
    pub critical: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub accents: Accents,
    pub stops: Vec<Rgb>,
    pub thresholds: Thresholds,
}

impl Theme {
    /// Piecewise-linear over equal-width segments; input is clamped to [0, 1].
    pub fn gradient(&self, value: f64) -> Rgb {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let segments = self.stops.len().saturating_sub(1);
        match segments {
            0 => self.stops.first().copied().unwrap_or(Rgb(255, 255, 255)),
            _ => {
                let scaled = t * segments as f64;
                let seg = (scaled as usize).min(segments - 1);
                self.stops[seg].lerp(self.stops[seg + 1], scaled - seg as f64)
            }
        }
    }

    /// Categorical color for a 0-100 percentage.
    pub fn threshold(&self, pct: f64) -> Rgb {
        if pct < 50.0 {
            self.thresholds.normal
        } else if pct < 80.0 {
            self.thresholds.warning
        } else {
            self.thresholds.critical
        }
    }

    fn from_spec(spec: &ThemeSpec) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidCatalog {
            theme: spec.name.to_string(),
            reason,
        };
        let color =
            |hex: &str| Rgb::parse(hex).ok_or_else(|| invalid(format!("bad color '{hex}'")));

        if spec.stops.len() < 2 {
            return Err(invalid(format!(
                "needs at least 2 stops, found {}",
                spec.stops.len()
            )));
        }
        let stops = spec
            .stops
            .iter()
            .copied()
            .map(|hex| color(hex))
            .collect::<Result<Vec<_>>>()?;
        let lum: Vec<f64> = stops.iter().map(|c| c.luminance()).collect();
        let rising = lum.windows(2).all(|w| w[0] <= w[1]);
        let falling = lum.windows(2).all(|w| w[0] >= w[1]);
        if !rising && !falling {
            return Err(invalid("stop luminance is not monotonic".to_string()));
        }

        let [gpu, cpu, mem, net, proc_cpu, proc_mem] = spec.accents;
        let [normal, warning, critical] = spec.thresholds;
        Ok(Self {
            name: spec.name,
            accents: Accents {
                gpu: color(gpu)?,
                cpu: color(cpu)?,
                mem: color(mem)?,
                net: color(net)?,
                proc_cpu: color(proc_cpu)?,
                proc_mem: color(proc_mem)?,
            },
            stops,
            thresholds: Thresholds {
                normal: color(normal)?,
                warning: color(warning)?,
                critical: color(critical)?,
            },
        })
    }
}

/// Validated, ordered set of selectable themes.
#[derive(Clone, Debug)]
pub struct Catalog {
    themes: Vec<Theme>,
    default: usize,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_specs(THEMES)
    }

    pub fn from_specs(specs: &[ThemeSpec]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut themes = Vec::with_capacity(specs.len());
        for spec in specs {
            if !seen.insert(spec.name) {
                return Err(Error::InvalidCatalog {
                    theme: spec.name.to_string(),
                    reason: "duplicate name".to_string(),
                });
            }
            themes.push(Theme::from_spec(spec)?);
        }
        let default = themes
            .iter()
            .position(|t| t.name == DEFAULT_THEME)
            .ok_or_else(|| Error::InvalidCatalog {
                theme: DEFAULT_THEME.to_string(),
                reason: "default theme missing from catalog".to_string(),
            })?;
        Ok(Self { themes, default })
    }

    pub fn list_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.themes
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| Error::UnknownTheme(name.to_string()))
    }

    /// Makes `name` the active theme. The caller persists the choice.
    pub fn select(&self, state: &mut AppState, name: &str) -> Result<()> {
        state.theme = self.index_of(name)?;
        Ok(())
    }

    pub fn default_index(&self) -> usize {
        self.default
    }

    /// Out-of-range indices resolve to the default theme.
    pub fn get(&self, index: usize) -> &Theme {
        self.themes.get(index).unwrap_or(&self.themes[self.default])
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec(name: &'static str, stops: &'static [&'static str]) -> ThemeSpec {
        ThemeSpec {
            name,
            accents: ["#000000"; 6],
            stops,
            thresholds: ["#00ff00", "#ffff00", "#ff0000"],
        }
    }

    #[test]
    fn ships_fifty_themes_with_default() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 50);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(catalog.default_index()).name, DEFAULT_THEME);
        assert_eq!(catalog.list_themes()[0], "Default");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::parse("#ff8000"), Some(Rgb(255, 128, 0)));
        assert_eq!(Rgb::parse("ff8000"), None);
        assert_eq!(Rgb::parse("#ff80"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
    }

    #[test]
    fn gradient_hits_stops_exactly() {
        let catalog =
            Catalog::from_specs(&[spec("Default", &["#000000", "#808080", "#ffffff"])]).unwrap();
        let theme = catalog.get(0);
        assert_eq!(theme.gradient(0.0), Rgb(0, 0, 0));
        assert_eq!(theme.gradient(0.5), Rgb(128, 128, 128));
        assert_eq!(theme.gradient(1.0), Rgb(255, 255, 255));
        assert_eq!(theme.gradient(0.25), Rgb(64, 64, 64));
    }

    #[test]
    fn gradient_clamps_out_of_range() {
        let catalog = Catalog::builtin().unwrap();
        for theme in catalog.themes() {
            assert_eq!(theme.gradient(-3.0), theme.gradient(0.0), "{}", theme.name);
            assert_eq!(theme.gradient(7.5), theme.gradient(1.0), "{}", theme.name);
            assert_eq!(theme.gradient(f64::NAN), theme.gradient(0.0), "{}", theme.name);
        }
    }

    #[test]
    fn thresholds_split_at_fifty_and_eighty() {
        let catalog = Catalog::builtin().unwrap();
        let theme = catalog.get(catalog.default_index());
        assert_eq!(theme.threshold(49.9), theme.thresholds.normal);
        assert_eq!(theme.threshold(50.0), theme.thresholds.warning);
        assert_eq!(theme.threshold(80.0), theme.thresholds.critical);
    }

    #[test]
    fn rejects_malformed_stop_lists() {
        let single = Catalog::from_specs(&[spec("Default", &["#000000"])]);
        assert!(matches!(single, Err(Error::InvalidCatalog { .. })));

        let bad_hex = Catalog::from_specs(&[spec("Default", &["#000000", "nope"])]);
        assert!(matches!(bad_hex, Err(Error::InvalidCatalog { .. })));

        let zigzag = Catalog::from_specs(&[spec("Default", &["#000000", "#ffffff", "#000000"])]);
        assert!(matches!(zigzag, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn rejects_duplicates_and_missing_default() {
        let dup = Catalog::from_specs(&[
            spec("Default", &["#000000", "#ffffff"]),
            spec("Default", &["#000000", "#ffffff"]),
        ]);
        assert!(matches!(dup, Err(Error::InvalidCatalog { .. })));

        let no_default = Catalog::from_specs(&[spec("Other", &["#000000", "#ffffff"])]);
        assert!(matches!(no_default, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(
            catalog.index_of("Nope"),
            Err(Error::UnknownTheme(name)) if name == "Nope"
        ));
        assert!(catalog.index_of("Nord").is_ok());
    }

    #[test]
    fn select_updates_state_only_on_success() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = AppState::new(std::time::Duration::from_secs(1), catalog.default_index());
        catalog.select(&mut state, "Gruvbox").unwrap();
        assert_eq!(catalog.get(state.theme).name, "Gruvbox");
        assert!(catalog.select(&mut state, "Missing").is_err());
        assert_eq!(catalog.get(state.theme).name, "Gruvbox");
    }

    // u8 rounding of each channel can wobble the sum by at most one unit.
    const ROUNDING: f64 = 1.0;

    proptest! {
        #[test]
        fn gradient_luminance_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let catalog = Catalog::builtin().unwrap();
            for theme in catalog.themes() {
                let first = theme.stops[0].luminance();
                let last = theme.stops[theme.stops.len() - 1].luminance();
                let (l_lo, l_hi) = (theme.gradient(lo).luminance(), theme.gradient(hi).luminance());
                if first <= last {
                    prop_assert!(l_lo <= l_hi + ROUNDING, "{}: {l_lo} > {l_hi}", theme.name);
                } else {
                    prop_assert!(l_lo + ROUNDING >= l_hi, "{}: {l_lo} < {l_hi}", theme.name);
                }
            }
        }
    }
}

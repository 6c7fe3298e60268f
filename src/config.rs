//! Command-line options and the runtime settings derived from them.

use crate::history::DEFAULT_HISTORY;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_REFRESH: f64 = 1.0;
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// ktop: live CPU, memory, network, GPU and process dashboard
#[derive(Parser, Debug)]
#[command(name = "ktop", version, about, long_about = None)]
pub struct Cli {
    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_REFRESH, value_parser = parse_refresh)]
    pub refresh: f64,

    /// Color theme (browse the catalog with 't')
    #[arg(long)]
    pub theme: Option<String>,

    /// Run N sampling cycles without a terminal, print timings and exit
    #[arg(long, value_name = "N")]
    pub benchmark: Option<u32>,

    /// Samples kept per history channel
    #[arg(long, default_value_t = DEFAULT_HISTORY, value_parser = parse_history)]
    pub history: usize,

    /// Disable GPU telemetry
    #[arg(long)]
    pub no_gpu: bool,

    /// Theme selection file (default: <config dir>/ktop/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_refresh(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err("refresh interval must be greater than 0".to_string())
    }
}

fn parse_history(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("history must be a positive integer".to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub refresh: Duration,
    pub tick: Duration,
    pub theme: Option<String>,
    pub benchmark: Option<u32>,
    pub history: usize,
    pub gpu: bool,
    pub config_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            refresh: Duration::from_secs_f64(cli.refresh),
            tick: DEFAULT_TICK,
            theme: cli.theme,
            benchmark: cli.benchmark,
            history: cli.history,
            gpu: !cli.no_gpu,
            config_path: cli.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Settings {
        let argv = std::iter::once("ktop").chain(args.iter().copied());
        Settings::from_cli(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]);
        assert_eq!(s.refresh, Duration::from_secs(1));
        assert_eq!(s.tick, Duration::from_millis(50));
        assert_eq!(s.history, DEFAULT_HISTORY);
        assert!(s.gpu);
        assert!(s.theme.is_none());
        assert!(s.benchmark.is_none());
    }

    #[test]
    fn parses_every_flag() {
        let s = settings(&[
            "-r", "0.5", "--theme", "Nord", "--benchmark", "20", "--history", "60", "--no-gpu",
            "--config", "/tmp/k.json",
        ]);
        assert_eq!(s.refresh, Duration::from_millis(500));
        assert_eq!(s.theme.as_deref(), Some("Nord"));
        assert_eq!(s.benchmark, Some(20));
        assert_eq!(s.history, 60);
        assert!(!s.gpu);
        assert_eq!(s.config_path, Some(PathBuf::from("/tmp/k.json")));
    }

    #[test]
    fn rejects_non_positive_refresh() {
        for bad in ["0", "-1", "nan", "inf", "fast"] {
            let parsed = Cli::try_parse_from(["ktop", "--refresh", bad]);
            assert!(parsed.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn rejects_zero_history() {
        assert!(Cli::try_parse_from(["ktop", "--history", "0"]).is_err());
    }
}

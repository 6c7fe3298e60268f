//! Per-operation timing used by `--benchmark`.

use std::{
    fmt::Write as _,
    time::{Duration, Instant},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpStats {
    pub count: u32,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl OpStats {
    fn new(first: Duration) -> Self {
        Self {
            count: 1,
            total: first,
            min: first,
            max: first,
        }
    }

    fn add(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
    }

    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / self.count
        }
    }
}

/// Collects timings in first-seen order. A disabled profile records nothing.
#[derive(Debug, Default)]
pub struct Profile {
    recording: bool,
    ops: Vec<(&'static str, OpStats)>,
}

impl Profile {
    pub fn recording() -> Self {
        Self {
            recording: true,
            ops: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::default()
    }

    pub fn time<T>(&mut self, op: &'static str, f: impl FnOnce() -> T) -> T {
        if !self.recording {
            return f();
        }
        let start = Instant::now();
        let out = f();
        self.record(op, start.elapsed());
        out
    }

    pub fn record(&mut self, op: &'static str, elapsed: Duration) {
        if !self.recording {
            return;
        }
        match self.ops.iter_mut().find(|(name, _)| *name == op) {
            Some((_, stats)) => stats.add(elapsed),
            None => self.ops.push((op, OpStats::new(elapsed))),
        }
    }

    pub fn get(&self, op: &str) -> Option<&OpStats> {
        self.ops
            .iter()
            .find(|(name, _)| *name == op)
            .map(|(_, stats)| stats)
    }

    pub fn ops(&self) -> &[(&'static str, OpStats)] {
        &self.ops
    }

    pub fn report(&self) -> String {
        let mut out = format!(
            "{:<10} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
            "op", "count", "total", "mean", "min", "max"
        );
        for (name, s) in &self.ops {
            let _ = writeln!(
                out,
                "{:<10} {:>6} {:>12} {:>12} {:>12} {:>12}",
                name,
                s.count,
                fmt_duration(s.total),
                fmt_duration(s.mean()),
                fmt_duration(s.min),
                fmt_duration(s.max),
            );
        }
        out
    }
}

fn fmt_duration(d: Duration) -> String {
    let us = d.as_secs_f64() * 1_000_000.0;
    if us >= 1000.0 {
        format!("{:.2}ms", us / 1000.0)
    } else {
        format!("{us:.1}us")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_per_operation() {
        let mut profile = Profile::recording();
        profile.record("cpu", Duration::from_millis(2));
        profile.record("cpu", Duration::from_millis(4));
        profile.record("render", Duration::from_millis(1));

        let cpu = profile.get("cpu").copied().unwrap();
        assert_eq!(cpu.count, 2);
        assert_eq!(cpu.min, Duration::from_millis(2));
        assert_eq!(cpu.max, Duration::from_millis(4));
        assert_eq!(cpu.mean(), Duration::from_millis(3));

        let names: Vec<_> = profile.ops().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["cpu", "render"]);
    }

    #[test]
    fn disabled_profile_still_runs_the_closure() {
        let mut profile = Profile::off();
        let value = profile.time("cpu", || 7);
        assert_eq!(value, 7);
        assert!(profile.ops().is_empty());
    }

    #[test]
    fn report_lists_every_operation() {
        let mut profile = Profile::recording();
        profile.record("network", Duration::from_micros(250));
        let report = profile.report();
        assert!(report.contains("network"));
        assert!(report.contains("250.0us"));
    }
}

//! Bounded top-N selection fed from a single process enumeration.

use super::ProcessReading;
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

pub const TOP_N: usize = 10;

/// `Greater` ranks higher: bigger key first, lower pid on ties.
#[derive(Debug)]
struct Ranked<T> {
    key: f64,
    pid: u32,
    item: T,
}

impl<T> Ranked<T> {
    fn order(&self, key: f64, pid: u32) -> Ordering {
        self.key
            .total_cmp(&key)
            .then_with(|| pid.cmp(&self.pid))
    }
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order(other.key, other.pid)
    }
}

/// Keeps the `limit` best items seen so far. The heap top is the current worst.
pub struct TopN<T> {
    limit: usize,
    heap: BinaryHeap<Reverse<Ranked<T>>>,
}

impl<T> TopN<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::with_capacity(limit + 1),
        }
    }

    /// Offers a candidate; `make` only runs if the candidate is kept.
    pub fn offer(&mut self, key: f64, pid: u32, make: impl FnOnce() -> T) {
        if self.limit == 0 {
            return;
        }
        if self.heap.len() >= self.limit {
            match self.heap.peek() {
                Some(Reverse(worst)) if worst.order(key, pid) == Ordering::Less => {}
                _ => return,
            }
            self.heap.pop();
        }
        self.heap.push(Reverse(Ranked {
            key,
            pid,
            item: make(),
        }));
    }

    /// Drains into best-first order.
    pub fn into_sorted(self) -> Vec<T> {
        let mut ranked: Vec<Ranked<T>> = self.heap.into_iter().map(|Reverse(r)| r).collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked.into_iter().map(|r| r.item).collect()
    }
}

/// Both process rankings, fed from the same stream of readings.
pub struct Ranker {
    by_cpu: TopN<ProcessReading>,
    by_mem: TopN<ProcessReading>,
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Self {
            by_cpu: TopN::new(limit),
            by_mem: TopN::new(limit),
        }
    }

    pub fn offer(&mut self, reading: &ProcessReading) {
        self.by_cpu
            .offer(reading.cpu_percent, reading.pid, || reading.clone());
        self.by_mem
            .offer(reading.mem_used as f64, reading.pid, || reading.clone());
    }

    /// `(by_cpu, by_mem)`, each best-first.
    pub fn finish(self) -> (Vec<ProcessReading>, Vec<ProcessReading>) {
        (self.by_cpu.into_sorted(), self.by_mem.into_sorted())
    }
}

/// Ranks an arbitrary process list in one pass.
pub fn rank_processes<'a>(
    readings: impl IntoIterator<Item = &'a ProcessReading>,
    limit: usize,
) -> (Vec<ProcessReading>, Vec<ProcessReading>) {
    let mut ranker = Ranker::new(limit);
    for reading in readings {
        ranker.offer(reading);
    }
    ranker.finish()
}

//! Fixed-capacity sample history per metric channel.

use crate::sampler::Snapshot;
use std::collections::{HashMap, VecDeque};

pub const DEFAULT_HISTORY: usize = 300;

/// One scalar metric stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Cpu,
    Memory,
    NetRx,
    NetTx,
    GpuUtil(u32),
    GpuMem(u32),
}

/// Bounded FIFO. Pushing at capacity drops the oldest sample.
#[derive(Clone, Debug)]
pub struct RingBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &f64> + ExactSizeIterator {
        self.samples.iter()
    }
}

#[derive(Clone, Debug)]
pub struct HistoryStore {
    capacity: usize,
    channels: HashMap<Channel, RingBuffer>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            channels: HashMap::new(),
        }
    }

    /// Appends to `channel`, creating its buffer on first sight.
    pub fn append(&mut self, channel: Channel, value: f64) {
        let capacity = self.capacity;
        self.channels
            .entry(channel)
            .or_insert_with(|| RingBuffer::new(capacity))
            .push(value);
    }

    /// Oldest-first copy of everything retained for `channel`.
    pub fn window(&self, channel: Channel) -> Vec<f64> {
        self.channels
            .get(&channel)
            .map(|buf| buf.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The most recent `n` samples, oldest first.
    pub fn tail(&self, channel: Channel, n: usize) -> Vec<f64> {
        match self.channels.get(&channel) {
            Some(buf) => {
                let skip = buf.len().saturating_sub(n);
                buf.iter().skip(skip).copied().collect()
            }
            None => Vec::new(),
        }
    }

    pub fn len(&self, channel: Channel) -> usize {
        self.channels.get(&channel).map_or(0, RingBuffer::len)
    }

    /// Appends every scalar channel carried by one complete snapshot.
    pub fn record(&mut self, snapshot: &Snapshot) {
        self.append(Channel::Cpu, snapshot.cpu.percent);
        self.append(Channel::Memory, snapshot.memory.percent());
        self.append(Channel::NetRx, snapshot.network.rx_rate);
        self.append(Channel::NetTx, snapshot.network.tx_rate);
        for gpu in &snapshot.gpus {
            self.append(Channel::GpuUtil(gpu.index), gpu.util_percent);
            self.append(Channel::GpuMem(gpu.index), gpu.mem_percent());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::GpuReading;
    use proptest::prelude::*;

    #[test]
    fn ring_buffer_evicts_oldest() {
        let mut rb = RingBuffer::new(3);
        assert!(rb.is_empty());
        for v in [1.0, 2.0, 3.0, 4.0] {
            rb.push(v);
        }
        assert_eq!(rb.len(), 3);
        let items: Vec<_> = rb.iter().copied().collect();
        assert_eq!(items, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn unknown_channel_is_empty_until_first_append() {
        let mut store = HistoryStore::new(60);
        assert!(store.window(Channel::GpuUtil(7)).is_empty());
        store.append(Channel::GpuUtil(7), 42.0);
        assert_eq!(store.window(Channel::GpuUtil(7)), vec![42.0]);
        assert!(store.window(Channel::GpuUtil(8)).is_empty());
    }

    #[test]
    fn tail_returns_most_recent_in_order() {
        let mut store = HistoryStore::new(10);
        for v in 0..8 {
            store.append(Channel::Cpu, f64::from(v));
        }
        assert_eq!(store.tail(Channel::Cpu, 3), vec![5.0, 6.0, 7.0]);
        assert_eq!(store.tail(Channel::Cpu, 50).len(), 8);
    }

    #[test]
    fn record_creates_gpu_channels_lazily() {
        let mut store = HistoryStore::new(5);
        let mut snapshot = Snapshot::default();
        store.record(&snapshot);
        assert_eq!(store.len(Channel::GpuUtil(0)), 0);

        snapshot.gpus.push(GpuReading {
            index: 0,
            name: "test".into(),
            util_percent: 30.0,
            mem_used: 1,
            mem_total: 4,
        });
        store.record(&snapshot);
        assert_eq!(store.window(Channel::GpuUtil(0)), vec![30.0]);
        assert_eq!(store.window(Channel::GpuMem(0)), vec![25.0]);
        assert_eq!(store.len(Channel::Cpu), 2);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 1usize..80, extra in 0usize..200) {
            let mut store = HistoryStore::new(capacity);
            let total = capacity + extra;
            for i in 0..total {
                store.append(Channel::NetRx, i as f64);
            }
            let window = store.window(Channel::NetRx);
            prop_assert_eq!(window.len(), capacity);
            let expected: Vec<f64> = (extra..total).map(|i| i as f64).collect();
            prop_assert_eq!(window, expected);
        }
    }
}

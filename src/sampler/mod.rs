//! Samples host metrics into immutable snapshots.

pub mod gpu;
mod procfs;
pub mod rank;

use crate::{
    error::{Error, Result},
    profile::Profile,
};
use gpu::GpuTelemetry;
use rank::{Ranker, TOP_N};
use std::time::{Duration, Instant};
use sysinfo::{CpuRefreshKind, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CpuReading {
    pub percent: f64,
    pub cores: usize,
    pub freq_mhz: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryReading {
    pub used: u64,
    pub total: u64,
    pub shared: u64,
}

impl MemoryReading {
    pub fn percent(&self) -> f64 {
        percent_of(self.used, self.total)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapReading {
    pub used: u64,
    pub total: u64,
}

impl SwapReading {
    pub fn percent(&self) -> f64 {
        percent_of(self.used, self.total)
    }
}

/// Bytes per second over the interval since the previous sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetworkReading {
    pub rx_rate: f64,
    pub tx_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GpuReading {
    pub index: u32,
    pub name: String,
    pub util_percent: f64,
    pub mem_used: u64,
    pub mem_total: u64,
}

impl GpuReading {
    pub fn mem_percent(&self) -> f64 {
        percent_of(self.mem_used, self.mem_total)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessReading {
    pub pid: u32,
    pub name: String,
    /// Normalized by logical core count, 0-100.
    pub cpu_percent: f64,
    /// Resident bytes not shared with other processes.
    pub mem_used: u64,
    pub mem_shared: u64,
    /// Resident share of total memory, 0-100.
    pub mem_percent: f64,
}

/// Everything read during one sampling pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub cpu: CpuReading,
    pub memory: MemoryReading,
    pub swap: SwapReading,
    pub network: NetworkReading,
    pub gpus: Vec<GpuReading>,
    pub top_cpu: Vec<ProcessReading>,
    pub top_mem: Vec<ProcessReading>,
}

/// A producer of snapshots the scheduler can drive.
pub trait MetricSource {
    fn sample(&mut self, profile: &mut Profile) -> Snapshot;
}

pub struct Sampler {
    system: System,
    networks: Networks,
    gpu: Option<Box<dyn GpuTelemetry>>,
    /// When `networks` was last refreshed.
    net_at: Instant,
}

fn process_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing()
        .with_cpu()
        .with_memory()
        .without_tasks()
}

impl Sampler {
    /// Fails only when processes cannot be enumerated at all.
    pub fn new(gpu: Option<Box<dyn GpuTelemetry>>) -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::NoProcessAccess);
        }
        let mut system = System::new();
        system.refresh_cpu_specifics(CpuRefreshKind::nothing().with_cpu_usage());
        system.refresh_processes_specifics(ProcessesToUpdate::All, true, process_kind());
        if system.processes().is_empty() {
            return Err(Error::NoProcessAccess);
        }

        let networks = Networks::new_with_refreshed_list();
        let net_at = Instant::now();
        // CPU usage is a difference between two refreshes; give the first one a real interval.
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        Ok(Self {
            system,
            networks,
            gpu,
            net_at,
        })
    }

    pub fn gpu_enabled(&self) -> bool {
        self.gpu.is_some()
    }

    fn sample_cpu(&mut self) -> CpuReading {
        self.system.refresh_cpu_specifics(
            CpuRefreshKind::nothing()
                .with_cpu_usage()
                .with_frequency(),
        );
        let cpus = self.system.cpus();
        CpuReading {
            percent: f64::from(self.system.global_cpu_usage()).clamp(0.0, 100.0),
            cores: cpus.len().max(1),
            freq_mhz: cpus.first().map_or(0, |cpu| cpu.frequency()),
        }
    }

    fn sample_memory(&mut self) -> (MemoryReading, SwapReading) {
        self.system.refresh_memory();
        let memory = MemoryReading {
            used: self.system.used_memory(),
            total: self.system.total_memory(),
            shared: procfs::shared_memory(),
        };
        let swap = SwapReading {
            used: self.system.used_swap(),
            total: self.system.total_swap(),
        };
        (memory, swap)
    }

    /// Per-interface deltas since the previous refresh, or since construction for the first.
    fn sample_network(&mut self) -> NetworkReading {
        self.networks.refresh(true);
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.net_at);
        self.net_at = now;
        network_rates(
            self.networks
                .iter()
                .map(|(name, data)| (name.as_str(), data.received(), data.transmitted())),
            elapsed,
        )
    }

    fn sample_gpus(&mut self) -> Vec<GpuReading> {
        let Some(backend) = self.gpu.as_mut() else {
            return Vec::new();
        };
        match backend.read() {
            Ok(gpus) => gpus,
            Err(err) => {
                log::warn!("{err}; gpu panels disabled for this session");
                self.gpu = None;
                Vec::new()
            }
        }
    }

    fn sample_processes(
        &mut self,
        cores: usize,
        total_memory: u64,
    ) -> (Vec<ProcessReading>, Vec<ProcessReading>) {
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, process_kind());
        let scan = self
            .system
            .processes()
            .values()
            .filter(|process| process.thread_kind().is_none())
            .map(|process| {
                let pid = process.pid().as_u32();
                let raw = RawProcess {
                    pid,
                    name: process.name().to_string_lossy().into_owned(),
                    rss: process.memory(),
                    cpu_usage: process.cpu_usage(),
                };
                read_process(raw, procfs::process_shared(pid), cores, total_memory)
            });
        rank_scan(scan)
    }
}

impl MetricSource for Sampler {
    fn sample(&mut self, profile: &mut Profile) -> Snapshot {
        let cpu = profile.time("cpu", || self.sample_cpu());
        let (memory, swap) = profile.time("memory", || self.sample_memory());
        let network = profile.time("network", || self.sample_network());
        let gpus = profile.time("gpu", || self.sample_gpus());
        let (top_cpu, top_mem) =
            profile.time("processes", || self.sample_processes(cpu.cores, memory.total));
        Snapshot {
            cpu,
            memory,
            swap,
            network,
            gpus,
            top_cpu,
            top_mem,
        }
    }
}

/// Fields read from one enumerated process.
struct RawProcess {
    pid: u32,
    name: String,
    rss: u64,
    cpu_usage: f32,
}

/// Builds one reading; `Ok(None)` for entries that are never shown.
fn read_process(
    raw: RawProcess,
    shared: std::io::Result<u64>,
    cores: usize,
    total_memory: u64,
) -> Result<Option<ProcessReading>> {
    if raw.pid == 0 {
        return Ok(None);
    }
    let shared = match shared {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::TransientSample { pid: raw.pid });
        }
        Err(_) => 0,
    };
    let cpu = f64::from(raw.cpu_usage) / cores.max(1) as f64;
    Ok(Some(ProcessReading {
        pid: raw.pid,
        name: raw.name,
        cpu_percent: if cpu.is_finite() { cpu.clamp(0.0, 100.0) } else { 0.0 },
        mem_used: raw.rss.saturating_sub(shared),
        mem_shared: shared,
        mem_percent: percent_of(raw.rss, total_memory),
    }))
}

/// Feeds every readable process into both rankings; failed reads are skipped.
fn rank_scan(
    scan: impl IntoIterator<Item = Result<Option<ProcessReading>>>,
) -> (Vec<ProcessReading>, Vec<ProcessReading>) {
    let mut ranker = Ranker::new(TOP_N);
    for reading in scan {
        match reading {
            Ok(Some(reading)) => ranker.offer(&reading),
            Ok(None) => {}
            Err(err) => log::debug!("{err}"),
        }
    }
    ranker.finish()
}

/// Sums per-interface byte deltas, loopback excluded, into rates.
fn network_rates<'a>(
    deltas: impl IntoIterator<Item = (&'a str, u64, u64)>,
    elapsed: Duration,
) -> NetworkReading {
    let (rx, tx) = deltas
        .into_iter()
        .filter(|(name, _, _)| !name.starts_with("lo"))
        .fold((0u64, 0u64), |(rx, tx), (_, r, t)| {
            (rx.saturating_add(r), tx.saturating_add(t))
        });
    let mut dt = elapsed.as_secs_f64();
    if dt <= 0.0 {
        dt = 1.0;
    }
    NetworkReading {
        rx_rate: rx as f64 / dt,
        tx_rate: tx as f64 / dt,
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

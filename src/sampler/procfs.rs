//! Shared-memory figures `sysinfo` does not expose.

use std::io;

/// System-wide shared memory (`Shmem`) in bytes.
#[cfg(target_os = "linux")]
pub fn shared_memory() -> u64 {
    std::fs::read_to_string("/proc/meminfo")
        .ok()
        .and_then(|text| kib_field(&text, "Shmem:"))
        .map_or(0, |kib| kib * 1024)
}

#[cfg(not(target_os = "linux"))]
pub fn shared_memory() -> u64 {
    0
}

/// Resident shared bytes of one process (`RssFile` + `RssShmem`).
///
/// `NotFound` means the process exited between enumeration and this read.
#[cfg(target_os = "linux")]
pub fn process_shared(pid: u32) -> io::Result<u64> {
    let text = std::fs::read_to_string(format!("/proc/{pid}/status"))?;
    let file = kib_field(&text, "RssFile:").unwrap_or(0);
    let shmem = kib_field(&text, "RssShmem:").unwrap_or(0);
    Ok((file + shmem) * 1024)
}

#[cfg(not(target_os = "linux"))]
pub fn process_shared(_pid: u32) -> io::Result<u64> {
    Ok(0)
}

/// Parses lines like `Shmem:     123456 kB`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn kib_field(text: &str, key: &str) -> Option<u64> {
    text.lines()
        .find_map(|line| line.strip_prefix(key))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
}

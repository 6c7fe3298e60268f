//! Human-readable byte and rate formatting.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

pub fn fmt_bytes(bytes: u64) -> String {
    let mb = bytes as f64 / MIB;
    if mb >= 1000.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else {
        format!("{mb:.1} MB")
    }
}

pub fn fmt_speed(bytes_per_sec: f64) -> String {
    let b = bytes_per_sec.max(0.0);
    if b >= GIB {
        format!("{:.1} GB/s", b / GIB)
    } else if b >= MIB {
        format!("{:.1} MB/s", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KB/s", b / KIB)
    } else {
        format!("{b:.0} B/s")
    }
}

pub fn gib(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

/// Truncates to `max_chars` characters, marking the cut with `..`.
pub fn trim_text(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let out: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{out}..")
    } else {
        out
    }
}

/// Drops the vendor prefix and the generation suffix from a GPU model name.
pub fn short_gpu_name(name: &str) -> String {
    name.replace("NVIDIA ", "").replace(" Generation", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_switch_to_gigabytes_at_a_thousand_megabytes() {
        assert_eq!(fmt_bytes(512 * 1024 * 1024), "512.0 MB");
        assert_eq!(fmt_bytes(2 * 1024 * 1024 * 1024), "2.0 GB");
    }

    #[test]
    fn speeds_pick_a_unit() {
        assert_eq!(fmt_speed(-5.0), "0 B/s");
        assert_eq!(fmt_speed(800.0), "800 B/s");
        assert_eq!(fmt_speed(1536.0), "1.5 KB/s");
        assert_eq!(fmt_speed(3.0 * MIB), "3.0 MB/s");
        assert_eq!(fmt_speed(1.5 * GIB), "1.5 GB/s");
    }

    #[test]
    fn trims_on_char_boundaries() {
        assert_eq!(trim_text("firefox", 18), "firefox");
        assert_eq!(trim_text("Rosé Pine Moon", 4), "Rosé..");
    }

    #[test]
    fn gpu_names_lose_vendor_and_generation() {
        assert_eq!(
            short_gpu_name("NVIDIA RTX 6000 Ada Generation"),
            "RTX 6000 Ada"
        );
        assert_eq!(short_gpu_name("NVIDIA GeForce RTX 4090"), "GeForce RTX 4090");
        assert_eq!(short_gpu_name("Tesla T4"), "Tesla T4");
    }
}

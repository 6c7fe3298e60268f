//! GPU telemetry backends.

use super::GpuReading;
use crate::error::{Error, Result};

pub trait GpuTelemetry {
    /// One reading per device, in index order.
    fn read(&mut self) -> Result<Vec<GpuReading>>;
}

/// Opens the telemetry facility once. `None` disables GPU panels for the session.
pub fn detect(enabled: bool) -> Option<Box<dyn GpuTelemetry>> {
    if !enabled {
        log::info!("gpu telemetry disabled by flag");
        return None;
    }
    match open() {
        Ok(backend) => Some(backend),
        Err(err) => {
            log::warn!("{err}; gpu panels disabled");
            None
        }
    }
}

#[cfg(feature = "nvidia")]
fn open() -> Result<Box<dyn GpuTelemetry>> {
    Ok(Box::new(nvidia::Nvidia::init()?))
}

#[cfg(not(feature = "nvidia"))]
fn open() -> Result<Box<dyn GpuTelemetry>> {
    Err(Error::TelemetryUnavailable(
        "built without nvidia support".to_string(),
    ))
}

#[cfg(feature = "nvidia")]
mod nvidia {
    use super::{Error, GpuReading, GpuTelemetry, Result};
    use nvml_wrapper::{Nvml, error::NvmlError};

    pub struct Nvidia {
        nvml: Nvml,
        count: u32,
    }

    fn unavailable(err: NvmlError) -> Error {
        Error::TelemetryUnavailable(err.to_string())
    }

    impl Nvidia {
        pub fn init() -> Result<Self> {
            let nvml = Nvml::init().map_err(unavailable)?;
            let count = nvml.device_count().map_err(unavailable)?;
            if count == 0 {
                return Err(Error::TelemetryUnavailable(
                    "no nvidia devices found".to_string(),
                ));
            }
            log::info!("nvml: {count} device(s)");
            Ok(Self { nvml, count })
        }
    }

    impl GpuTelemetry for Nvidia {
        fn read(&mut self) -> Result<Vec<GpuReading>> {
            let mut gpus = Vec::with_capacity(self.count as usize);
            for index in 0..self.count {
                let device = self.nvml.device_by_index(index).map_err(unavailable)?;
                let name = device
                    .name()
                    .unwrap_or_else(|_| format!("GPU {index}"));
                let util = device.utilization_rates().map_err(unavailable)?;
                let mem = device.memory_info().map_err(unavailable)?;
                gpus.push(GpuReading {
                    index,
                    name,
                    util_percent: f64::from(util.gpu).clamp(0.0, 100.0),
                    mem_used: mem.used,
                    mem_total: mem.total,
                });
            }
            Ok(gpus)
        }
    }
}

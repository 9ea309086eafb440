//! Gadget transport configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::HidCommonResult;
use crate::device::GadgetDevice;
use crate::hid_traits::ReportTransport;

pub const DEFAULT_DEVICE_PATH: &str = "/dev/hidg0";

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Where reports go and how long to pause after each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GadgetConfig {
    pub device_path: PathBuf,
    /// Milliseconds to wait after every report. Zero disables the pause.
    pub settle_delay_ms: u64,
}

impl Default for GadgetConfig {
    fn default() -> Self {
        Self {
            device_path: PathBuf::from(DEFAULT_DEVICE_PATH),
            settle_delay_ms: 10,
        }
    }
}

impl GadgetConfig {
    pub fn new(device_path: impl Into<PathBuf>, settle_delay_ms: u64) -> Self {
        Self {
            device_path: device_path.into(),
            settle_delay_ms,
        }
    }

    pub fn from_json(json: &str) -> HidCommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn device_path(&self) -> &Path {
        &self.device_path
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Transport writing to the configured gadget device.
    pub fn open_transport(&self) -> ReportTransport<GadgetDevice> {
        ReportTransport::new(GadgetDevice::new(&self.device_path), self.settle_delay())
    }
}

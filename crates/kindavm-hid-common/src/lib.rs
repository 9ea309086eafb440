//! Report transport for Linux USB HID gadget devices.
//!
//! This crate owns the one piece of I/O in the stack: pushing a finished
//! report frame to the gadget character device (`/dev/hidg0` by default)
//! and pausing for the settle delay afterwards.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod device;
pub mod hid_traits;

pub use config::{DEFAULT_DEVICE_PATH, DEFAULT_SETTLE_DELAY, GadgetConfig};
pub use device::{DryRunWriter, GadgetDevice, check_device};
pub use hid_traits::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("HID device not found at {}", .0.display())]
    DeviceNotFound(PathBuf),

    #[error("Path is not a character device: {}", .0.display())]
    NotCharDevice(PathBuf),

    #[error("Failed to open HID device {}", .path.display())]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write HID report to {}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Short write: {written} of {expected} report bytes accepted")]
    ShortWrite { expected: usize, written: usize },

    #[error("Device disconnected")]
    Disconnected,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HidCommonError {
    /// Whether the underlying OS error was a permission failure.
    pub fn is_permission_denied(&self) -> bool {
        let source = match self {
            Self::OpenError { source, .. } | Self::WriteError { source, .. } => source,
            Self::IoError(source) => source,
            _ => return false,
        };
        source.kind() == std::io::ErrorKind::PermissionDenied
    }

    /// Whether the device path is missing or not a gadget device.
    pub fn is_device_missing(&self) -> bool {
        match self {
            Self::DeviceNotFound(_) | Self::NotCharDevice(_) => true,
            Self::OpenError { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

//! Gadget character device and dry-run writers

use std::fs::{self, Metadata, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::hid_traits::ReportWriter;
use crate::{HidCommonError, HidCommonResult};

/// Verify that `path` exists and is a character device.
pub fn check_device(path: &Path) -> HidCommonResult<()> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => HidCommonError::DeviceNotFound(path.to_path_buf()),
        _ => HidCommonError::OpenError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !is_char_device(&metadata) {
        return Err(HidCommonError::NotCharDevice(path.to_path_buf()));
    }
    debug!(device = %path.display(), "gadget device present");
    Ok(())
}

#[cfg(unix)]
fn is_char_device(metadata: &Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    metadata.file_type().is_char_device()
}

#[cfg(not(unix))]
fn is_char_device(_metadata: &Metadata) -> bool {
    false
}

/// A `/dev/hidgN` endpoint.
///
/// The device is opened read-write for every report and closed again after
/// the single write. It is never created or truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GadgetDevice {
    path: PathBuf,
}

impl GadgetDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn check(&self) -> HidCommonResult<()> {
        check_device(&self.path)
    }
}

impl ReportWriter for GadgetDevice {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| HidCommonError::OpenError {
                path: self.path.clone(),
                source,
            })?;

        file.write(data).map_err(|source| HidCommonError::WriteError {
            path: self.path.clone(),
            source,
        })
    }
}

/// Prints each report as hex on its own line instead of writing it.
#[derive(Debug)]
pub struct DryRunWriter<O> {
    out: O,
}

impl DryRunWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<O: Write> DryRunWriter<O> {
    pub fn new(out: O) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> ReportWriter for DryRunWriter<O> {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let hex: Vec<String> = data.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(self.out, "{}", hex.join(" "))?;
        self.out.flush()?;
        Ok(data.len())
    }
}

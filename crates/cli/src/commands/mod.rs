//! Command implementations for the kinda CLI

pub mod device;
pub mod events;
pub mod keyboard;
pub mod mouse;

use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use kindavm_hid_common::{DryRunWriter, GadgetConfig, ReportSink, ReportTransport, check_device};
use tracing::debug;

use crate::error::CliError;

#[derive(Subcommand)]
pub enum MouseCommands {
    /// Move the cursor by a relative offset (clamped to -127..=127)
    #[command(allow_negative_numbers = true)]
    Move { x: i64, y: i64 },

    /// Click a button one or more times
    Click {
        /// left, right or middle
        #[arg(default_value = "left")]
        button: String,
        #[arg(default_value_t = 1)]
        count: u32,
    },

    /// Scroll the wheel (positive is up)
    #[command(allow_negative_numbers = true)]
    Scroll { amount: i64 },

    /// Drag by a relative offset with a button held
    #[command(allow_negative_numbers = true)]
    Drag {
        x: i32,
        y: i32,
        /// left, right or middle
        #[arg(default_value = "left")]
        button: String,
    },
}

/// Narrow a movement argument to `i32`, saturating at the bounds.
///
/// The encoders clamp again to the report range, so any integer is accepted.
pub fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Sink for report commands.
///
/// A dry run prints reports to stdout without pausing; otherwise the device
/// is checked once and every report is written to it.
pub fn open_sink(config: &GadgetConfig, dry_run: bool) -> Result<Box<dyn ReportSink>> {
    if dry_run {
        debug!("dry run, reports go to stdout");
        return Ok(Box::new(ReportTransport::new(
            DryRunWriter::stdout(),
            Duration::ZERO,
        )));
    }
    check_device(config.device_path())?;
    Ok(Box::new(config.open_transport()))
}

/// Parse an integer that fits in one byte.
///
/// Accepts decimal and `0x`, `0o` and `0b` prefixed values.
pub fn parse_byte(value: &str, what: &str) -> Result<u8, CliError> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    let parsed = u32::from_str_radix(digits, radix)
        .map_err(|e| CliError::ValidationError(format!("Invalid {what}: {trimmed} ({e})")))?;
    u8::try_from(parsed).ok().ok_or_else(|| {
        CliError::ValidationError(format!("Invalid {what}: {trimmed} (must be 0-255)"))
    })
}

//! Comprehensive tests for the kindavm-hid-common crate.
//!
//! Covers the transport against real files, dry-run output, mock writers
//! and sinks, configuration and error classification.

use std::fs;
use std::path::Path;
use std::time::Duration;

use kindavm_gadget_protocol::{HidReport, Modifier, MouseButton};
use kindavm_hid_common::{
    DryRunWriter, GadgetConfig, GadgetDevice, HidCommonError, ReportSink, ReportTransport,
    ReportWriter, check_device,
    hid_traits::mock::{MockWriter, RecordingSink},
};
use proptest::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// GadgetDevice against a regular file
// ---------------------------------------------------------------------------

#[test]
fn device_reopens_per_report() -> TestResult {
    let file = tempfile::NamedTempFile::new()?;
    let mut transport = ReportTransport::new(GadgetDevice::new(file.path()), Duration::ZERO);

    transport.send(&HidReport::system(0x01))?;
    transport.send(&HidReport::system_release())?;

    // Each report reopens at offset 0 without truncating, so the second
    // frame overwrites the first.
    assert_eq!(fs::read(file.path())?, vec![0x03, 0x00]);
    Ok(())
}

#[test]
fn device_preserves_existing_tail() -> TestResult {
    let file = tempfile::NamedTempFile::new()?;
    fs::write(file.path(), [0xAA; 12])?;

    let mut device = GadgetDevice::new(file.path());
    device.write_report(HidReport::keyboard_release().as_bytes())?;

    let contents = fs::read(file.path())?;
    assert_eq!(contents.len(), 12);
    assert_eq!(&contents[..9], &[0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&contents[9..], &[0xAA; 3]);
    Ok(())
}

#[test]
fn device_missing_maps_to_open_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut transport = ReportTransport::new(
        GadgetDevice::new(dir.path().join("hidg0")),
        Duration::ZERO,
    );
    let err = transport.send(&HidReport::mouse_release());
    assert!(matches!(err, Err(HidCommonError::OpenError { .. })));
    Ok(())
}

#[test]
fn check_device_on_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    assert!(matches!(
        check_device(dir.path()),
        Err(HidCommonError::NotCharDevice(_))
    ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn device_write_to_dev_null() -> TestResult {
    let device = GadgetDevice::new("/dev/null");
    device.check()?;
    let mut transport = ReportTransport::new(device, Duration::ZERO);
    transport.send(&HidReport::keyboard(Modifier::LEFT_CTRL, 0x1A))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

#[test]
fn dry_run_click_sequence() -> TestResult {
    let mut transport = ReportTransport::new(DryRunWriter::new(Vec::new()), Duration::ZERO);
    let press = HidReport::mouse(MouseButton::Right.bits(), 0, 0, 0);
    transport.send(&press)?;
    transport.send(&press.release())?;

    let out = String::from_utf8(transport.into_inner().into_inner())?;
    assert_eq!(out, "04 02 00 00 00\n04 00 00 00 00\n");
    Ok(())
}

// ---------------------------------------------------------------------------
// Mocks
// ---------------------------------------------------------------------------

#[test]
fn mock_writer_shared_history() -> TestResult {
    let writer = MockWriter::new();
    let mut transport = ReportTransport::new(writer.clone(), Duration::ZERO);

    transport.send(&HidReport::consumer([0x01, 0x00, 0x00]))?;
    transport.send(&HidReport::consumer_release())?;

    assert_eq!(
        writer.get_write_history(),
        vec![vec![0x02, 0x01, 0x00, 0x00], vec![0x02, 0x00, 0x00, 0x00]]
    );
    Ok(())
}

#[test]
fn mock_writer_disconnect_mid_sequence() -> TestResult {
    let writer = MockWriter::new();
    let mut transport = ReportTransport::new(writer.clone(), Duration::ZERO);

    transport.send(&HidReport::system(0x02))?;
    writer.disconnect();
    assert!(transport.send(&HidReport::system_release()).is_err());
    assert_eq!(writer.get_write_history().len(), 1);
    Ok(())
}

#[test]
fn recording_sink_failing_immediately() {
    let mut sink = RecordingSink::failing_after(0);
    assert!(matches!(
        sink.send(&HidReport::keyboard_release()),
        Err(HidCommonError::Disconnected)
    ));
    assert!(sink.reports().is_empty());
}

#[test]
fn recording_sink_frames_and_clear() -> TestResult {
    let mut sink = RecordingSink::new();
    sink.send(&HidReport::mouse(0, -1, 1, 0))?;
    assert_eq!(sink.frames(), vec![vec![0x04, 0x00, 0xFF, 0x01, 0x00]]);
    assert_eq!(sink.delays(), &[Duration::from_millis(10)]);

    sink.clear();
    assert!(sink.reports().is_empty());
    assert!(sink.delays().is_empty());
    Ok(())
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_json_round_trip() -> TestResult {
    let config = GadgetConfig::new("/dev/hidg2", 0);
    let json = serde_json::to_string(&config)?;
    assert_eq!(GadgetConfig::from_json(&json)?, config);
    Ok(())
}

#[test]
fn config_empty_object_is_default() -> TestResult {
    let config = GadgetConfig::from_json("{}")?;
    assert_eq!(config, GadgetConfig::default());
    assert_eq!(config.device_path(), Path::new("/dev/hidg0"));
    Ok(())
}

#[test]
fn config_malformed_is_invalid_config() {
    assert!(matches!(
        GadgetConfig::from_json("not json"),
        Err(HidCommonError::InvalidConfig(_))
    ));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Short writes are always reported, never silently accepted.
    #[test]
    fn prop_short_write_detected(limit in 0usize..9) {
        let writer = MockWriter::new();
        writer.truncate_writes(limit);
        let mut transport = ReportTransport::new(writer, Duration::ZERO);
        let result = transport.send(&HidReport::keyboard_release());
        let is_short_write = matches!(
            result,
            Err(HidCommonError::ShortWrite { expected: 9, written }) if written == limit
        );
        prop_assert!(is_short_write);
    }

    /// The dry-run line always has one hex pair per frame byte.
    #[test]
    fn prop_dry_run_pairs_match_length(buttons in any::<u8>(), x in any::<i32>(), y in any::<i32>()) {
        let mut writer = DryRunWriter::new(Vec::new());
        let report = HidReport::mouse(buttons, x, y, 0);
        let written = writer.write_report(report.as_bytes());
        prop_assert_eq!(written.ok(), Some(5));
        let out = String::from_utf8(writer.into_inner()).unwrap_or_default();
        prop_assert_eq!(out.trim_end().split(' ').count(), 5);
    }
}

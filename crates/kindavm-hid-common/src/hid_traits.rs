//! Report writer and sink traits

use std::thread;
use std::time::Duration;

use kindavm_gadget_protocol::HidReport;
use tracing::trace;

use crate::config::DEFAULT_SETTLE_DELAY;
use crate::{HidCommonError, HidCommonResult};

/// Raw byte sink for one report frame.
///
/// Implementations issue exactly one write per call and return the number
/// of bytes the device accepted.
pub trait ReportWriter {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;
}

impl<W: ReportWriter + ?Sized> ReportWriter for &mut W {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        (**self).write_report(data)
    }
}

impl<W: ReportWriter + ?Sized> ReportWriter for Box<W> {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        (**self).write_report(data)
    }
}

/// Destination for encoded reports.
///
/// Every `send` is followed by the sink's settle delay before it returns, so
/// a press and its release are never coalesced by the host.
pub trait ReportSink {
    fn send_with_delay(&mut self, report: &HidReport, settle: Duration) -> HidCommonResult<()>;

    fn settle_delay(&self) -> Duration;

    fn send(&mut self, report: &HidReport) -> HidCommonResult<()> {
        let settle = self.settle_delay();
        self.send_with_delay(report, settle)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn send_with_delay(&mut self, report: &HidReport, settle: Duration) -> HidCommonResult<()> {
        (**self).send_with_delay(report, settle)
    }

    fn settle_delay(&self) -> Duration {
        (**self).settle_delay()
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn send_with_delay(&mut self, report: &HidReport, settle: Duration) -> HidCommonResult<()> {
        (**self).send_with_delay(report, settle)
    }

    fn settle_delay(&self) -> Duration {
        (**self).settle_delay()
    }
}

/// Writes reports through a [`ReportWriter`] and sleeps for the settle delay.
#[derive(Debug)]
pub struct ReportTransport<W> {
    writer: W,
    settle_delay: Duration,
}

impl<W: ReportWriter> ReportTransport<W> {
    pub fn new(writer: W, settle_delay: Duration) -> Self {
        Self {
            writer,
            settle_delay,
        }
    }

    pub fn with_default_delay(writer: W) -> Self {
        Self::new(writer, DEFAULT_SETTLE_DELAY)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: ReportWriter> ReportSink for ReportTransport<W> {
    fn send_with_delay(&mut self, report: &HidReport, settle: Duration) -> HidCommonResult<()> {
        let bytes = report.as_bytes();
        let written = self.writer.write_report(bytes)?;
        if written != bytes.len() {
            return Err(HidCommonError::ShortWrite {
                expected: bytes.len(),
                written,
            });
        }
        trace!(report_id = report.report_id(), bytes = %report, "report written");

        if !settle.is_zero() {
            thread::sleep(settle);
        }
        Ok(())
    }

    fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}

pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory writer with a shared write history.
    ///
    /// Clones share state, so a test can keep one handle while a transport
    /// owns the other.
    #[derive(Debug, Clone)]
    pub struct MockWriter {
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
        accept_limit: Arc<Mutex<Option<usize>>>,
    }

    impl MockWriter {
        pub fn new() -> Self {
            Self {
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
                accept_limit: Arc::new(Mutex::new(None)),
            }
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }

        /// Accept at most `limit` bytes per write from now on.
        pub fn truncate_writes(&self, limit: usize) {
            let mut accept = self.accept_limit.lock().unwrap_or_else(|e| e.into_inner());
            *accept = Some(limit);
        }
    }

    impl Default for MockWriter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ReportWriter for MockWriter {
        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            let connected = *self.connected.lock().unwrap_or_else(|e| e.into_inner());
            if !connected {
                return Err(HidCommonError::Disconnected);
            }

            let limit = *self.accept_limit.lock().unwrap_or_else(|e| e.into_inner());
            let accepted = limit.map_or(data.len(), |limit| limit.min(data.len()));

            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(data.iter().take(accepted).copied().collect());
            Ok(accepted)
        }
    }

    /// Sink that records reports instead of writing them.
    ///
    /// Never sleeps. The delay each report would have waited is recorded
    /// alongside it.
    #[derive(Debug, Clone)]
    pub struct RecordingSink {
        reports: Vec<HidReport>,
        delays: Vec<Duration>,
        settle_delay: Duration,
        fail_from: Option<usize>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::with_settle_delay(DEFAULT_SETTLE_DELAY)
        }

        pub fn with_settle_delay(settle_delay: Duration) -> Self {
            Self {
                reports: Vec::new(),
                delays: Vec::new(),
                settle_delay,
                fail_from: None,
            }
        }

        /// Fail every send once `count` reports have been recorded.
        pub fn failing_after(count: usize) -> Self {
            Self {
                fail_from: Some(count),
                ..Self::new()
            }
        }

        pub fn reports(&self) -> &[HidReport] {
            &self.reports
        }

        pub fn delays(&self) -> &[Duration] {
            &self.delays
        }

        pub fn frames(&self) -> Vec<Vec<u8>> {
            self.reports.iter().map(|r| r.as_bytes().to_vec()).collect()
        }

        pub fn clear(&mut self) {
            self.reports.clear();
            self.delays.clear();
        }
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ReportSink for RecordingSink {
        fn send_with_delay(
            &mut self,
            report: &HidReport,
            settle: Duration,
        ) -> HidCommonResult<()> {
            if self.fail_from.is_some_and(|n| self.reports.len() >= n) {
                return Err(HidCommonError::Disconnected);
            }
            self.reports.push(*report);
            self.delays.push(settle);
            Ok(())
        }

        fn settle_delay(&self) -> Duration {
            self.settle_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockWriter, RecordingSink};
    use super::*;
    use kindavm_gadget_protocol::{Modifier, MouseButton};
    use std::time::Instant;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_mock_writer_write() -> TestResult {
        let mut writer = MockWriter::new();
        let written = writer.write_report(&[0x03, 0x01])?;
        assert_eq!(written, 2);
        assert_eq!(writer.get_write_history(), vec![vec![0x03, 0x01]]);
        Ok(())
    }

    #[test]
    fn test_mock_writer_disconnect() {
        let mut writer = MockWriter::new();
        writer.disconnect();
        assert!(matches!(
            writer.write_report(&[0x03, 0x00]),
            Err(HidCommonError::Disconnected)
        ));
        writer.reconnect();
        assert!(writer.write_report(&[0x03, 0x00]).is_ok());
    }

    #[test]
    fn test_transport_writes_exact_frame() -> TestResult {
        let writer = MockWriter::new();
        let mut transport = ReportTransport::new(writer.clone(), Duration::ZERO);

        transport.send(&HidReport::keyboard(Modifier::LEFT_SHIFT, 0x04))?;
        transport.send(&HidReport::keyboard_release())?;

        let history = writer.get_write_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], vec![0x01, 0x02, 0x00, 0x04, 0, 0, 0, 0, 0]);
        assert_eq!(history[1], vec![0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_transport_rejects_short_write() {
        let writer = MockWriter::new();
        writer.truncate_writes(3);
        let mut transport = ReportTransport::new(writer, Duration::ZERO);

        let result = transport.send(&HidReport::mouse(MouseButton::Left.bits(), 1, 1, 0));
        assert!(matches!(
            result,
            Err(HidCommonError::ShortWrite {
                expected: 5,
                written: 3
            })
        ));
    }

    #[test]
    fn test_transport_propagates_writer_error() {
        let writer = MockWriter::new();
        writer.disconnect();
        let mut transport = ReportTransport::with_default_delay(writer);
        assert!(matches!(
            transport.send(&HidReport::system_release()),
            Err(HidCommonError::Disconnected)
        ));
    }

    #[test]
    fn test_transport_sleeps_for_settle_delay() -> TestResult {
        let delay = Duration::from_millis(5);
        let mut transport = ReportTransport::new(MockWriter::new(), delay);
        assert_eq!(transport.settle_delay(), delay);

        let start = Instant::now();
        transport.send(&HidReport::consumer_release())?;
        assert!(start.elapsed() >= delay);
        Ok(())
    }

    #[test]
    fn test_recording_sink_fails_from_nth_send() -> TestResult {
        let mut sink = RecordingSink::failing_after(1);
        sink.send(&HidReport::system_release())?;
        assert!(sink.send(&HidReport::system_release()).is_err());
        assert_eq!(sink.reports().len(), 1);
        Ok(())
    }

    #[test]
    fn test_recording_sink_records_delays() -> TestResult {
        let mut sink = RecordingSink::with_settle_delay(Duration::from_millis(20));
        sink.send(&HidReport::mouse_release())?;
        sink.send_with_delay(&HidReport::mouse_release(), Duration::ZERO)?;
        assert_eq!(
            sink.delays(),
            &[Duration::from_millis(20), Duration::ZERO]
        );
        Ok(())
    }

    #[test]
    fn test_sink_through_mut_reference() -> TestResult {
        fn send_twice<S: ReportSink + ?Sized>(sink: &mut S) -> HidCommonResult<()> {
            sink.send(&HidReport::keyboard_release())?;
            sink.send(&HidReport::keyboard_release())
        }

        let mut sink = RecordingSink::new();
        let mut boxed: Box<dyn ReportSink> = Box::new(RecordingSink::new());
        send_twice(&mut sink)?;
        send_twice(boxed.as_mut())?;
        assert_eq!(sink.reports().len(), 2);
        Ok(())
    }
}

//! System control encoder (power, sleep, wake)

use kindavm_gadget_protocol::{HidReport, SystemControl};
use kindavm_hid_common::{HidCommonResult, ReportSink};
use tracing::debug;

pub fn send_control<S: ReportSink + ?Sized>(
    sink: &mut S,
    control: SystemControl,
) -> HidCommonResult<()> {
    debug!(%control, "system control");
    sink.send(&HidReport::system_control(control))?;
    sink.send(&HidReport::system_release())
}

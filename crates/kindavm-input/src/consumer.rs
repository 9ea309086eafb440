//! Consumer control encoder (media, volume, brightness, browser, eject)

use kindavm_gadget_protocol::{ConsumerControl, HidReport};
use kindavm_hid_common::{HidCommonResult, ReportSink};
use tracing::debug;

pub fn send_control<S: ReportSink + ?Sized>(
    sink: &mut S,
    control: ConsumerControl,
) -> HidCommonResult<()> {
    debug!(%control, "consumer control");
    send_bits(sink, control.bits())
}

/// Press several controls in one frame, then release them together.
pub fn send_controls<S: ReportSink + ?Sized>(
    sink: &mut S,
    controls: &[ConsumerControl],
) -> HidCommonResult<()> {
    debug!(count = controls.len(), "consumer controls");
    send_bits(sink, ConsumerControl::combine(controls))
}

pub fn send_bits<S: ReportSink + ?Sized>(sink: &mut S, bits: [u8; 3]) -> HidCommonResult<()> {
    sink.send(&HidReport::consumer(bits))?;
    sink.send(&HidReport::consumer_release())
}

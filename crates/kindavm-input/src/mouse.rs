//! Mouse encoder
//!
//! Mouse frames are `[0x04, buttons, x, y, wheel]` with each delta clamped
//! to [-127, 127].

use kindavm_gadget_protocol::{DragPath, HidReport, MouseButton};
use kindavm_hid_common::{HidCommonResult, ReportSink};
use tracing::debug;

/// Relative move with no buttons held.
pub fn move_by<S: ReportSink + ?Sized>(sink: &mut S, x: i32, y: i32) -> HidCommonResult<()> {
    debug!(x, y, "mouse move");
    sink.send(&HidReport::mouse(0, x, y, 0))
}

/// Press and release `button` `count` times. A count of zero sends nothing.
pub fn click<S: ReportSink + ?Sized>(
    sink: &mut S,
    button: MouseButton,
    count: u32,
) -> HidCommonResult<()> {
    debug!(%button, count, "mouse click");
    for _ in 0..count {
        press(sink, button.bits())?;
        release(sink)?;
    }
    Ok(())
}

pub fn scroll<S: ReportSink + ?Sized>(sink: &mut S, amount: i32) -> HidCommonResult<()> {
    debug!(amount, "mouse scroll");
    sink.send(&HidReport::mouse(0, 0, 0, amount))
}

/// Hold `button`, walk the total displacement in single-count steps, then
/// release.
///
/// The total is not clamped; it is split by [`DragPath`] so that the steps
/// sum to exactly `(x, y)`.
pub fn drag<S: ReportSink + ?Sized>(
    sink: &mut S,
    x: i32,
    y: i32,
    button: MouseButton,
) -> HidCommonResult<()> {
    let bits = button.bits();
    let path = DragPath::new(x, y);
    debug!(x, y, %button, steps = path.steps(), "mouse drag");

    press(sink, bits)?;
    for (dx, dy) in path {
        move_with_buttons(sink, bits, dx, dy)?;
    }
    release(sink)
}

/// Hold the given button bits without moving.
pub fn press<S: ReportSink + ?Sized>(sink: &mut S, buttons: u8) -> HidCommonResult<()> {
    sink.send(&HidReport::mouse(buttons, 0, 0, 0))
}

/// Release every button.
pub fn release<S: ReportSink + ?Sized>(sink: &mut S) -> HidCommonResult<()> {
    sink.send(&HidReport::mouse_release())
}

pub fn move_with_buttons<S: ReportSink + ?Sized>(
    sink: &mut S,
    buttons: u8,
    x: i32,
    y: i32,
) -> HidCommonResult<()> {
    sink.send(&HidReport::mouse(buttons, x, y, 0))
}

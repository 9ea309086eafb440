//! Keyboard encoder
//!
//! Keyboard frames are `[0x01, modifier, 0x00, key1..key6]`. A key send is
//! the press frame followed by an all-zero release frame.

use kindavm_gadget_protocol::keymap::{Keystroke, plan_text};
use kindavm_gadget_protocol::{HidReport, Modifier, Shortcut};
use kindavm_hid_common::{HidCommonResult, ReportSink};
use tracing::{debug, warn};

/// Counts from one [`type_string`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingSummary {
    pub typed: usize,
    pub skipped: usize,
}

/// Send the press half only. At most six keycodes are reported.
pub fn press<S: ReportSink + ?Sized>(
    sink: &mut S,
    modifier: Modifier,
    keycodes: &[u8],
) -> HidCommonResult<()> {
    sink.send(&HidReport::keyboard_keys(modifier, keycodes))
}

/// Send the all-keys-up frame.
pub fn release<S: ReportSink + ?Sized>(sink: &mut S) -> HidCommonResult<()> {
    sink.send(&HidReport::keyboard_release())
}

/// Press and release one key. The keycode is sent verbatim.
pub fn send_key<S: ReportSink + ?Sized>(
    sink: &mut S,
    keycode: u8,
    modifier: Modifier,
) -> HidCommonResult<()> {
    debug!(keycode, modifier = modifier.bits(), "send key");
    press(sink, modifier, &[keycode])?;
    release(sink)
}

/// Type `text` through the US keymap.
///
/// `\n`, `\t` and `\b` written as two characters are expanded once before
/// typing. Characters with no keymap entry are skipped with a warning; any
/// transport failure stops typing immediately.
pub fn type_string<S: ReportSink + ?Sized>(
    sink: &mut S,
    text: &str,
) -> HidCommonResult<TypingSummary> {
    let mut summary = TypingSummary::default();
    for stroke in plan_text(text) {
        match stroke {
            Keystroke::Mapped { entry, .. } => {
                send_key(sink, entry.keycode, entry.modifier())?;
                summary.typed += 1;
            }
            Keystroke::Unmapped(c) => {
                warn!("Character {c:?} not in keymap, skipping");
                summary.skipped += 1;
            }
        }
    }
    debug!(typed = summary.typed, skipped = summary.skipped, "typed string");
    Ok(summary)
}

pub fn send_shortcut<S: ReportSink + ?Sized>(
    sink: &mut S,
    shortcut: Shortcut,
) -> HidCommonResult<()> {
    let (modifier, keycode) = shortcut.chord();
    send_key(sink, keycode, modifier)
}

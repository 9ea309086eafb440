//! Fixed-layout report frames.
//!
//! All constructors are pure and allocation-free. A [`HidReport`] always has
//! exactly the wire length its report ID declares; the enum makes any other
//! length unrepresentable.

use core::fmt;

use crate::ids::{MAX_MOVEMENT, report_ids, report_lengths};
use crate::types::{Modifier, SystemControl};
use crate::{GadgetProtocolError, GadgetResult};

/// Clamp a signed axis or wheel delta into the single-report range `[-127, 127]`.
///
/// Out-of-range values saturate; they are never rejected and never wrap.
pub fn clamp_movement(value: i32) -> i8 {
    // In range after the clamp, so the narrowing cannot truncate.
    value.clamp(-MAX_MOVEMENT, MAX_MOVEMENT) as i8
}

/// Wire byte for a delta: the two's-complement byte of the clamped value.
pub fn movement_byte(value: i32) -> u8 {
    clamp_movement(value).cast_unsigned()
}

/// Wire length for a report ID, or `None` when the gadget does not declare it.
pub const fn report_length(report_id: u8) -> Option<usize> {
    match report_id {
        report_ids::KEYBOARD => Some(report_lengths::KEYBOARD),
        report_ids::CONSUMER => Some(report_lengths::CONSUMER),
        report_ids::SYSTEM => Some(report_lengths::SYSTEM),
        report_ids::MOUSE => Some(report_lengths::MOUSE),
        _ => None,
    }
}

/// One complete report frame, report ID first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HidReport {
    Keyboard([u8; report_lengths::KEYBOARD]),
    Consumer([u8; report_lengths::CONSUMER]),
    System([u8; report_lengths::SYSTEM]),
    Mouse([u8; report_lengths::MOUSE]),
}

/// Decoded fields of a mouse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseFields {
    pub buttons: u8,
    pub x: i8,
    pub y: i8,
    pub wheel: i8,
}

impl HidReport {
    /// Keyboard frame with a single keycode in the first key slot.
    ///
    /// The keycode is passed through verbatim; any byte is accepted.
    pub fn keyboard(modifier: Modifier, keycode: u8) -> Self {
        Self::keyboard_keys(modifier, &[keycode])
    }

    /// Keyboard frame with up to six simultaneous keycodes. Extra keycodes are dropped.
    pub fn keyboard_keys(modifier: Modifier, keycodes: &[u8]) -> Self {
        let mut frame = [0u8; report_lengths::KEYBOARD];
        let [id, modifier_byte, _reserved, slots @ ..] = &mut frame;
        *id = report_ids::KEYBOARD;
        *modifier_byte = modifier.bits();
        for (slot, keycode) in slots.iter_mut().zip(keycodes) {
            *slot = *keycode;
        }
        Self::Keyboard(frame)
    }

    pub fn keyboard_release() -> Self {
        Self::Keyboard(zeroed(report_ids::KEYBOARD))
    }

    /// Mouse frame. Each of `x`, `y` and `wheel` is clamped independently.
    pub fn mouse(buttons: u8, x: i32, y: i32, wheel: i32) -> Self {
        Self::Mouse([
            report_ids::MOUSE,
            buttons,
            movement_byte(x),
            movement_byte(y),
            movement_byte(wheel),
        ])
    }

    pub fn mouse_release() -> Self {
        Self::Mouse(zeroed(report_ids::MOUSE))
    }

    /// Consumer frame from raw payload bytes (see [`crate::ConsumerControl::bits`]).
    pub fn consumer(bits: [u8; 3]) -> Self {
        let [media, browser, extra] = bits;
        Self::Consumer([report_ids::CONSUMER, media, browser, extra])
    }

    pub fn consumer_release() -> Self {
        Self::Consumer(zeroed(report_ids::CONSUMER))
    }

    pub fn system(buttons: u8) -> Self {
        Self::System([report_ids::SYSTEM, buttons])
    }

    pub fn system_control(control: SystemControl) -> Self {
        Self::system(control.bits())
    }

    pub fn system_release() -> Self {
        Self::System(zeroed(report_ids::SYSTEM))
    }

    /// Decode and length-check a raw frame.
    ///
    /// # Errors
    ///
    /// [`GadgetProtocolError::UnknownReportId`] for an undeclared leading byte,
    /// [`GadgetProtocolError::InvalidReportSize`] when the length does not
    /// match the report ID.
    pub fn parse(data: &[u8]) -> GadgetResult<Self> {
        let Some(&report_id) = data.first() else {
            return Err(GadgetProtocolError::InvalidReportSize {
                expected: 1,
                actual: 0,
            });
        };
        match report_id {
            report_ids::KEYBOARD => fixed(data).map(Self::Keyboard),
            report_ids::CONSUMER => fixed(data).map(Self::Consumer),
            report_ids::SYSTEM => fixed(data).map(Self::System),
            report_ids::MOUSE => fixed(data).map(Self::Mouse),
            other => Err(GadgetProtocolError::UnknownReportId(other)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Keyboard(frame) => frame.as_slice(),
            Self::Consumer(frame) => frame.as_slice(),
            Self::System(frame) => frame.as_slice(),
            Self::Mouse(frame) => frame.as_slice(),
        }
    }

    pub fn report_id(&self) -> u8 {
        match self {
            Self::Keyboard(_) => report_ids::KEYBOARD,
            Self::Consumer(_) => report_ids::CONSUMER,
            Self::System(_) => report_ids::SYSTEM,
            Self::Mouse(_) => report_ids::MOUSE,
        }
    }

    /// Number of bytes on the wire, report ID included.
    pub fn wire_len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Bytes following the report ID.
    pub fn payload(&self) -> &[u8] {
        self.as_bytes().get(1..).unwrap_or_default()
    }

    /// The all-zero frame of the same report ID and length.
    pub fn release(&self) -> Self {
        match self {
            Self::Keyboard(_) => Self::keyboard_release(),
            Self::Consumer(_) => Self::consumer_release(),
            Self::System(_) => Self::system_release(),
            Self::Mouse(_) => Self::mouse_release(),
        }
    }

    pub fn is_release(&self) -> bool {
        self.payload().iter().all(|b| *b == 0)
    }

    /// Modifier and first keycode of a keyboard frame.
    pub fn keyboard_key(&self) -> Option<(Modifier, u8)> {
        match self {
            Self::Keyboard([_, modifier, _, keycode, ..]) => {
                Some((Modifier::from_bits(*modifier), *keycode))
            }
            _ => None,
        }
    }

    pub fn mouse_fields(&self) -> Option<MouseFields> {
        match self {
            Self::Mouse([_, buttons, x, y, wheel]) => Some(MouseFields {
                buttons: *buttons,
                x: x.cast_signed(),
                y: y.cast_signed(),
                wheel: wheel.cast_signed(),
            }),
            _ => None,
        }
    }

    /// Space-separated lowercase hex, e.g. `04 01 ff 00 00`.
    pub fn to_hex(&self) -> String {
        self.as_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AsRef<[u8]> for HidReport {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for HidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for HidReport {
    type Error = GadgetProtocolError;

    fn try_from(data: &[u8]) -> GadgetResult<Self> {
        Self::parse(data)
    }
}

fn zeroed<const N: usize>(report_id: u8) -> [u8; N] {
    let mut frame = [0u8; N];
    if let Some(first) = frame.first_mut() {
        *first = report_id;
    }
    frame
}

fn fixed<const N: usize>(data: &[u8]) -> GadgetResult<[u8; N]> {
    <[u8; N]>::try_from(data).map_err(|_mismatch| GadgetProtocolError::InvalidReportSize {
        expected: N,
        actual: data.len(),
    })
}

//! Report encoding for a composite USB HID gadget (keyboard, mouse,
//! consumer control, system control).
//!
//! This crate is intentionally I/O-free. It turns high-level intents into
//! fixed-layout report frames and leaves the writing to a transport.
//!
//! ## Contents
//! - [`HidReport`]: the four report layouts, with press and release frames
//! - [`keymap`]: US-layout character table and the `\n`/`\t`/`\b` escape pre-pass
//! - [`DragPath`]: truncating interpolation of a drag into single-count steps
//! - [`SpecialAction`]: named navigation, media and power keys
//! - [`browser`]: `KeyboardEvent.code` to usage ID table

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod browser;
pub mod drag;
pub mod ids;
pub mod keymap;
pub mod report;
pub mod special;
pub mod types;

pub use drag::DragPath;
pub use ids::{MAX_KEYCODES, MAX_MOVEMENT, report_ids, report_lengths};
pub use keymap::{KeyMapEntry, Keystroke, expand_escapes, plan_text};
pub use report::{HidReport, MouseFields, clamp_movement, movement_byte, report_length};
pub use special::{Shortcut, SpecialAction, SpecialKey};
pub use types::{ConsumerControl, Modifier, MouseButton, SystemControl};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GadgetProtocolError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Unknown report ID: {0:#04x}")]
    UnknownReportId(u8),

    #[error("Invalid button: {0}. Must be 'left', 'right', or 'middle'")]
    InvalidButton(String),

    #[error("Unknown special key: {0}")]
    UnknownSpecialKey(String),

    #[error("Unknown consumer control: {0}")]
    UnknownConsumerControl(String),

    #[error("Unknown system control: {0}")]
    UnknownSystemControl(String),
}

pub type GadgetResult<T> = Result<T, GadgetProtocolError>;

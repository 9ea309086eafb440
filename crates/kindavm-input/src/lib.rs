//! High-level input encoders for the KindaVM HID gadget.
//!
//! Every encoder is a free function over a [`ReportSink`]: it builds the
//! press frame, sends it, then sends the all-zero release frame of the same
//! report ID. None of them keep state between calls. The one stateful piece
//! is [`EventHandler`], which tracks held keys and buttons while translating
//! a stream of browser events.
//!
//! [`ReportSink`]: kindavm_hid_common::ReportSink

#![deny(clippy::unwrap_used)]

pub mod consumer;
pub mod events;
pub mod keyboard;
pub mod mouse;
pub mod special;
pub mod system;

pub use events::{BrowserEvent, EventHandler, EventType};
pub use keyboard::TypingSummary;

use kindavm_gadget_protocol::GadgetProtocolError;
use kindavm_hid_common::HidCommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Protocol(#[from] GadgetProtocolError),

    #[error(transparent)]
    Transport(#[from] HidCommonError),

    #[error("Failed to parse event")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("{event} event missing {field}")]
    MissingField {
        event: &'static str,
        field: &'static str,
    },
}

impl InputError {
    /// Validation failures are detected before any report is sent.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }
}

pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InputError::MissingField {
            event: "keydown",
            field: "code",
        };
        assert_eq!(err.to_string(), "keydown event missing code");

        let err = InputError::from(GadgetProtocolError::InvalidButton("back".into()));
        assert_eq!(
            err.to_string(),
            "Invalid button: back. Must be 'left', 'right', or 'middle'"
        );
        assert!(err.is_validation());
        assert!(!InputError::from(HidCommonError::Disconnected).is_validation());
    }
}

//! Error types and exit codes for the kinda CLI

use anyhow::Error;
use kindavm_gadget_protocol::GadgetProtocolError;
use kindavm_hid_common::HidCommonError;
use kindavm_input::InputError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No text provided. Pass text as arguments or pipe it on stdin")]
    NoText,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_DEVICE_MISSING: i32 = 2;
pub const EXIT_VALIDATION: i32 = 4;
pub const EXIT_PERMISSION_DENIED: i32 = 6;

/// Map an error to the process exit code.
pub fn exit_code(error: &Error) -> i32 {
    if let Some(err) = error.downcast_ref::<CliError>() {
        return match err {
            CliError::ValidationError(_) | CliError::NoText => EXIT_VALIDATION,
            CliError::IoError(_) => EXIT_FAILURE,
        };
    }
    if error.downcast_ref::<GadgetProtocolError>().is_some() {
        return EXIT_VALIDATION;
    }
    if let Some(err) = error.downcast_ref::<HidCommonError>() {
        return transport_exit_code(err);
    }
    match error.downcast_ref::<InputError>() {
        Some(InputError::Transport(err)) => transport_exit_code(err),
        Some(_) => EXIT_VALIDATION,
        None => EXIT_FAILURE,
    }
}

fn transport_exit_code(err: &HidCommonError) -> i32 {
    if err.is_device_missing() {
        EXIT_DEVICE_MISSING
    } else if err.is_permission_denied() {
        EXIT_PERMISSION_DENIED
    } else {
        EXIT_FAILURE
    }
}

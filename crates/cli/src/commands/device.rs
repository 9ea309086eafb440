//! Device presence check

use anyhow::Result;
use kindavm_hid_common::{GadgetConfig, check_device};

use crate::output;

pub fn check(config: &GadgetConfig, json: bool) -> Result<()> {
    let path = config.device_path();
    check_device(path)?;
    output::print_success(
        &format!("HID gadget device ready at {}", path.display()),
        json,
    );
    Ok(())
}

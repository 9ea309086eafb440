//! Mouse commands

use anyhow::Result;
use kindavm_gadget_protocol::MouseButton;
use kindavm_hid_common::ReportSink;
use kindavm_input::mouse;

use super::{MouseCommands, saturate_i32};

pub fn execute(sink: &mut dyn ReportSink, cmd: &MouseCommands) -> Result<()> {
    match cmd {
        MouseCommands::Move { x, y } => {
            mouse::move_by(sink, saturate_i32(*x), saturate_i32(*y))?;
        }
        MouseCommands::Click { button, count } => {
            let button: MouseButton = button.parse()?;
            mouse::click(sink, button, *count)?;
        }
        MouseCommands::Scroll { amount } => mouse::scroll(sink, saturate_i32(*amount))?,
        MouseCommands::Drag { x, y, button } => {
            let button: MouseButton = button.parse()?;
            mouse::drag(sink, *x, *y, button)?;
        }
    }
    Ok(())
}

//! Keyboard commands: type, special-key, raw-key

use std::io::{self, IsTerminal, Read};

use anyhow::Result;
use kindavm_gadget_protocol::{Modifier, SpecialAction};
use kindavm_hid_common::ReportSink;
use kindavm_input::{keyboard, special};
use tracing::info;

use super::parse_byte;
use crate::error::CliError;

pub const SPECIAL_KEY_HELP: &str = "\
Special keys:
  Navigation: f1-f12, esc, home, end, pageup, pagedown, insert, delete,
              up, down, left, right, printscreen, scrolllock, pause
  Media:      play, next, prev, stop
  Volume:     volume-up, volume-down, mute
  Brightness: brightness-up, brightness-down
  Power:      power, sleep, wake";

pub fn type_text(sink: &mut dyn ReportSink, words: &[String]) -> Result<()> {
    let text = if words.is_empty() {
        read_piped_stdin()?
    } else {
        words.join(" ")
    };

    let summary = keyboard::type_string(sink, &text)?;
    info!(
        typed = summary.typed,
        skipped = summary.skipped,
        "typing finished"
    );
    Ok(())
}

fn read_piped_stdin() -> Result<String, CliError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoText);
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}

pub fn special_key(sink: &mut dyn ReportSink, name: &str) -> Result<()> {
    let action: SpecialAction = name.parse()?;
    special::perform(sink, action)?;
    Ok(())
}

pub fn raw_key(sink: &mut dyn ReportSink, keycode: &str, modifier: Option<&str>) -> Result<()> {
    let keycode = parse_byte(keycode, "keycode")?;
    let modifier = modifier
        .map(|m| parse_byte(m, "modifier"))
        .transpose()?
        .map_or(Modifier::NONE, Modifier::from_bits);
    keyboard::send_key(sink, keycode, modifier)?;
    Ok(())
}

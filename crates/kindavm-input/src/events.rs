//! Translation of browser input events into HID reports.
//!
//! Events arrive as JSON objects such as
//! `{"type": "keydown", "code": "KeyA", "modifiers": ["shift"]}`. Unlike the
//! one-shot encoders, [`EventHandler`] keeps the set of held keys and mouse
//! buttons so that overlapping presses are reported together.

use kindavm_gadget_protocol::{
    ConsumerControl, GadgetProtocolError, MAX_KEYCODES, Modifier, MouseButton, Shortcut, browser,
};
use kindavm_hid_common::ReportSink;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{InputError, InputResult, consumer, keyboard, mouse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Keydown,
    Keyup,
    Mousemove,
    Mousedown,
    Mouseup,
    Wheel,
    BrightnessUp,
    BrightnessDown,
    VolumeUp,
    VolumeDown,
    CtrlW,
    CtrlT,
    CtrlN,
    CtrlTab,
    CtrlShiftTab,
    CtrlShiftT,
    CtrlQ,
    CtrlF4,
    AltF4,
    F11,
}

impl EventType {
    pub const fn shortcut(self) -> Option<Shortcut> {
        match self {
            Self::CtrlW => Some(Shortcut::CtrlW),
            Self::CtrlT => Some(Shortcut::CtrlT),
            Self::CtrlN => Some(Shortcut::CtrlN),
            Self::CtrlTab => Some(Shortcut::CtrlTab),
            Self::CtrlShiftTab => Some(Shortcut::CtrlShiftTab),
            Self::CtrlShiftT => Some(Shortcut::CtrlShiftT),
            Self::CtrlQ => Some(Shortcut::CtrlQ),
            Self::CtrlF4 => Some(Shortcut::CtrlF4),
            Self::AltF4 => Some(Shortcut::AltF4),
            Self::F11 => Some(Shortcut::F11),
            _ => None,
        }
    }

    pub const fn consumer_control(self) -> Option<ConsumerControl> {
        match self {
            Self::BrightnessUp => Some(ConsumerControl::BrightnessUp),
            Self::BrightnessDown => Some(ConsumerControl::BrightnessDown),
            Self::VolumeUp => Some(ConsumerControl::VolumeUp),
            Self::VolumeDown => Some(ConsumerControl::VolumeDown),
            _ => None,
        }
    }
}

/// One event from the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// `KeyboardEvent.code` for key events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// `left`/`middle`/`right` or the `MouseEvent.button` index as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    #[serde(default)]
    pub delta: i32,
}

impl BrowserEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            code: None,
            modifiers: Vec::new(),
            x: 0,
            y: 0,
            button: None,
            delta: 0,
        }
    }

    pub fn from_json(json: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn modifier(&self) -> Modifier {
        self.modifiers
            .iter()
            .filter_map(|name| Modifier::from_browser_name(name))
            .fold(Modifier::NONE, |acc, m| acc | m)
    }
}

/// Stateful translator from browser events to reports.
#[derive(Debug)]
pub struct EventHandler<S> {
    sink: S,
    held_keys: Vec<String>,
    held_buttons: Vec<MouseButton>,
}

impl<S: ReportSink> EventHandler<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            held_keys: Vec::new(),
            held_buttons: Vec::new(),
        }
    }

    /// Key codes currently held, oldest first.
    pub fn held_keys(&self) -> &[String] {
        &self.held_keys
    }

    pub fn held_buttons(&self) -> &[MouseButton] {
        &self.held_buttons
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn handle_json(&mut self, json: &str) -> InputResult<()> {
        let event = BrowserEvent::from_json(json)?;
        self.handle_event(&event)
    }

    pub fn handle_event(&mut self, event: &BrowserEvent) -> InputResult<()> {
        trace!(?event, "browser event");
        match event.event_type {
            EventType::Keydown => self.key_down(event),
            EventType::Keyup => self.key_up(event),
            EventType::Mousemove => self.mouse_move(event),
            EventType::Mousedown => self.mouse_down(event),
            EventType::Mouseup => self.mouse_up(event),
            EventType::Wheel => {
                mouse::scroll(&mut self.sink, event.delta)?;
                Ok(())
            }
            other => {
                if let Some(control) = other.consumer_control() {
                    consumer::send_control(&mut self.sink, control)?;
                } else if let Some(shortcut) = other.shortcut() {
                    keyboard::send_shortcut(&mut self.sink, shortcut)?;
                }
                Ok(())
            }
        }
    }

    fn key_down(&mut self, event: &BrowserEvent) -> InputResult<()> {
        let code = required(event.code.as_deref(), "keydown", "code")?;
        if !self.held_keys.iter().any(|held| held == code) {
            self.held_keys.push(code.to_string());
        }
        if browser::keycode_for_code(code).is_none() {
            debug!(code, "no HID usage for key code");
        }
        let keycodes = self.held_keycodes();
        keyboard::press(&mut self.sink, event.modifier(), &keycodes)?;
        Ok(())
    }

    fn key_up(&mut self, event: &BrowserEvent) -> InputResult<()> {
        let code = required(event.code.as_deref(), "keyup", "code")?;
        self.held_keys.retain(|held| held != code);

        let modifier = event.modifier();
        let keycodes = self.held_keycodes();
        if keycodes.is_empty() && modifier.is_empty() {
            keyboard::release(&mut self.sink)?;
        } else {
            keyboard::press(&mut self.sink, modifier, &keycodes)?;
        }
        Ok(())
    }

    fn mouse_move(&mut self, event: &BrowserEvent) -> InputResult<()> {
        let buttons = self.button_bits();
        if buttons == 0 {
            mouse::move_by(&mut self.sink, event.x, event.y)?;
        } else {
            mouse::move_with_buttons(&mut self.sink, buttons, event.x, event.y)?;
        }
        Ok(())
    }

    fn mouse_down(&mut self, event: &BrowserEvent) -> InputResult<()> {
        let button = event_button(event, "mousedown")?;
        if !self.held_buttons.contains(&button) {
            self.held_buttons.push(button);
        }
        let buttons = self.button_bits();
        mouse::press(&mut self.sink, buttons)?;
        Ok(())
    }

    fn mouse_up(&mut self, event: &BrowserEvent) -> InputResult<()> {
        let button = event_button(event, "mouseup")?;
        self.held_buttons.retain(|held| *held != button);

        if self.held_buttons.is_empty() {
            mouse::release(&mut self.sink)?;
        } else {
            let buttons = self.button_bits();
            mouse::press(&mut self.sink, buttons)?;
        }
        Ok(())
    }

    /// Usage IDs of held keys with a known mapping, capped at six.
    fn held_keycodes(&self) -> Vec<u8> {
        self.held_keys
            .iter()
            .filter_map(|code| browser::keycode_for_code(code))
            .take(MAX_KEYCODES)
            .collect()
    }

    fn button_bits(&self) -> u8 {
        self.held_buttons
            .iter()
            .fold(0, |bits, button| bits | button.bits())
    }
}

fn required<'a>(
    value: Option<&'a str>,
    event: &'static str,
    field: &'static str,
) -> InputResult<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(InputError::MissingField { event, field })
}

fn event_button(event: &BrowserEvent, kind: &'static str) -> InputResult<MouseButton> {
    let name = required(event.button.as_deref(), kind, "button")?;
    MouseButton::from_browser_name(name)
        .ok_or_else(|| GadgetProtocolError::InvalidButton(name.to_string()).into())
}

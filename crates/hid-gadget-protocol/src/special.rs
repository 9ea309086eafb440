//! Named non-printing keys, the special-key command set and fixed shortcuts.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GadgetProtocolError;
use crate::ids::keycodes;
use crate::types::{ConsumerControl, Modifier, SystemControl};

/// Navigation and function keys reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialKey {
    Esc,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    Delete,
    End,
    PageDown,
    Right,
    Left,
    Down,
    Up,
}

impl SpecialKey {
    pub const ALL: [Self; 26] = [
        Self::Esc,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
        Self::PrintScreen,
        Self::ScrollLock,
        Self::Pause,
        Self::Insert,
        Self::Home,
        Self::PageUp,
        Self::Delete,
        Self::End,
        Self::PageDown,
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
    ];

    pub const fn keycode(self) -> u8 {
        match self {
            Self::Esc => keycodes::ESCAPE,
            Self::F1 => keycodes::F1,
            Self::F2 => keycodes::F2,
            Self::F3 => keycodes::F3,
            Self::F4 => keycodes::F4,
            Self::F5 => keycodes::F5,
            Self::F6 => keycodes::F6,
            Self::F7 => keycodes::F7,
            Self::F8 => keycodes::F8,
            Self::F9 => keycodes::F9,
            Self::F10 => keycodes::F10,
            Self::F11 => keycodes::F11,
            Self::F12 => keycodes::F12,
            Self::PrintScreen => keycodes::PRINT_SCREEN,
            Self::ScrollLock => keycodes::SCROLL_LOCK,
            Self::Pause => keycodes::PAUSE,
            Self::Insert => keycodes::INSERT,
            Self::Home => keycodes::HOME,
            Self::PageUp => keycodes::PAGE_UP,
            Self::Delete => keycodes::DELETE,
            Self::End => keycodes::END,
            Self::PageDown => keycodes::PAGE_DOWN,
            Self::Right => keycodes::RIGHT_ARROW,
            Self::Left => keycodes::LEFT_ARROW,
            Self::Down => keycodes::DOWN_ARROW,
            Self::Up => keycodes::UP_ARROW,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Esc => "esc",
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
            Self::F4 => "f4",
            Self::F5 => "f5",
            Self::F6 => "f6",
            Self::F7 => "f7",
            Self::F8 => "f8",
            Self::F9 => "f9",
            Self::F10 => "f10",
            Self::F11 => "f11",
            Self::F12 => "f12",
            Self::PrintScreen => "printscreen",
            Self::ScrollLock => "scrolllock",
            Self::Pause => "pause",
            Self::Insert => "insert",
            Self::Home => "home",
            Self::PageUp => "pageup",
            Self::Delete => "delete",
            Self::End => "end",
            Self::PageDown => "pagedown",
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for SpecialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a special-key name does when invoked.
///
/// A closed set resolved at parse time; there is no runtime table of handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAction {
    Key(SpecialKey),
    Consumer(ConsumerControl),
    System(SystemControl),
}

impl SpecialAction {
    /// Media and power names accepted in addition to the [`SpecialKey`] names.
    const EXTRA_NAMES: [(&'static str, Self); 12] = [
        ("play", Self::Consumer(ConsumerControl::PlayPause)),
        ("next", Self::Consumer(ConsumerControl::NextTrack)),
        ("prev", Self::Consumer(ConsumerControl::PrevTrack)),
        ("stop", Self::Consumer(ConsumerControl::Stop)),
        ("volume-up", Self::Consumer(ConsumerControl::VolumeUp)),
        ("volume-down", Self::Consumer(ConsumerControl::VolumeDown)),
        ("mute", Self::Consumer(ConsumerControl::Mute)),
        ("brightness-up", Self::Consumer(ConsumerControl::BrightnessUp)),
        ("brightness-down", Self::Consumer(ConsumerControl::BrightnessDown)),
        ("power", Self::System(SystemControl::Power)),
        ("sleep", Self::System(SystemControl::Sleep)),
        ("wake", Self::System(SystemControl::Wake)),
    ];

    /// Every accepted name, in help-text order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SpecialKey::ALL
            .into_iter()
            .map(SpecialKey::name)
            .chain(Self::EXTRA_NAMES.into_iter().map(|(name, _)| name))
    }
}

impl FromStr for SpecialAction {
    type Err = GadgetProtocolError;

    /// Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        if let Some(key) = SpecialKey::ALL.into_iter().find(|key| key.name() == name) {
            return Ok(Self::Key(key));
        }
        Self::EXTRA_NAMES
            .into_iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, action)| action)
            .ok_or_else(|| GadgetProtocolError::UnknownSpecialKey(s.to_string()))
    }
}

/// Fixed browser/window-manager key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
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

impl Shortcut {
    pub const ALL: [Self; 10] = [
        Self::CtrlW,
        Self::CtrlT,
        Self::CtrlN,
        Self::CtrlTab,
        Self::CtrlShiftTab,
        Self::CtrlShiftT,
        Self::CtrlQ,
        Self::CtrlF4,
        Self::AltF4,
        Self::F11,
    ];

    /// Modifier and keycode pressed together for this shortcut.
    pub const fn chord(self) -> (Modifier, u8) {
        const CTRL_SHIFT: Modifier =
            Modifier::from_bits(Modifier::LEFT_CTRL.bits() | Modifier::LEFT_SHIFT.bits());
        match self {
            Self::CtrlW => (Modifier::LEFT_CTRL, 0x1A),
            Self::CtrlT => (Modifier::LEFT_CTRL, 0x17),
            Self::CtrlN => (Modifier::LEFT_CTRL, 0x11),
            Self::CtrlTab => (Modifier::LEFT_CTRL, keycodes::TAB),
            Self::CtrlShiftTab => (CTRL_SHIFT, keycodes::TAB),
            Self::CtrlShiftT => (CTRL_SHIFT, 0x17),
            Self::CtrlQ => (Modifier::LEFT_CTRL, 0x14),
            Self::CtrlF4 => (Modifier::LEFT_CTRL, keycodes::F4),
            Self::AltF4 => (Modifier::LEFT_ALT, keycodes::F4),
            Self::F11 => (Modifier::NONE, keycodes::F11),
        }
    }
}

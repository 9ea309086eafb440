//! Value types carried inside gadget reports.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GadgetProtocolError;
use crate::ids::{button_bits, consumer_bits, modifier_bits, system_bits};

/// Bitmask of held keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifier(u8);

impl Modifier {
    pub const NONE: Self = Self(modifier_bits::NONE);
    pub const LEFT_CTRL: Self = Self(modifier_bits::LEFT_CTRL);
    pub const LEFT_SHIFT: Self = Self(modifier_bits::LEFT_SHIFT);
    pub const LEFT_ALT: Self = Self(modifier_bits::LEFT_ALT);
    pub const LEFT_META: Self = Self(modifier_bits::LEFT_META);
    pub const RIGHT_CTRL: Self = Self(modifier_bits::RIGHT_CTRL);
    pub const RIGHT_SHIFT: Self = Self(modifier_bits::RIGHT_SHIFT);
    pub const RIGHT_ALT: Self = Self(modifier_bits::RIGHT_ALT);
    pub const RIGHT_META: Self = Self(modifier_bits::RIGHT_META);

    /// Wrap a raw modifier byte. Every byte value is a valid combination.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Resolve a browser-side modifier name (`ctrl`, `shift`, `alt`, `meta`
    /// and their aliases) to the left-hand modifier bit.
    pub fn from_browser_name(name: &str) -> Option<Self> {
        match name {
            "ctrl" | "control" => Some(Self::LEFT_CTRL),
            "shift" => Some(Self::LEFT_SHIFT),
            "alt" => Some(Self::LEFT_ALT),
            "meta" | "super" | "cmd" | "win" => Some(Self::LEFT_META),
            _ => None,
        }
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for Modifier {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// A single mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    pub const fn bits(self) -> u8 {
        match self {
            Self::Left => button_bits::LEFT,
            Self::Right => button_bits::RIGHT,
            Self::Middle => button_bits::MIDDLE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }

    /// Browser events name buttons either by word or by `MouseEvent.button` index.
    pub fn from_browser_name(name: &str) -> Option<Self> {
        match name {
            "left" | "0" => Some(Self::Left),
            "middle" | "1" => Some(Self::Middle),
            "right" | "2" => Some(Self::Right),
            _ => None,
        }
    }
}

impl FromStr for MouseButton {
    type Err = GadgetProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|button| button.name() == s)
            .ok_or_else(|| GadgetProtocolError::InvalidButton(s.to_string()))
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Consumer control usages exposed by report `0x02`.
///
/// Each control owns exactly one bit in exactly one of the three payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumerControl {
    VolumeUp,
    VolumeDown,
    Mute,
    PlayPause,
    NextTrack,
    PrevTrack,
    Stop,
    Mail,
    BrightnessUp,
    BrightnessDown,
    Search,
    Home,
    Back,
    Forward,
    BrowserStop,
    Refresh,
    Eject,
}

impl ConsumerControl {
    pub const ALL: [Self; 17] = [
        Self::VolumeUp,
        Self::VolumeDown,
        Self::Mute,
        Self::PlayPause,
        Self::NextTrack,
        Self::PrevTrack,
        Self::Stop,
        Self::Mail,
        Self::BrightnessUp,
        Self::BrightnessDown,
        Self::Search,
        Self::Home,
        Self::Back,
        Self::Forward,
        Self::BrowserStop,
        Self::Refresh,
        Self::Eject,
    ];

    /// The three payload bytes with this control's bit set.
    pub const fn bits(self) -> [u8; 3] {
        use consumer_bits::{browser, extra, media};
        match self {
            Self::VolumeUp => [media::VOLUME_UP, 0, 0],
            Self::VolumeDown => [media::VOLUME_DOWN, 0, 0],
            Self::Mute => [media::MUTE, 0, 0],
            Self::PlayPause => [media::PLAY_PAUSE, 0, 0],
            Self::NextTrack => [media::NEXT_TRACK, 0, 0],
            Self::PrevTrack => [media::PREV_TRACK, 0, 0],
            Self::Stop => [media::STOP, 0, 0],
            Self::Mail => [media::MAIL, 0, 0],
            Self::BrightnessUp => [0, browser::BRIGHTNESS_UP, 0],
            Self::BrightnessDown => [0, browser::BRIGHTNESS_DOWN, 0],
            Self::Search => [0, browser::SEARCH, 0],
            Self::Home => [0, browser::HOME, 0],
            Self::Back => [0, browser::BACK, 0],
            Self::Forward => [0, browser::FORWARD, 0],
            Self::BrowserStop => [0, browser::STOP, 0],
            Self::Refresh => [0, browser::REFRESH, 0],
            Self::Eject => [0, 0, extra::EJECT],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
            Self::Mute => "mute",
            Self::PlayPause => "play-pause",
            Self::NextTrack => "next-track",
            Self::PrevTrack => "prev-track",
            Self::Stop => "stop",
            Self::Mail => "mail",
            Self::BrightnessUp => "brightness-up",
            Self::BrightnessDown => "brightness-down",
            Self::Search => "search",
            Self::Home => "home",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::BrowserStop => "browser-stop",
            Self::Refresh => "refresh",
            Self::Eject => "eject",
        }
    }

    /// OR together the payload bytes of several controls pressed at once.
    pub fn combine(controls: &[Self]) -> [u8; 3] {
        controls.iter().fold([0u8; 3], |acc, control| {
            let [a, b, c] = acc;
            let [x, y, z] = control.bits();
            [a | x, b | y, c | z]
        })
    }
}

impl FromStr for ConsumerControl {
    type Err = GadgetProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|control| control.name() == s)
            .ok_or_else(|| GadgetProtocolError::UnknownConsumerControl(s.to_string()))
    }
}

impl fmt::Display for ConsumerControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// System control usages exposed by report `0x03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemControl {
    Power,
    Sleep,
    Wake,
}

impl SystemControl {
    pub const ALL: [Self; 3] = [Self::Power, Self::Sleep, Self::Wake];

    pub const fn bits(self) -> u8 {
        match self {
            Self::Power => system_bits::POWER,
            Self::Sleep => system_bits::SLEEP,
            Self::Wake => system_bits::WAKE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Sleep => "sleep",
            Self::Wake => "wake",
        }
    }
}

impl FromStr for SystemControl {
    type Err = GadgetProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|control| control.name() == s)
            .ok_or_else(|| GadgetProtocolError::UnknownSystemControl(s.to_string()))
    }
}

impl fmt::Display for SystemControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn modifier_combines_with_bitor() {
        let combo = Modifier::LEFT_CTRL | Modifier::LEFT_ALT;
        assert_eq!(combo.bits(), 0x05);
        assert!(combo.contains(Modifier::LEFT_CTRL));
        assert!(!combo.contains(Modifier::LEFT_SHIFT));

        let mut acc = Modifier::NONE;
        acc |= Modifier::RIGHT_META;
        assert_eq!(acc.bits(), 0x80);
    }

    #[test]
    fn modifier_browser_aliases() {
        assert_eq!(Modifier::from_browser_name("control"), Some(Modifier::LEFT_CTRL));
        assert_eq!(Modifier::from_browser_name("win"), Some(Modifier::LEFT_META));
        assert_eq!(Modifier::from_browser_name("hyper"), None);
    }

    #[test]
    fn mouse_button_parse() -> TestResult {
        assert_eq!("left".parse::<MouseButton>()?, MouseButton::Left);
        assert_eq!("right".parse::<MouseButton>()?.bits(), 0x02);
        assert_eq!("middle".parse::<MouseButton>()?.bits(), 0x04);
        Ok(())
    }

    #[test]
    fn mouse_button_rejects_unknown_names() {
        for name in ["", "Left", "back", "1"] {
            let result = name.parse::<MouseButton>();
            assert!(
                matches!(result, Err(GadgetProtocolError::InvalidButton(ref n)) if n == name),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn consumer_controls_set_exactly_one_bit() {
        for control in ConsumerControl::ALL {
            let ones: u32 = control.bits().iter().map(|b| b.count_ones()).sum();
            assert_eq!(ones, 1, "{control} must set a single bit");
        }
    }

    #[test]
    fn consumer_combine_ors_bytes() {
        let bits = ConsumerControl::combine(&[
            ConsumerControl::VolumeUp,
            ConsumerControl::BrightnessDown,
            ConsumerControl::Eject,
        ]);
        assert_eq!(bits, [0x01, 0x02, 0x01]);
    }

    #[test]
    fn system_control_round_trips_name() -> TestResult {
        for control in SystemControl::ALL {
            assert_eq!(control.name().parse::<SystemControl>()?, control);
        }
        assert!("reboot".parse::<SystemControl>().is_err());
        Ok(())
    }
}

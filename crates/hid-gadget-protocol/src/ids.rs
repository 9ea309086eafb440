//! Report IDs, report lengths and bit constants for the composite HID gadget.
//!
//! The gadget exposes a single report descriptor with four top-level
//! collections, each tagged by a leading report-ID byte:
//!
//! | ID     | Length | Layout                                          |
//! |--------|--------|-------------------------------------------------|
//! | `0x01` | 9      | modifier, reserved, keycode ×6                  |
//! | `0x02` | 4      | media/volume bits, brightness/browser bits, eject bits |
//! | `0x03` | 2      | system buttons                                  |
//! | `0x04` | 5      | buttons, x, y, wheel                            |

#![deny(static_mut_refs)]

/// Report IDs used by the gadget descriptor.
pub mod report_ids {
    /// Boot-style keyboard report.
    pub const KEYBOARD: u8 = 0x01;
    /// Consumer control (media, volume, brightness, browser, eject).
    pub const CONSUMER: u8 = 0x02;
    /// System control (power, sleep, wake).
    pub const SYSTEM: u8 = 0x03;
    /// Relative mouse with wheel.
    pub const MOUSE: u8 = 0x04;
}

/// Wire length of each report, report-ID byte included.
pub mod report_lengths {
    pub const KEYBOARD: usize = 9;
    pub const CONSUMER: usize = 4;
    pub const SYSTEM: usize = 2;
    pub const MOUSE: usize = 5;
}

/// Maximum number of simultaneous keycodes in a keyboard report.
pub const MAX_KEYCODES: usize = 6;

/// Largest magnitude a single mouse axis or wheel byte may carry.
pub const MAX_MOVEMENT: i32 = 127;

/// Keyboard modifier bits (byte 1 of the keyboard report).
pub mod modifier_bits {
    pub const NONE: u8 = 0x00;
    pub const LEFT_CTRL: u8 = 0x01;
    pub const LEFT_SHIFT: u8 = 0x02;
    pub const LEFT_ALT: u8 = 0x04;
    pub const LEFT_META: u8 = 0x08;
    pub const RIGHT_CTRL: u8 = 0x10;
    pub const RIGHT_SHIFT: u8 = 0x20;
    pub const RIGHT_ALT: u8 = 0x40;
    pub const RIGHT_META: u8 = 0x80;
}

/// Mouse button bits (byte 1 of the mouse report).
pub mod button_bits {
    pub const NONE: u8 = 0x00;
    pub const LEFT: u8 = 0x01;
    pub const RIGHT: u8 = 0x02;
    pub const MIDDLE: u8 = 0x04;
}

/// Consumer control bits, grouped by the report byte that carries them.
pub mod consumer_bits {
    /// Byte 1: volume, media transport and mail.
    pub mod media {
        pub const VOLUME_UP: u8 = 0x01;
        pub const VOLUME_DOWN: u8 = 0x02;
        pub const MUTE: u8 = 0x04;
        pub const PLAY_PAUSE: u8 = 0x08;
        pub const NEXT_TRACK: u8 = 0x10;
        pub const PREV_TRACK: u8 = 0x20;
        pub const STOP: u8 = 0x40;
        pub const MAIL: u8 = 0x80;
    }

    /// Byte 2: display brightness and application-control browser actions.
    pub mod browser {
        pub const BRIGHTNESS_UP: u8 = 0x01;
        pub const BRIGHTNESS_DOWN: u8 = 0x02;
        pub const SEARCH: u8 = 0x04;
        pub const HOME: u8 = 0x08;
        pub const BACK: u8 = 0x10;
        pub const FORWARD: u8 = 0x20;
        pub const STOP: u8 = 0x40;
        pub const REFRESH: u8 = 0x80;
    }

    /// Byte 3: media eject.
    pub mod extra {
        pub const EJECT: u8 = 0x01;
    }
}

/// System control bits (byte 1 of the system report).
pub mod system_bits {
    pub const POWER: u8 = 0x01;
    pub const SLEEP: u8 = 0x02;
    pub const WAKE: u8 = 0x04;
}

/// HID usage IDs (keyboard page 0x07) for keys that have no printable character.
pub mod keycodes {
    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2A;
    pub const TAB: u8 = 0x2B;
    pub const SPACE: u8 = 0x2C;
    pub const CAPS_LOCK: u8 = 0x39;
    pub const F1: u8 = 0x3A;
    pub const F2: u8 = 0x3B;
    pub const F3: u8 = 0x3C;
    pub const F4: u8 = 0x3D;
    pub const F5: u8 = 0x3E;
    pub const F6: u8 = 0x3F;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;
    pub const F11: u8 = 0x44;
    pub const F12: u8 = 0x45;
    pub const PRINT_SCREEN: u8 = 0x46;
    pub const SCROLL_LOCK: u8 = 0x47;
    pub const PAUSE: u8 = 0x48;
    pub const INSERT: u8 = 0x49;
    pub const HOME: u8 = 0x4A;
    pub const PAGE_UP: u8 = 0x4B;
    pub const DELETE: u8 = 0x4C;
    pub const END: u8 = 0x4D;
    pub const PAGE_DOWN: u8 = 0x4E;
    pub const RIGHT_ARROW: u8 = 0x4F;
    pub const LEFT_ARROW: u8 = 0x50;
    pub const DOWN_ARROW: u8 = 0x51;
    pub const UP_ARROW: u8 = 0x52;
}

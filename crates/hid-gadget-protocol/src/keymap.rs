//! US-layout character keymap and the textual escape pre-pass.

use std::borrow::Cow;

use crate::ids::keycodes;
use crate::types::Modifier;

/// How to produce one character: a keycode, optionally with left shift held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMapEntry {
    pub keycode: u8,
    pub needs_shift: bool,
}

impl KeyMapEntry {
    const fn plain(keycode: u8) -> Self {
        Self {
            keycode,
            needs_shift: false,
        }
    }

    const fn shifted(keycode: u8) -> Self {
        Self {
            keycode,
            needs_shift: true,
        }
    }

    /// The modifier byte to send alongside the keycode.
    pub const fn modifier(self) -> Modifier {
        if self.needs_shift {
            Modifier::LEFT_SHIFT
        } else {
            Modifier::NONE
        }
    }
}

/// Every typeable character. Process-wide constant data; never mutated.
pub static KEYMAP: [(char, KeyMapEntry); 98] = [
    ('a', KeyMapEntry::plain(0x04)),
    ('b', KeyMapEntry::plain(0x05)),
    ('c', KeyMapEntry::plain(0x06)),
    ('d', KeyMapEntry::plain(0x07)),
    ('e', KeyMapEntry::plain(0x08)),
    ('f', KeyMapEntry::plain(0x09)),
    ('g', KeyMapEntry::plain(0x0A)),
    ('h', KeyMapEntry::plain(0x0B)),
    ('i', KeyMapEntry::plain(0x0C)),
    ('j', KeyMapEntry::plain(0x0D)),
    ('k', KeyMapEntry::plain(0x0E)),
    ('l', KeyMapEntry::plain(0x0F)),
    ('m', KeyMapEntry::plain(0x10)),
    ('n', KeyMapEntry::plain(0x11)),
    ('o', KeyMapEntry::plain(0x12)),
    ('p', KeyMapEntry::plain(0x13)),
    ('q', KeyMapEntry::plain(0x14)),
    ('r', KeyMapEntry::plain(0x15)),
    ('s', KeyMapEntry::plain(0x16)),
    ('t', KeyMapEntry::plain(0x17)),
    ('u', KeyMapEntry::plain(0x18)),
    ('v', KeyMapEntry::plain(0x19)),
    ('w', KeyMapEntry::plain(0x1A)),
    ('x', KeyMapEntry::plain(0x1B)),
    ('y', KeyMapEntry::plain(0x1C)),
    ('z', KeyMapEntry::plain(0x1D)),
    ('A', KeyMapEntry::shifted(0x04)),
    ('B', KeyMapEntry::shifted(0x05)),
    ('C', KeyMapEntry::shifted(0x06)),
    ('D', KeyMapEntry::shifted(0x07)),
    ('E', KeyMapEntry::shifted(0x08)),
    ('F', KeyMapEntry::shifted(0x09)),
    ('G', KeyMapEntry::shifted(0x0A)),
    ('H', KeyMapEntry::shifted(0x0B)),
    ('I', KeyMapEntry::shifted(0x0C)),
    ('J', KeyMapEntry::shifted(0x0D)),
    ('K', KeyMapEntry::shifted(0x0E)),
    ('L', KeyMapEntry::shifted(0x0F)),
    ('M', KeyMapEntry::shifted(0x10)),
    ('N', KeyMapEntry::shifted(0x11)),
    ('O', KeyMapEntry::shifted(0x12)),
    ('P', KeyMapEntry::shifted(0x13)),
    ('Q', KeyMapEntry::shifted(0x14)),
    ('R', KeyMapEntry::shifted(0x15)),
    ('S', KeyMapEntry::shifted(0x16)),
    ('T', KeyMapEntry::shifted(0x17)),
    ('U', KeyMapEntry::shifted(0x18)),
    ('V', KeyMapEntry::shifted(0x19)),
    ('W', KeyMapEntry::shifted(0x1A)),
    ('X', KeyMapEntry::shifted(0x1B)),
    ('Y', KeyMapEntry::shifted(0x1C)),
    ('Z', KeyMapEntry::shifted(0x1D)),
    ('1', KeyMapEntry::plain(0x1E)),
    ('2', KeyMapEntry::plain(0x1F)),
    ('3', KeyMapEntry::plain(0x20)),
    ('4', KeyMapEntry::plain(0x21)),
    ('5', KeyMapEntry::plain(0x22)),
    ('6', KeyMapEntry::plain(0x23)),
    ('7', KeyMapEntry::plain(0x24)),
    ('8', KeyMapEntry::plain(0x25)),
    ('9', KeyMapEntry::plain(0x26)),
    ('0', KeyMapEntry::plain(0x27)),
    ('!', KeyMapEntry::shifted(0x1E)),
    ('@', KeyMapEntry::shifted(0x1F)),
    ('#', KeyMapEntry::shifted(0x20)),
    ('$', KeyMapEntry::shifted(0x21)),
    ('%', KeyMapEntry::shifted(0x22)),
    ('^', KeyMapEntry::shifted(0x23)),
    ('&', KeyMapEntry::shifted(0x24)),
    ('*', KeyMapEntry::shifted(0x25)),
    ('(', KeyMapEntry::shifted(0x26)),
    (')', KeyMapEntry::shifted(0x27)),
    ('\n', KeyMapEntry::plain(keycodes::ENTER)),
    ('\u{8}', KeyMapEntry::plain(keycodes::BACKSPACE)),
    ('\t', KeyMapEntry::plain(keycodes::TAB)),
    (' ', KeyMapEntry::plain(keycodes::SPACE)),
    ('-', KeyMapEntry::plain(0x2D)),
    ('_', KeyMapEntry::shifted(0x2D)),
    ('=', KeyMapEntry::plain(0x2E)),
    ('+', KeyMapEntry::shifted(0x2E)),
    ('[', KeyMapEntry::plain(0x2F)),
    ('{', KeyMapEntry::shifted(0x2F)),
    (']', KeyMapEntry::plain(0x30)),
    ('}', KeyMapEntry::shifted(0x30)),
    ('\\', KeyMapEntry::plain(0x31)),
    ('|', KeyMapEntry::shifted(0x31)),
    (';', KeyMapEntry::plain(0x33)),
    (':', KeyMapEntry::shifted(0x33)),
    ('\'', KeyMapEntry::plain(0x34)),
    ('"', KeyMapEntry::shifted(0x34)),
    ('`', KeyMapEntry::plain(0x35)),
    ('~', KeyMapEntry::shifted(0x35)),
    (',', KeyMapEntry::plain(0x36)),
    ('<', KeyMapEntry::shifted(0x36)),
    ('.', KeyMapEntry::plain(0x37)),
    ('>', KeyMapEntry::shifted(0x37)),
    ('/', KeyMapEntry::plain(0x38)),
    ('?', KeyMapEntry::shifted(0x38)),
];

/// Resolve a character to its key entry.
pub fn lookup(c: char) -> Option<KeyMapEntry> {
    KEYMAP
        .iter()
        .find(|(mapped, _)| *mapped == c)
        .map(|(_, entry)| *entry)
}

/// Reverse lookup: which character a (keycode, shift) pair types.
pub fn decode(keycode: u8, needs_shift: bool) -> Option<char> {
    let wanted = KeyMapEntry {
        keycode,
        needs_shift,
    };
    KEYMAP
        .iter()
        .find(|(_, entry)| *entry == wanted)
        .map(|(c, _)| *c)
}

/// Replace the two-character sequences `\n`, `\t` and `\b` with newline, tab
/// and backspace.
///
/// A single left-to-right pass; replacements never overlap and the output is
/// not rescanned. Text without a backslash is returned borrowed.
pub fn expand_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let replacement = match chars.peek() {
                Some('n') => Some('\n'),
                Some('t') => Some('\t'),
                Some('b') => Some('\u{8}'),
                _ => None,
            };
            if let Some(replacement) = replacement {
                chars.next();
                out.push(replacement);
                continue;
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// One character of a typing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Mapped { ch: char, entry: KeyMapEntry },
    Unmapped(char),
}

/// Expand escapes once, then resolve every character in input order.
pub fn plan_text(text: &str) -> Vec<Keystroke> {
    expand_escapes(text)
        .chars()
        .map(|ch| match lookup(ch) {
            Some(entry) => Keystroke::Mapped { ch, entry },
            None => Keystroke::Unmapped(ch),
        })
        .collect()
}

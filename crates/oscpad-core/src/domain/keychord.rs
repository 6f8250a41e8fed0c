//! Key-chord descriptors: a keystroke or virtual key code plus modifiers.
//!
//! The executor has two keyboard primitives — a character keystroke and a
//! numeric virtual-key-code press — because some keys (arrows, tab, space)
//! are only reachable by key code.  A [`KeyChord`] names exactly one of the
//! two, plus the modifier set held for the duration of the event.
//! Modifiers combine with AND semantics: every listed modifier is held
//! simultaneously.

use serde::{Deserialize, Serialize};

/// A single modifier key, as passed to the executor's hold/release
/// primitives (e.g. bracketing a horizontal scroll with shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Shift,
    Control,
    Option,
    Command,
}

/// Modifier key bitmask used in [`KeyChord`].
///
/// Bit layout:
/// - Bit 0: Shift
/// - Bit 1: Control
/// - Bit 2: Option (Alt)
/// - Bit 3: Command (Meta/Super)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const SHIFT: u8 = 1 << 0;
    pub const CONTROL: u8 = 1 << 1;
    pub const OPTION: u8 = 1 << 2;
    pub const COMMAND: u8 = 1 << 3;

    /// The empty modifier set.
    pub const NONE: Modifiers = Modifiers(0);

    /// Returns `true` if the Shift modifier is set.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if the Control modifier is set.
    pub fn control(&self) -> bool {
        self.0 & Self::CONTROL != 0
    }

    /// Returns `true` if the Option modifier is set.
    pub fn option(&self) -> bool {
        self.0 & Self::OPTION != 0
    }

    /// Returns `true` if the Command modifier is set.
    pub fn command(&self) -> bool {
        self.0 & Self::COMMAND != 0
    }

    /// Returns `true` if no modifier is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The set modifiers in a fixed hold order (shift, control, option,
    /// command).  Backends press in this order and release in reverse.
    pub fn keys(&self) -> Vec<ModifierKey> {
        let mut keys = Vec::with_capacity(4);
        if self.shift() {
            keys.push(ModifierKey::Shift);
        }
        if self.control() {
            keys.push(ModifierKey::Control);
        }
        if self.option() {
            keys.push(ModifierKey::Option);
        }
        if self.command() {
            keys.push(ModifierKey::Command);
        }
        keys
    }
}

/// A key action: either a literal character keystroke or a numeric virtual
/// key code, with the modifiers held for the duration of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyChord {
    /// Synthesize a character keystroke (e.g. `x` with Command held).
    Keystroke { ch: char, modifiers: Modifiers },
    /// Synthesize a press of a virtual key code (e.g. an arrow key).
    KeyCode { code: u16, modifiers: Modifiers },
}

impl KeyChord {
    /// A character keystroke with the given modifiers.
    pub const fn keystroke(ch: char, modifiers: Modifiers) -> Self {
        KeyChord::Keystroke { ch, modifiers }
    }

    /// A virtual-key-code press with the given modifiers.
    pub const fn key_code(code: u16, modifiers: Modifiers) -> Self {
        KeyChord::KeyCode { code, modifiers }
    }
}

/// Named virtual key codes used by the routing table (ANSI layout).
pub mod keycode {
    pub const TAB: u16 = 48;
    pub const SPACE: u16 = 49;
    pub const LEFT_ARROW: u16 = 123;
    pub const RIGHT_ARROW: u16 = 124;
    pub const DOWN_ARROW: u16 = 125;
    pub const UP_ARROW: u16 = 126;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

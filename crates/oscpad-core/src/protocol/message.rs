//! Typed model of a single decoded OSC message.
//!
//! An OSC message is an address path (e.g. `/pad/mouse/pos/xy`) followed by
//! an ordered list of typed arguments.  Argument count and types are
//! address-specific and are *not* validated here — a message with the wrong
//! arguments fails at point of use in the dispatcher, per the
//! forward-compatibility policy for unknown control-surface layouts.

use serde::{Deserialize, Serialize};

/// One OSC argument.  The bridge recognises the three standard tags the
/// control surface emits: `f` (float32), `i` (int32), and `s` (string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OscArg {
    Float(f32),
    Int(i32),
    Str(String),
}

impl OscArg {
    /// Returns the OSC type-tag character for this argument.
    pub fn type_tag(&self) -> char {
        match self {
            OscArg::Float(_) => 'f',
            OscArg::Int(_) => 'i',
            OscArg::Str(_) => 's',
        }
    }
}

/// A decoded OSC message: address path plus ordered argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscMessage {
    /// The address path.  Always starts with `/`.  Dispatch lookup on this
    /// string is exact-match and case-sensitive; there are no wildcards.
    pub address: String,
    /// The arguments, in wire order.
    pub args: Vec<OscArg>,
}

impl OscMessage {
    /// Creates a message from an address and argument list.
    pub fn new(address: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }

    /// Returns argument `idx` as a float.
    ///
    /// An `i` argument is accepted where an `f` is expected — control
    /// surfaces disagree about whether a pad sends `1` or `1.0`.  Strings
    /// never coerce.
    pub fn float(&self, idx: usize) -> Option<f32> {
        match self.args.get(idx)? {
            OscArg::Float(f) => Some(*f),
            OscArg::Int(i) => Some(*i as f32),
            OscArg::Str(_) => None,
        }
    }

    /// Returns argument `idx` as an integer, if it is an `i` argument.
    pub fn int(&self, idx: usize) -> Option<i32> {
        match self.args.get(idx)? {
            OscArg::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns argument `idx` as a string slice, if it is an `s` argument.
    pub fn str_arg(&self, idx: usize) -> Option<&str> {
        match self.args.get(idx)? {
            OscArg::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

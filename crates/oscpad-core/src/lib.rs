//! # oscpad-core
//!
//! Shared library for the oscpad bridge containing the OSC wire codec and the
//! pure control-pad domain logic: the address routing table, the pointer
//! state machine, scroll resolution, and key-chord descriptors.
//!
//! This crate is used by the bridge application and its tests.  It has zero
//! dependencies on OS APIs, UI frameworks, or network sockets.
//!
//! # Architecture overview (for beginners)
//!
//! oscpad turns a touch control surface (a phone or tablet running an OSC
//! controller layout) into a remote mouse and keyboard.  Each tap, drag, or
//! button press on the surface is sent as one OSC message in one UDP
//! datagram.  The bridge decodes the message, looks its address up in a
//! fixed routing table, and replays it as a physical input action.
//!
//! This crate (`oscpad-core`) is the foundation.  It defines:
//!
//! - **`protocol`** – How bytes travel over the network.  One OSC 1.0
//!   message per datagram: a padded address string, a type-tag string, and
//!   big-endian arguments, decoded into a typed [`OscMessage`].
//!
//! - **`domain`** – Pure business logic with no OS dependencies.  The most
//!   important pieces are the [`route`] table (address → action descriptor)
//!   and the [`PointerPad`] state machine, which reconciles normalized
//!   touch-pad coordinates against an OS pointer that silently ignores a
//!   move to its current position.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/protocol/mod.rs).
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `oscpad_core::PointerPad` instead of `oscpad_core::domain::pointer::PointerPad`.
pub use domain::keychord::{keycode, KeyChord, ModifierKey, Modifiers};
pub use domain::pointer::{PointerPad, TouchPhase};
pub use domain::routing::{route, ClickKind, PadButton, PointerRoute, Route};
pub use domain::scroll::{ScrollDirection, ScrollStep, ScrollTier};
pub use protocol::codec::{decode_message, encode_message, DecodeError};
pub use protocol::message::{OscArg, OscMessage};

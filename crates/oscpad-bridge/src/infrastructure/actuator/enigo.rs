//! Production input actuator built on the `enigo` synthesis crate.
//!
//! `enigo` injects synthesized pointer and keyboard events at the OS level
//! (CoreGraphics on macOS, SendInput on Windows, X11/libei on Linux), so the
//! controlled application cannot distinguish them from physical input.
//!
//! # Conventions at this boundary
//!
//! - The dispatcher works in `f64` screen coordinates; enigo takes integer
//!   pixels, so positions are rounded here.
//! - The dispatcher's scroll convention is positive-scrolls-up (the
//!   control surface's wheel convention); enigo's vertical axis is
//!   positive-down, so the amount is negated here.
//! - Numeric key codes are platform virtual-key codes passed through raw
//!   via `Key::Other`.
//! - A key chord holds its modifiers for the duration of one synchronous
//!   call: press in fixed order, click the key, release in reverse order.
//!   The dispatcher is a single serial actor, so nothing interleaves.

use std::sync::Mutex;

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use oscpad_core::domain::keychord::{ModifierKey, Modifiers};
use tracing::debug;

use crate::application::dispatch::{ActuationError, InputActuator};

/// Input actuator injecting real OS events through `enigo`.
///
/// `enigo`'s methods take `&mut self`, so the handle lives behind a `Mutex`;
/// the dispatcher is serial, so the lock is never contended.
pub struct EnigoActuator {
    inner: Mutex<Enigo>,
}

impl EnigoActuator {
    /// Connects to the OS input subsystem.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::NotInitialized`] when the platform refuses
    /// the connection (e.g. missing the Accessibility permission on macOS,
    /// or no libei support on Wayland).
    pub fn new() -> Result<Self, ActuationError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| ActuationError::NotInitialized(e.to_string()))?;
        debug!("enigo actuator initialised");
        Ok(Self {
            inner: Mutex::new(enigo),
        })
    }

    fn with_enigo<T>(
        &self,
        f: impl FnOnce(&mut Enigo) -> Result<T, ActuationError>,
    ) -> Result<T, ActuationError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| ActuationError::Backend(format!("actuator lock poisoned: {e}")))?;
        f(&mut guard)
    }
}

/// Maps a modifier to the enigo key that holds it.
fn modifier_key(key: ModifierKey) -> Key {
    match key {
        ModifierKey::Shift => Key::Shift,
        ModifierKey::Control => Key::Control,
        ModifierKey::Option => Key::Alt,
        ModifierKey::Command => Key::Meta,
    }
}

fn backend_err(e: impl std::fmt::Display) -> ActuationError {
    ActuationError::Backend(e.to_string())
}

/// Presses `modifiers`, clicks `key`, releases the modifiers in reverse
/// order.  On failure mid-chord the already-pressed modifiers are still
/// released so they cannot leak into subsequent input.
fn chord(enigo: &mut Enigo, key: Key, modifiers: Modifiers) -> Result<(), ActuationError> {
    let held = modifiers.keys();
    let mut pressed = Vec::with_capacity(held.len());

    let result = (|| {
        for m in &held {
            enigo
                .key(modifier_key(*m), Direction::Press)
                .map_err(backend_err)?;
            pressed.push(*m);
        }
        enigo.key(key, Direction::Click).map_err(backend_err)
    })();

    for m in pressed.iter().rev() {
        let _ = enigo.key(modifier_key(*m), Direction::Release);
    }
    result
}

impl InputActuator for EnigoActuator {
    fn move_to(&self, x: f64, y: f64) -> Result<(), ActuationError> {
        self.with_enigo(|e| {
            e.move_mouse(x.round() as i32, y.round() as i32, Coordinate::Abs)
                .map_err(backend_err)
        })
    }

    fn click(&self) -> Result<(), ActuationError> {
        self.with_enigo(|e| e.button(Button::Left, Direction::Click).map_err(backend_err))
    }

    fn double_click(&self) -> Result<(), ActuationError> {
        // enigo has no double-click primitive; two clicks back to back are
        // within the OS double-click interval on all supported platforms.
        self.with_enigo(|e| {
            e.button(Button::Left, Direction::Click).map_err(backend_err)?;
            e.button(Button::Left, Direction::Click).map_err(backend_err)
        })
    }

    fn right_click(&self) -> Result<(), ActuationError> {
        self.with_enigo(|e| e.button(Button::Right, Direction::Click).map_err(backend_err))
    }

    fn scroll(&self, amount: i32) -> Result<(), ActuationError> {
        // Our convention is positive-up; enigo's vertical axis is positive-down.
        self.with_enigo(|e| e.scroll(-amount, Axis::Vertical).map_err(backend_err))
    }

    fn key_down(&self, key: ModifierKey) -> Result<(), ActuationError> {
        self.with_enigo(|e| {
            e.key(modifier_key(key), Direction::Press).map_err(backend_err)
        })
    }

    fn key_up(&self, key: ModifierKey) -> Result<(), ActuationError> {
        self.with_enigo(|e| {
            e.key(modifier_key(key), Direction::Release).map_err(backend_err)
        })
    }

    fn keystroke(&self, ch: char, modifiers: Modifiers) -> Result<(), ActuationError> {
        self.with_enigo(|e| chord(e, Key::Unicode(ch), modifiers))
    }

    fn key_code(&self, code: u16, modifiers: Modifiers) -> Result<(), ActuationError> {
        self.with_enigo(|e| chord(e, Key::Other(u32::from(code)), modifiers))
    }

    fn current_position(&self) -> Result<(f64, f64), ActuationError> {
        self.with_enigo(|e| {
            let (x, y) = e.location().map_err(backend_err)?;
            Ok((f64::from(x), f64::from(y)))
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

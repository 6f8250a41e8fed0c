//! MessageDispatcher: translates decoded OSC messages into input actions.
//!
//! This use case sits at the application layer and delegates to an
//! [`InputActuator`] trait object for OS-level event injection.  The
//! platform-specific implementation is in the infrastructure layer.
//!
//! One dispatcher instance owns the single [`PointerPad`]; messages must be
//! fed to it serially (the transport loop runs one dispatch task), so
//! `current`/`pending` coordinate updates stay sequentially consistent
//! without any locking here.

use std::sync::Arc;

use oscpad_core::domain::keychord::{KeyChord, ModifierKey, Modifiers};
use oscpad_core::domain::pointer::PointerPad;
use oscpad_core::domain::routing::{route, ClickKind, PadButton, PointerRoute, Route};
use oscpad_core::protocol::message::OscMessage;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Error type for input actuation operations.
#[derive(Debug, Error)]
pub enum ActuationError {
    /// The OS input call failed.
    #[error("backend error: {0}")]
    Backend(String),
    /// The backend could not be initialised.
    #[error("actuator not initialized: {0}")]
    NotInitialized(String),
}

/// Error type for one dispatch cycle.
///
/// A dispatch error never escalates past the transport loop: it is logged
/// and the next message is processed normally.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The message's arguments do not fit the address (wrong count/types).
    #[error("bad arguments for {address}: {reason}")]
    BadArguments { address: String, reason: String },

    /// The actuator reported a failure.  Physical input actions are never
    /// retried — a duplicated click or keystroke has a user-visible effect.
    #[error(transparent)]
    Actuation(#[from] ActuationError),
}

/// Platform-agnostic input actuation contract.
///
/// Every method is synchronous with bounded latency from the dispatcher's
/// perspective, and reports failure as a value — a backend must never panic
/// across this boundary.
pub trait InputActuator: Send + Sync {
    /// Moves the pointer to an absolute position.
    fn move_to(&self, x: f64, y: f64) -> Result<(), ActuationError>;

    /// Single left click at the current position.
    fn click(&self) -> Result<(), ActuationError>;

    /// Double left click at the current position.
    fn double_click(&self) -> Result<(), ActuationError>;

    /// Single right click at the current position.
    fn right_click(&self) -> Result<(), ActuationError>;

    /// Vertical wheel scroll; positive scrolls up.
    fn scroll(&self, amount: i32) -> Result<(), ActuationError>;

    /// Presses and holds a modifier key.
    fn key_down(&self, key: ModifierKey) -> Result<(), ActuationError>;

    /// Releases a held modifier key.
    fn key_up(&self, key: ModifierKey) -> Result<(), ActuationError>;

    /// Synthesizes a character keystroke with the modifier set held for the
    /// duration of the event, applied as one atomic chord.
    fn keystroke(&self, ch: char, modifiers: Modifiers) -> Result<(), ActuationError>;

    /// Synthesizes a virtual-key-code press with the modifier set held for
    /// the duration of the event, applied as one atomic chord.
    fn key_code(&self, code: u16, modifiers: Modifiers) -> Result<(), ActuationError>;

    /// Returns the pointer's current position.
    fn current_position(&self) -> Result<(f64, f64), ActuationError>;
}

/// Fixed screen coordinates for the virtual buttons, from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualButtons {
    pub song: (f64, f64),
    pub cue: (f64, f64),
    pub legato: (f64, f64),
}

impl VirtualButtons {
    fn position(&self, button: PadButton) -> (f64, f64) {
        match button {
            PadButton::SongLaunch => self.song,
            PadButton::Cue => self.cue,
            PadButton::Legato => self.legato,
        }
    }
}

/// What a dispatch cycle did with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message was routed and its action executed.
    Executed,
    /// The address is not in the routing table; nothing happened.
    Ignored,
    /// The address is known but names a permanently unsupported gesture.
    Unsupported,
}

/// The message dispatch use case.
///
/// Receives decoded messages one at a time, routes them through the address
/// table, and executes the resulting descriptors against the actuator.
pub struct MessageDispatcher {
    pad: PointerPad,
    buttons: VirtualButtons,
    scroll_base: i32,
    actuator: Arc<dyn InputActuator>,
}

impl MessageDispatcher {
    /// Creates a dispatcher with the given pointer geometry, virtual-button
    /// coordinates, and scroll base step.
    pub fn new(
        pad: PointerPad,
        buttons: VirtualButtons,
        scroll_base: i32,
        actuator: Arc<dyn InputActuator>,
    ) -> Self {
        Self {
            pad,
            buttons,
            scroll_base,
            actuator,
        }
    }

    /// Read access to the pointer state, for diagnostics and tests.
    pub fn pad(&self) -> &PointerPad {
        &self.pad
    }

    /// Processes one decoded message to completion.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the arguments are malformed for the
    /// address or the actuator fails.  The caller logs and continues; no
    /// error here is fatal to the loop.
    pub fn dispatch(&mut self, msg: &OscMessage) -> Result<Outcome, DispatchError> {
        let Some(route) = route(&msg.address) else {
            trace!(address = %msg.address, "unknown address ignored");
            return Ok(Outcome::Ignored);
        };

        match route {
            Route::Key(chord) => self.run_key_chord(chord)?,
            Route::Click(kind) => return self.run_click(kind),
            Route::Scroll(step) => self.run_scroll(step.amount(self.scroll_base), step.is_horizontal())?,
            Route::Pointer(op) => self.run_pointer(op, msg)?,
            Route::Button(button) => self.run_button(button)?,
        }
        Ok(Outcome::Executed)
    }

    // ── Per-descriptor execution ──────────────────────────────────────────────

    fn run_key_chord(&self, chord: KeyChord) -> Result<(), ActuationError> {
        match chord {
            KeyChord::Keystroke { ch, modifiers } => {
                debug!(%ch, ?modifiers, "key chord");
                self.actuator.keystroke(ch, modifiers)
            }
            KeyChord::KeyCode { code, modifiers } => {
                debug!(code, ?modifiers, "key chord");
                self.actuator.key_code(code, modifiers)
            }
        }
    }

    fn run_click(&self, kind: ClickKind) -> Result<Outcome, DispatchError> {
        match kind {
            ClickKind::LeftSingle => self.actuator.click()?,
            ClickKind::LeftDouble => self.actuator.double_click()?,
            ClickKind::RightSingle => self.actuator.right_click()?,
            ClickKind::RightDouble => {
                // No OS primitive exists for this gesture; reporting the
                // limitation is the contract, approximating it is not.
                warn!("right double-click is not supported; ignoring");
                return Ok(Outcome::Unsupported);
            }
        }
        Ok(Outcome::Executed)
    }

    fn run_scroll(&self, amount: i32, horizontal: bool) -> Result<(), ActuationError> {
        if !horizontal {
            return self.actuator.scroll(amount);
        }

        // Horizontal scroll is synthesized as shift + vertical scroll.  The
        // bracket is strict — press, scroll, release, nothing interleaved —
        // and the release still runs when the scroll itself fails, so the
        // modifier cannot leak into subsequent input.
        self.actuator.key_down(ModifierKey::Shift)?;
        let scrolled = self.actuator.scroll(amount);
        let released = self.actuator.key_up(ModifierKey::Shift);
        scrolled?;
        released
    }

    fn run_pointer(&mut self, op: PointerRoute, msg: &OscMessage) -> Result<(), DispatchError> {
        match op {
            PointerRoute::Touch => {
                let phase = msg.float(0).ok_or_else(|| bad_args(msg, "expected touch phase float"))?;
                if phase == 1.0 {
                    self.pad.touch_begin();
                    // Gesture-start diagnostic only; a failure here must not
                    // abort the gesture.
                    match self.actuator.current_position() {
                        Ok((x, y)) => debug!(x, y, "touch begin, cursor at"),
                        Err(e) => warn!("could not query cursor position: {e}"),
                    }
                } else {
                    let (x, y) = self.pad.touch_end();
                    debug!(x, y, "touch end, committing");
                    self.actuator.move_to(x, y)?;
                }
            }
            PointerRoute::Position => {
                let x = msg.float(0).ok_or_else(|| bad_args(msg, "expected x float"))?;
                let y = msg.float(1).ok_or_else(|| bad_args(msg, "expected y float"))?;
                self.pad.set_target(f64::from(x), f64::from(y));
            }
            PointerRoute::Center => {
                let (x, y) = self.pad.center();
                info!(x, y, "centering pointer");
                self.actuator.move_to(x, y)?;
            }
        }
        Ok(())
    }

    fn run_button(&self, button: PadButton) -> Result<(), ActuationError> {
        let (x, y) = self.buttons.position(button);
        info!(?button, x, y, "virtual button");
        self.actuator.move_to(x, y)?;
        self.actuator.click()
    }
}

fn bad_args(msg: &OscMessage, reason: &str) -> DispatchError {
    DispatchError::BadArguments {
        address: msg.address.clone(),
        reason: reason.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

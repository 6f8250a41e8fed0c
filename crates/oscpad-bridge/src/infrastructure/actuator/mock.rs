//! Mock input actuator for unit testing.
//!
//! # Why a mock actuator?
//!
//! The real actuator ([`super::enigo::EnigoActuator`]) makes OS API calls
//! that:
//!
//! - Require a desktop session to run.
//! - Actually move the cursor and press keys on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockActuator` replaces all OS calls with in-memory recording.  Every
//! call is pushed into one ordered `Mutex<Vec<ActuatorCall>>` — a single log
//! rather than per-method vectors, because the horizontal-scroll contract is
//! about *ordering* (shift press, scroll, shift release, strictly bracketed)
//! and an ordered log is what the assertion needs.
//!
//! # Failure injection
//!
//! [`MockActuator::failing`] makes every call return
//! `ActuationError::Backend` without recording; [`MockActuator::failing_scroll`]
//! fails only `scroll`, which is how the bracket-release-on-failure path is
//! exercised.

use std::sync::Mutex;

use oscpad_core::domain::keychord::{ModifierKey, Modifiers};

use crate::application::dispatch::{ActuationError, InputActuator};

/// One recorded actuator invocation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    MoveTo(f64, f64),
    Click,
    DoubleClick,
    RightClick,
    Scroll(i32),
    KeyDown(ModifierKey),
    KeyUp(ModifierKey),
    Keystroke(char, Modifiers),
    KeyCode(u16, Modifiers),
    CurrentPosition,
}

/// A mock actuator that records all calls without performing OS API calls.
#[derive(Default)]
pub struct MockActuator {
    /// Ordered log of every successful call.
    pub calls: Mutex<Vec<ActuatorCall>>,
    /// Position reported by `current_position`.
    pub position: Mutex<(f64, f64)>,
    /// When `true`, every method fails without recording.
    pub should_fail: bool,
    /// When `true`, only `scroll` fails; everything else records normally.
    pub fail_scroll: bool,
}

impl MockActuator {
    /// Creates a recording mock where every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock where every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Creates a mock where only `scroll` fails.
    pub fn failing_scroll() -> Self {
        Self {
            fail_scroll: true,
            ..Self::default()
        }
    }

    fn record(&self, call: ActuatorCall) -> Result<(), ActuationError> {
        if self.should_fail {
            return Err(ActuationError::Backend("mock failure".into()));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl InputActuator for MockActuator {
    fn move_to(&self, x: f64, y: f64) -> Result<(), ActuationError> {
        self.record(ActuatorCall::MoveTo(x, y))?;
        *self.position.lock().unwrap() = (x, y);
        Ok(())
    }

    fn click(&self) -> Result<(), ActuationError> {
        self.record(ActuatorCall::Click)
    }

    fn double_click(&self) -> Result<(), ActuationError> {
        self.record(ActuatorCall::DoubleClick)
    }

    fn right_click(&self) -> Result<(), ActuationError> {
        self.record(ActuatorCall::RightClick)
    }

    fn scroll(&self, amount: i32) -> Result<(), ActuationError> {
        if self.fail_scroll {
            return Err(ActuationError::Backend("mock scroll failure".into()));
        }
        self.record(ActuatorCall::Scroll(amount))
    }

    fn key_down(&self, key: ModifierKey) -> Result<(), ActuationError> {
        self.record(ActuatorCall::KeyDown(key))
    }

    fn key_up(&self, key: ModifierKey) -> Result<(), ActuationError> {
        self.record(ActuatorCall::KeyUp(key))
    }

    fn keystroke(&self, ch: char, modifiers: Modifiers) -> Result<(), ActuationError> {
        self.record(ActuatorCall::Keystroke(ch, modifiers))
    }

    fn key_code(&self, code: u16, modifiers: Modifiers) -> Result<(), ActuationError> {
        self.record(ActuatorCall::KeyCode(code, modifiers))
    }

    fn current_position(&self) -> Result<(f64, f64), ActuationError> {
        self.record(ActuatorCall::CurrentPosition)?;
        Ok(*self.position.lock().unwrap())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

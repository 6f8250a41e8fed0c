//! oscpad-bridge library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the bridge do? (for beginners)
//!
//! The *bridge* is the machine-side half of a touch control surface.  The
//! surface (a tablet app) sends one OSC message per UDP datagram for every
//! tap, drag, and button press.  Some of what the user wants — window
//! toggles, zooming, moving the mouse over the controlled application —
//! cannot be reached through the application's own remote API, so the
//! bridge replays those messages as *physical* input instead.
//!
//! The bridge application:
//!
//! 1. Listens for UDP datagrams on the configured port.
//! 2. Decodes each datagram into an address path plus typed arguments.
//! 3. Looks the address up in a fixed routing table (key chord, click,
//!    scroll tier, pointer operation, virtual button).
//! 4. Runs pointer operations through a small state machine that keeps
//!    drag gestures working when the target equals the cursor's current
//!    position (the OS silently ignores such moves).
//! 5. Injects the resulting action through an [`application::dispatch::InputActuator`]
//!    backend — `enigo` in production, an in-memory recorder in tests.

/// Application layer: the message dispatcher and the actuator contract.
pub mod application;

/// Infrastructure layer: OS input backend, UDP receiver, config storage.
pub mod infrastructure;

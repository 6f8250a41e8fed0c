//! Input actuation backends.
//!
//! The production backend injects real OS input through the `enigo` crate;
//! the mock backend records calls in memory for tests and for `--simulate`
//! dry runs.

pub mod enigo;
pub mod mock;

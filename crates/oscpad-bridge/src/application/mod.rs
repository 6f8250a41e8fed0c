//! Use cases for the bridge application.

pub mod dispatch;

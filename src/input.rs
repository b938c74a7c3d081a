//! Input subsystem.
//!
//! `raw` polls the terminal; `service` maps key events to application actions according to
//! the overlay that is open.

pub mod raw;
pub mod service;

pub use raw::RawInputCollector;
pub use service::{InputAction, InputMode, InputStateMachine};

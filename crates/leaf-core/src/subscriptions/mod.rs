//! Built-in subscription sources.
//!
//! - [`terminal_events`] -- keyboard, mouse, and resize input.
//! - [`Every`] -- a repeating timer, used to drive scroll animations.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;

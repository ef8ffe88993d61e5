//! Core runtime for **leaf**.
//!
//! `leaf-core` is the small Elm-architecture runtime the paged view runs in:
//! state lives in a [`Model`], input arrives as messages through
//! [`Subscription`]s, [`Model::update`] handles one message at a time on a
//! single task, and side effects come back out as [`Command`]s.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model rendered into a parent-chosen [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect returned from `update` |
//! | [`Subscription`] | Long-lived event source, started and stopped by diffing |
//! | [`Program`] | Drives a [`Model`] on a real terminal |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for tests |
//!
//! Logging goes through [`tracing`]; see [`logging::log_to_file`].

pub mod command;
pub mod component;
pub mod event;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use logging::log_to_file;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every};

/// Run a leaf application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}

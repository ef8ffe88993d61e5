//! **leaf** -- a swipeable paged view for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything needed to build a
//! leaf application from a single dependency:
//!
//! ```toml
//! [dependencies]
//! leaf = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`leaf_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`leaf_widgets`]
//!   (the page synchronizer, the paged view, and its parts).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use leaf::widgets::paged_view::{self, PagedView};
//! use leaf::{Command, Component, Model};
//! use ratatui::text::Text;
//! use ratatui::Frame;
//!
//! struct Book {
//!     pages: PagedView,
//! }
//!
//! impl Model for Book {
//!     type Message = paged_view::Message;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Self::Message>) {
//!         let pages = PagedView::new(vec![Text::raw("one"), Text::raw("two")]);
//!         (Book { pages }, Command::none())
//!     }
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         self.pages.update(msg)
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.pages.view(frame, frame.area());
//!     }
//! }
//! ```

pub use leaf_core::*;
pub mod widgets {
    pub use leaf_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

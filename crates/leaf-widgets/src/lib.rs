//! Paged-view widgets for **leaf**.
//!
//! The heart of the crate is [`sync::PageSynchronizer`], which owns the
//! current page and is UI-agnostic: it drives anything implementing the
//! [`sync::PageContainer`], [`sync::PageIndicator`], and [`sync::NavControl`]
//! traits. The remaining modules are terminal implementations of those
//! traits, and [`paged_view::PagedView`] wires them together.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`paged_view`] | Complete paged view: pages, indicator, and buttons |
//! | [`strip`] | Horizontally scrolling page strip with drag and fling |
//! | [`indicator`] | Clickable page dots or "2/5" counter |
//! | [`button`] | Previous/next button that can be disabled |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sync`] | Page synchronizer and the collaborator traits it drives |

pub mod button;
pub mod indicator;
pub mod paged_view;
pub mod strip;
pub mod sync;

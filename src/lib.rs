//! Drives sticky header layout from scroll events.
//!
//! The decision logic lives in `pinstack-core`; this crate adds rectangle geometry, scroll
//! events, and a [`StickyHost`] that feeds one into the other and hands results to a render sink.
//!
//! ## Coordinate System
//! The y-axis points down. Content regions are given in content coordinates; the content origin
//! sits at the top of the viewport when the scroll offset is zero.

pub mod events;
mod host;
mod rect;

pub use host::{HostError, StickyHost};
pub use pinstack_core::*;
pub use rect::Rect;

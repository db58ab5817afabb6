//! Sticky header layout.
//!
//! # Conceptual overview
//! A scrolling view has a handful of content regions (section headers, say), each paired with a
//! pinned element of fixed height. As a region scrolls past the top of the viewport, its pinned
//! element takes its place and stays there; pinned elements stack on top of each other in the
//! order they were registered.
//!
//! This crate only makes the decision. It does not render anything, and it doesn’t know how the
//! scroll surface works.
//!
//! ## Items
//! A [`StickyItem`] pairs an [`ItemId`], an opaque content region handle and a pinned height.
//! Items are registered all at once on a [`StickyLayoutEngine`]; registering again replaces the
//! whole list. Registration order decides stacking order.
//!
//! ## Layout passes
//! On every scroll tick, something (a [`PositionLookup`] keyed by id, or a [`PositionSource`]
//! that understands region handles) reports the top edge of each region relative to the viewport
//! top, with positive y pointing down. The engine walks the items in order and produces
//! [`Placements`]: for each item, whether the pinned element is shown and its offset from the
//! viewport top.
//!
//! Passes are pure. The same positions always yield the same placements, and scrolling back up
//! simply hides items again.
//!
//! ## Rendering
//! A [`RenderSink`] applies placements to actual UI elements. The engine never calls one itself;
//! the host that drives scrolling hands each result over.

mod backend;
mod config;
mod engine;
mod error;
mod item;
mod placement;

pub use backend::{PositionLookup, PositionSource, RenderSink};
pub use config::{EngineConfig, DEFAULT_TOLERANCE, SOFT_ITEM_LIMIT};
pub use engine::StickyLayoutEngine;
pub use error::StickyError;
pub use item::{ItemId, StickyItem};
pub use placement::{Placement, Placements};

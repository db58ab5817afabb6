//! Traits for the collaborators on either side of the engine.

use crate::item::ItemId;
use crate::placement::Placements;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;

/// Current top edge of each registered content region, keyed by item id.
///
/// Offsets are relative to the viewport’s top edge: positive is below it, negative has scrolled
/// above it.
pub trait PositionLookup {
    /// Returns the top edge of the item’s content region, or None if it’s unknown.
    fn top_edge(&self, id: &ItemId) -> Option<f64>;
}

impl PositionLookup for HashMap<ItemId, f64> {
    fn top_edge(&self, id: &ItemId) -> Option<f64> {
        self.get(id).copied()
    }
}

impl PositionLookup for BTreeMap<ItemId, f64> {
    fn top_edge(&self, id: &ItemId) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<F: Fn(&ItemId) -> Option<f64>> PositionLookup for F {
    fn top_edge(&self, id: &ItemId) -> Option<f64> {
        self(id)
    }
}

/// Resolves content region handles to their current viewport-relative top edge.
///
/// This is where a toolkit converts region bounds into the viewport’s coordinate space.
pub trait PositionSource<R> {
    fn top_edge(&self, region: &R) -> Option<f64>;
}

/// Receives the result of each layout pass and applies it to the pinned elements.
pub trait RenderSink {
    /// Error type.
    type Error;

    /// Shows, hides and positions the pinned elements.
    fn apply(&mut self, placements: &Placements) -> Result<(), Self::Error>;
}

/// Records every pass.
impl RenderSink for Vec<Placements> {
    type Error = Infallible;

    fn apply(&mut self, placements: &Placements) -> Result<(), Infallible> {
        self.push(placements.clone());
        Ok(())
    }
}

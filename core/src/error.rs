use crate::item::ItemId;
use thiserror::Error;

/// Errors raised by the sticky layout engine.
///
/// All of these are caller contract violations; none are transient.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StickyError {
    /// A registered item had a negative or non-finite pinned height.
    #[error("invalid pinned height {height} for item `{id}`")]
    InvalidHeight { id: ItemId, height: f64 },
    /// Two items in one registration shared an id.
    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),
    /// No position was supplied for a registered item.
    #[error("no position supplied for item `{0}`")]
    MissingPosition(ItemId),
    /// The configured tolerance was negative or non-finite.
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),
}

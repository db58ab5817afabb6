use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stable identifier for a sticky item.
///
/// Either an explicit key chosen by the caller, or a generated one (this is just a UUID).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an id from an explicit key.
    pub fn key(key: impl Into<String>) -> ItemId {
        ItemId(key.into())
    }

    /// Generates a new unique id.
    pub fn generate() -> ItemId {
        ItemId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(key: &str) -> Self {
        ItemId::key(key)
    }
}

impl From<String> for ItemId {
    fn from(key: String) -> Self {
        ItemId(key)
    }
}

/// A content region paired with the pinned element that replaces it once it scrolls past the
/// top of the viewport.
///
/// `R` is an opaque handle to the content region. The engine never looks inside it; it is only
/// handed back to a [`PositionSource`](crate::PositionSource) to ask where the region currently
/// is.
#[derive(Debug, Clone, PartialEq)]
pub struct StickyItem<R = ()> {
    id: ItemId,
    region: R,
    pinned_height: f64,
}

impl<R> StickyItem<R> {
    /// Creates a new sticky item.
    ///
    /// The height is validated when the item is registered, not here.
    pub fn new(id: impl Into<ItemId>, region: R, pinned_height: f64) -> StickyItem<R> {
        StickyItem {
            id: id.into(),
            region,
            pinned_height,
        }
    }

    /// The item’s identity.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// The content region handle.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Height reserved for the pinned element when it is shown.
    pub fn pinned_height(&self) -> f64 {
        self.pinned_height
    }
}

impl StickyItem<()> {
    /// Creates an item without a region handle, for callers that supply positions by id.
    pub fn detached(id: impl Into<ItemId>, pinned_height: f64) -> StickyItem<()> {
        StickyItem::new(id, (), pinned_height)
    }
}

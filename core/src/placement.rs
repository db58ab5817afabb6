use crate::item::ItemId;
use core::ops::Index;
use core::slice;

/// The layout decision for one pinned element.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub(crate) id: ItemId,
    pub(crate) shown: bool,
    pub(crate) offset: f64,
}

impl Placement {
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Whether the pinned element should be visible.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Distance from the viewport top at which the pinned element sits.
    ///
    /// Equal to the summed heights of the shown items registered before this one. Hidden items
    /// still report the offset they would take if they were shown.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl From<Placement> for (ItemId, bool, f64) {
    fn from(p: Placement) -> Self {
        (p.id, p.shown, p.offset)
    }
}

/// Placements for every registered item, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placements {
    pub(crate) rows: Vec<Placement>,
    pub(crate) stack_height: f64,
}

impl Placements {
    pub fn iter(&self) -> slice::Iter<'_, Placement> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Only the placements that should be visible.
    pub fn shown(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.rows.iter().filter(|p| p.shown)
    }

    /// Bottom edge of the pinned stack: the summed height of all shown items.
    pub fn stack_height(&self) -> f64 {
        self.stack_height
    }

    /// Looks up the placement for an item.
    pub fn get(&self, id: &ItemId) -> Option<&Placement> {
        self.rows.iter().find(|p| &p.id == id)
    }

    pub fn into_vec(self) -> Vec<Placement> {
        self.rows
    }
}

impl Index<usize> for Placements {
    type Output = Placement;
    fn index(&self, index: usize) -> &Placement {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Placements {
    type Item = &'a Placement;
    type IntoIter = slice::Iter<'a, Placement>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for Placements {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

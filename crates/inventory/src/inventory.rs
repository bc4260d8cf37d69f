use serde::{Deserialize, Serialize};

use armory_core::ValueObject;

use crate::item::Item;

/// Ordered collection of items.
///
/// Insertion order is significant, duplicates are permitted, and there is
/// no uniqueness constraint. Every transformation returns a new owned
/// `Inventory` and leaves the receiver untouched; the one exception is
/// [`upgrade_in_place`](Self::upgrade_in_place), kept as the documented
/// mutation contrast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Empty inventory.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inventory over an already-validated item sequence.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// New inventory with every power raised by `delta`.
    ///
    /// Same length as the receiver, order preserved; names and broken
    /// flags carry over unchanged. `delta` may be zero or negative.
    pub fn upgrade(&self, delta: i64) -> Self {
        self.items.iter().map(|item| item.upgraded(delta)).collect()
    }

    /// Raise every power by `delta`, mutating this inventory.
    ///
    /// Mutation contrast to [`upgrade`](Self::upgrade): reach for this only
    /// when the inventory is exclusively owned and the in-place update is
    /// deliberate. Anything shared or handed onward wants the owning
    /// variant.
    pub fn upgrade_in_place(&mut self, delta: i64) {
        for item in &mut self.items {
            item.raise_power(delta);
        }
    }

    /// New inventory keeping exactly the items that are not broken.
    ///
    /// Relative order preserved; the result may be shorter than the
    /// receiver, or empty.
    pub fn usable(&self) -> Self {
        self.items
            .iter()
            .filter(|item| !item.is_broken())
            .cloned()
            .collect()
    }

    /// Upgrade by `delta`, then keep only the usable items.
    ///
    /// Equal to `self.upgrade(delta).usable()` by construction.
    pub fn upgrade_usable(&self, delta: i64) -> Self {
        self.upgrade(delta).usable()
    }

    /// First item, in order, with power strictly above `threshold`.
    pub fn first_above(&self, threshold: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.power() > threshold)
    }

    /// Position of the first broken item, `None` when nothing is broken.
    pub fn first_broken_index(&self) -> Option<usize> {
        self.items.iter().position(Item::is_broken)
    }

    /// Whether at least one item is broken. `false` for an empty inventory.
    pub fn any_broken(&self) -> bool {
        self.items.iter().any(Item::is_broken)
    }

    /// Whether every item has power strictly above `threshold`.
    ///
    /// Vacuously `true` for an empty inventory.
    pub fn all_above(&self, threshold: i64) -> bool {
        self.items.iter().all(|item| item.power() > threshold)
    }

    /// Sum of all power scores. `0` for an empty inventory.
    pub fn total_power(&self) -> i64 {
        self.items.iter().map(Item::power).sum()
    }
}

impl ValueObject for Inventory {}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Inventory {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Ordered item storage with index normalization.
//!
//! [`ItemStore`] keeps items in display order. Items live in a slot map keyed
//! by their [`ItemHandle`]; a separate vector holds the order, so a handle
//! stays valid (and unique) for exactly as long as its item is in the store.

use std::ops::Range;

use horizon_listview_core::logging::targets;
use slotmap::SlotMap;

use super::item::{Item, ItemHandle, ItemState};
use crate::error::RangeError;

/// Ordered sequence of list items.
#[derive(Debug)]
pub struct ItemStore<P> {
    slots: SlotMap<ItemHandle, Item<P>>,
    order: Vec<ItemHandle>,
}

impl<P> Default for ItemStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ItemStore<P> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolve an insertion index: negative means "append".
    ///
    /// Fails when the index lies past the end; the store never clamps.
    pub fn normalize_insert_index(&self, index: isize) -> Result<usize, RangeError> {
        let len = self.len();
        if index < 0 {
            return Ok(len);
        }
        let index = index as usize;
        if index > len {
            return Err(RangeError::InsertIndex { index, len });
        }
        Ok(index)
    }

    /// Resolve a removal range: a negative index means "the last item".
    ///
    /// Fails when `[index, index + count)` is not inside the store. A zero
    /// count is never an error.
    pub fn normalize_remove_range(&self, index: isize, count: usize) -> Result<Range<usize>, RangeError> {
        let len = self.len();
        let error = RangeError::RemoveRange { index, count, len };
        if count == 0 {
            let start = if index < 0 { len } else { (index as usize).min(len) };
            return Ok(start..start);
        }

        let start = if index < 0 {
            len.checked_sub(1).ok_or(error.clone())?
        } else {
            index as usize
        };
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(start..end),
            _ => Err(error),
        }
    }

    /// Splice `payloads` in at `index` (negative appends), preserving their
    /// order.
    ///
    /// Returns the range the new items occupy. An empty batch is never an
    /// error: it yields an empty range at the index clamped to the store.
    pub fn insert(&mut self, index: isize, payloads: Vec<P>) -> Result<Range<usize>, RangeError> {
        let count = payloads.len();
        if count == 0 {
            let start = if index < 0 { self.len() } else { (index as usize).min(self.len()) };
            return Ok(start..start);
        }
        let start = self.normalize_insert_index(index)?;

        let handles: Vec<ItemHandle> = payloads
            .into_iter()
            .map(|payload| {
                self.slots.insert_with_key(|handle| Item {
                    handle,
                    payload,
                    state: ItemState::default(),
                })
            })
            .collect();
        self.order.splice(start..start, handles);

        tracing::trace!(target: targets::STORE, index = start, count, len = self.len(), "items inserted");
        Ok(start..start + count)
    }

    /// Remove `count` items starting at `index` (negative means the last item).
    ///
    /// Returns the normalized start index and the removed items, in order.
    pub fn remove(&mut self, index: isize, count: usize) -> Result<(usize, Vec<Item<P>>), RangeError> {
        let range = self.normalize_remove_range(index, count)?;
        let start = range.start;

        let removed: Vec<Item<P>> = self
            .order
            .drain(range)
            .filter_map(|handle| self.slots.remove(handle))
            .collect();

        tracing::trace!(target: targets::STORE, index = start, count = removed.len(), len = self.len(), "items removed");
        Ok((start, removed))
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item<P>> {
        self.order.get(index).and_then(|&handle| self.slots.get(handle))
    }

    /// Mutable item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item<P>> {
        let handle = *self.order.get(index)?;
        self.slots.get_mut(handle)
    }

    /// Item for `handle`, if it is still in the store.
    pub fn by_handle(&self, handle: ItemHandle) -> Option<&Item<P>> {
        self.slots.get(handle)
    }

    /// Current index of `handle`, if it is still in the store.
    pub fn index_of(&self, handle: ItemHandle) -> Option<usize> {
        if !self.slots.contains_key(handle) {
            return None;
        }
        self.order.iter().position(|&h| h == handle)
    }

    /// Handles in display order.
    pub fn handles(&self) -> &[ItemHandle] {
        &self.order
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<P>> + '_ {
        self.order.iter().filter_map(|&handle| self.slots.get(handle))
    }
}

//! Bounded most-recently-used list of file paths.

use std::num::NonZeroUsize;

use indexmap::IndexSet;

use crate::error::ConfigError;

/// What: Ordered set of unique paths with move-to-back-on-push semantics.
///
/// Details:
/// - Items are stored oldest first, newest last.
/// - `push` never evicts. The list may temporarily hold more than `capacity`
///   items and is trimmed to the newest `capacity` entries on the next read
///   (`snapshot`) or rename (`replace`).
#[derive(Debug, Clone)]
pub struct RecencyTracker {
    /// Maximum number of items visible through `snapshot`.
    capacity: NonZeroUsize,
    /// Oldest-first unique items.
    items: IndexSet<String>,
}

impl RecencyTracker {
    /// What: Create an empty tracker.
    ///
    /// Inputs:
    /// - `capacity`: Number of most recent items to keep.
    ///
    /// Output:
    /// - `Ok(RecencyTracker)` or `ConfigError::InvalidCapacity` when `capacity` is zero.
    ///
    /// # Errors
    /// - Returns `Err` when `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(ConfigError::InvalidCapacity { value: capacity })
    }

    /// Create an empty tracker from an already validated capacity.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            items: IndexSet::new(),
        }
    }

    /// Configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// What: Mark `item` as the most recently used entry.
    ///
    /// Details:
    /// - Removes any previous occurrence, then appends it as the newest entry.
    pub fn push(&mut self, item: impl Into<String>) {
        let item = item.into();
        self.items.shift_remove(item.as_str());
        self.items.insert(item);
    }

    /// Remove `item`; returns whether it was present.
    pub fn delete(&mut self, item: &str) -> bool {
        self.items.shift_remove(item)
    }

    /// What: Substitute `old` with `new` at the same position.
    ///
    /// Inputs:
    /// - `old`: Path currently tracked.
    /// - `new`: Replacement path.
    ///
    /// Output:
    /// - `true` when `old` was present (after trimming) and has been replaced.
    ///
    /// Details:
    /// - The list is trimmed first, so an `old` that has already fallen out of the
    ///   bounded window is treated as absent.
    /// - If `new` is already tracked, the earlier of the two positions wins and the
    ///   other occurrence is dropped, so the set never holds duplicates.
    pub fn replace(&mut self, old: &str, new: impl Into<String>) -> bool {
        self.trim();
        let Some(index) = self.items.get_index_of(old) else {
            return false;
        };
        let new = new.into();
        match self.items.get_index_of(new.as_str()) {
            Some(existing) if existing == index => {}
            Some(existing) if existing < index => {
                self.items.shift_remove_index(index);
            }
            Some(existing) => {
                self.items.shift_remove_index(existing);
                self.items.shift_remove_index(index);
                self.items.shift_insert(index, new);
            }
            None => {
                self.items.shift_remove_index(index);
                self.items.shift_insert(index, new);
            }
        }
        true
    }

    /// What: Return the newest `capacity` items, oldest first.
    ///
    /// Details:
    /// - Trims the internal list to the returned window; evicted items are gone for good.
    pub fn snapshot(&mut self) -> Vec<String> {
        self.trim();
        self.items.iter().cloned().collect()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop the oldest entries beyond `capacity`.
    fn trim(&mut self) {
        let excess = self.items.len().saturating_sub(self.capacity.get());
        if excess > 0 {
            self.items.drain(..excess);
        }
    }
}

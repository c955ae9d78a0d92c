//! DynArray: contiguous growable buffer with an explicit doubling policy.
//!
//! Capacity is tracked by the array itself rather than read back from the
//! allocator, so growth is deterministic: the first reservation allocates
//! `INIT_CAP` slots and every later one doubles until the request fits.
//! `n` pushes from empty therefore cost `O(log n)` reallocations.
//!
//! Any growth may move the buffer. Slices and element references obtained
//! before a `push`/`reserve` must not be held across it; the borrow checker
//! enforces this, and callers needing identifiers that survive growth
//! should keep indices.

use crate::error::Error;
use crate::growth::{doubled_capacity, try_grow};
use core::ops::{Index, IndexMut};

#[derive(Debug)]
pub struct DynArray<T> {
    data: Vec<T>,
    capacity: usize,
    reallocations: usize,
}

impl<T> DynArray<T> {
    /// Capacity of the first allocation.
    pub const INIT_CAP: usize = 16;

    /// Empty array; nothing is allocated until the first reservation.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            reallocations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the backing buffer has been (re)allocated.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Ensures room for at least `expected` elements in total.
    ///
    /// No-op if the capacity already suffices. Otherwise doubles (starting
    /// from `INIT_CAP` when empty) until `expected` fits, then reallocates
    /// once. On error the array is unchanged.
    pub fn reserve(&mut self, expected: usize) -> Result<(), Error> {
        if self.capacity >= expected {
            return Ok(());
        }
        let capacity = doubled_capacity(self.capacity, Self::INIT_CAP, |c| c >= expected)?;
        try_grow(&mut self.data, capacity)?;
        tracing::trace!(old = self.capacity, new = capacity, "dyn array reallocated");
        self.capacity = capacity;
        self.reallocations += 1;
        Ok(())
    }

    /// Appends `value`, growing first if full. Amortized O(1).
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let needed = self.data.len().checked_add(1).ok_or(Error::CapacityOverflow)?;
        self.reserve(needed)?;
        self.data.push(value);
        Ok(())
    }

    /// Removes and returns the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Shortens the array to `len` elements; capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Drops every element but keeps the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drops every element and releases the buffer, returning to the
    /// freshly constructed state.
    pub fn clear_and_release(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> DynArray<T> {
    /// Appends a copy of every element of `items` with at most one reallocation.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), Error> {
        let needed = self
            .data
            .len()
            .checked_add(items.len())
            .ok_or(Error::CapacityOverflow)?;
        self.reserve(needed)?;
        self.data.extend_from_slice(items);
        Ok(())
    }
}

/// The clone owns a buffer of the same tracked capacity, so later pushes
/// grow it through `reserve` exactly as they would the source.
impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            reallocations: self.reallocations,
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

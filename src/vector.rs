//! Growable contiguous vector with explicit capacity.
//!
//! `Vector<T>` keeps its live elements in an owned `Vec<T>` and tracks the logical
//! capacity itself. The backing block always has room for at least `capacity`
//! elements, so appends below capacity never touch the allocator.

use std::fmt;
use std::mem;
use std::ops::Range;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{Result, VectorError};
use crate::options::{VectorBuilder, VectorOption};

pub type IntVector = Vector<i64>;
pub type StringVector = Vector<String>;
pub type Float64Vector = Vector<f64>;

// =============================================================================
// Construction
// =============================================================================

pub struct Vector<T> {
    /// Live elements, `data.len() == size`.
    data: Vec<T>,
    capacity: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector with zero capacity.
    pub fn new() -> Self {
        Vector {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates an empty vector with room for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Vector {
            data: Vec::with_capacity(n),
            capacity: n,
        }
    }

    /// Starts a [`VectorBuilder`].
    pub fn builder() -> VectorBuilder<T> {
        VectorBuilder::new()
    }

    /// Swaps in a new backing block. `data.capacity()` must be at least `capacity`.
    pub(crate) fn replace_storage(&mut self, data: Vec<T>, capacity: usize) {
        debug_assert!(data.len() <= capacity && data.capacity() >= capacity);
        self.data = data;
        self.capacity = capacity;
    }
}

impl<T: Clone> Vector<T> {
    /// Builds a vector by applying `options` to an empty draft, in order.
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = VectorOption<T>>,
    {
        let mut draft = Vector::new();
        let mut applied = 0usize;
        for option in options {
            option.apply(&mut draft);
            applied += 1;
        }
        debug!(
            "built vector from {} option(s): size={}, capacity={}",
            applied,
            draft.size(),
            draft.capacity()
        );
        draft
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Capacity & growth
// =============================================================================

impl<T> Vector<T> {
    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of elements the storage holds before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when there are no live elements.
    pub fn empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Makes room for `new_capacity` elements. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.reallocate(new_capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        trace!(
            "reallocating vector: capacity {} -> {} ({} live)",
            self.capacity,
            new_capacity,
            self.data.len()
        );
        let mut block = Vec::with_capacity(new_capacity);
        block.append(&mut self.data);
        self.data = block;
        self.capacity = new_capacity;
    }

    fn next_capacity(&self) -> usize {
        if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(2)
        }
    }

    fn grow_if_full(&mut self) {
        if self.data.len() == self.capacity {
            self.reserve(self.next_capacity());
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Truncates to `new_size`, or extends with copies of `value`.
    ///
    /// Truncation keeps the capacity. Extension reserves exactly `new_size` when the
    /// current capacity is too small.
    pub fn resize(&mut self, new_size: usize, value: T) {
        if new_size <= self.data.len() {
            self.data.truncate(new_size);
            return;
        }
        self.reserve(new_size);
        self.data.resize(new_size, value);
    }
}

// =============================================================================
// Positional access
// =============================================================================

impl<T> Vector<T> {
    /// Element at `index`, or `OutOfRange` when `index >= size`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or_else(|| VectorError::out_of_range("at", index, self.data.len()))
    }

    /// Mutable element at `index`, or `OutOfRange` when `index >= size`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| VectorError::out_of_range("at_mut", index, size))
    }

    /// First element, or `EmptyContainer`.
    pub fn front(&self) -> Result<&T> {
        self.data.first().ok_or_else(|| VectorError::empty("front"))
    }

    /// Last element, or `EmptyContainer`.
    pub fn back(&self) -> Result<&T> {
        self.data.last().ok_or_else(|| VectorError::empty("back"))
    }

    /// The live elements, never the spare slots.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// First live position, always 0.
    pub fn begin(&self) -> usize {
        0
    }

    /// One past the last live position. Reflects the size at the time of the call.
    pub fn end(&self) -> usize {
        self.data.len()
    }

    /// The valid index range `begin()..end()`.
    pub fn range(&self) -> Range<usize> {
        self.begin()..self.end()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

// =============================================================================
// Positional mutation
// =============================================================================

impl<T> Vector<T> {
    /// Appends `value`, doubling the capacity first when full.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.data.push(value);
    }

    /// Removes and returns the last element, or `EmptyContainer`. Capacity is unchanged.
    pub fn pop_back(&mut self) -> Result<T> {
        self.data.pop().ok_or_else(|| VectorError::empty("pop_back"))
    }

    /// Places `value` at `index`, shifting `[index, size)` one slot right.
    /// `index == size` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let size = self.data.len();
        if index > size {
            return Err(VectorError::out_of_range("insert", index, size));
        }
        self.grow_if_full();
        self.data.push(value);
        self.data[index..].rotate_right(1);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, size)` one slot left.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        let size = self.data.len();
        if index >= size {
            return Err(VectorError::out_of_range("erase", index, size));
        }
        Ok(self.data.remove(index))
    }

    /// Drops every element, keeping the storage.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Replaces the contents, `size == capacity == values.len()` afterwards.
    pub fn assign(&mut self, values: impl IntoIterator<Item = T>) {
        let data: Vec<T> = values.into_iter().collect();
        let capacity = data.len();
        self.replace_storage(data, capacity);
    }

    /// Exchanges storage, size and capacity with `other` in O(1).
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }
}

// =============================================================================
// Presentation & std traits
// =============================================================================

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector[{}]", self.data.iter().join(" "))
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("size", &self.data.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Vector {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        let capacity = data.len();
        Vector { data, capacity }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(seq: &[T]) -> Self {
        Vector::from(seq.to_vec())
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

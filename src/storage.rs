//! The dense backing array shared by the array-shaped queues.

use crate::error::Error;
use core::ops::{Index, IndexMut};
use log::trace;
use std::collections::VecDeque;

/// The largest number of elements a backing array may be asked to hold.
pub const MAX_ARRAY_SIZE: usize = i32::MAX as usize - 8;

/// Capacity used by the `new()` constructors. Nothing is allocated until the first insert.
pub const DEFAULT_CAPACITY: usize = 0;

/// Computes the capacity a backing array of `capacity` slots grows to when it must hold
/// at least `min_size` elements: roughly 1.5x, clamped to `MAX_ARRAY_SIZE`, but never
/// less than `min_size`.
pub fn grown_capacity(capacity: usize, min_size: usize) -> usize {
    let grown = capacity.saturating_add(capacity / 2).min(MAX_ARRAY_SIZE);
    grown.max(min_size)
}

/// A resizable dense array. The logical size is the length of the inner `Vec`; spare
/// capacity beyond it is never read.
///
/// Capacity only grows. Removing elements, or calling `clear`, keeps the allocation so
/// that a queue can be refilled without reallocating.
#[derive(Clone, Eq, PartialEq)]
pub struct Storage<T> {
    items: Vec<T>,
}

impl<T> Storage<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity > MAX_ARRAY_SIZE {
            return Err(Error::InvalidCapacity {
                requested: capacity,
                max: MAX_ARRAY_SIZE,
            });
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
        })
    }

    /// Takes ownership of `items` without copying them.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Copies the contents of any `ArraySource` into a new, exactly-sized store.
    pub fn from_source<S>(source: &S) -> Self
    where
        S: ArraySource<T> + ?Sized,
    {
        let mut items = Vec::with_capacity(source.source_len());
        source.copy_into(&mut items);
        Self { items }
    }

    /// Copies the first `size` elements of `array`.
    pub fn from_slice(array: &[T], size: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        if size > array.len() {
            return Err(Error::IndexOutOfRange {
                index: size,
                len: array.len(),
            });
        }
        Ok(Self {
            items: array[..size].to_vec(),
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Makes room for at least `min_size` elements, preserving the current contents.
    pub fn ensure_capacity(&mut self, min_size: usize) {
        let capacity = self.items.capacity();
        if min_size <= capacity {
            return;
        }
        let new_capacity = grown_capacity(capacity, min_size);
        trace!("storage: growing from {} to {} slots", capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
    }

    /// Appends `value` after the last occupied slot.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(value);
    }

    /// Inserts `value` at `index`, shifting everything after it one slot to the right.
    pub fn insert(&mut self, index: usize, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(index, value);
    }

    /// Removes the element at `index`, shifting everything after it one slot to the left.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Removes the element at `index` and moves the last element into its slot.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Resets the logical size to zero. The allocation is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Index of the first element equal to `value`, scanning from the front.
    pub fn position_first(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Index of the last element equal to `value`, scanning from the back.
    pub fn position_last(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|item| item == value)
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Storage<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Storage<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

use core::fmt::{Debug, Formatter};
impl<T: Debug> Debug for Storage<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

/// A collection that can dump its contents into an array.
///
/// Bulk constructors accept any `ArraySource`, so seeding a queue from another collection
/// costs one copy. Every queue in this crate is an `ArraySource`, which is how a queue is
/// rebuilt under a different comparator.
pub trait ArraySource<T> {
    /// The number of elements `copy_into` will append.
    fn source_len(&self) -> usize;

    /// Appends clones of every element to `dest`, in the collection's own storage order.
    fn copy_into(&self, dest: &mut Vec<T>);
}

impl<T: Clone> ArraySource<T> for [T] {
    fn source_len(&self) -> usize {
        self.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        dest.extend_from_slice(self);
    }
}

impl<T: Clone> ArraySource<T> for Vec<T> {
    fn source_len(&self) -> usize {
        self.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        dest.extend_from_slice(self);
    }
}

impl<T: Clone> ArraySource<T> for VecDeque<T> {
    fn source_len(&self) -> usize {
        self.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        dest.extend(self.iter().cloned());
    }
}

impl<T: Clone> ArraySource<T> for Storage<T> {
    fn source_len(&self) -> usize {
        self.items.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        dest.extend_from_slice(&self.items);
    }
}

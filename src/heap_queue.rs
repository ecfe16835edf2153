use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Error;
use crate::queue::{check_index, IntoIter, PriorityQueue};
use crate::storage::{ArraySource, Storage};
use core::iter::FromIterator;
use log::debug;

/// A priority queue over an implicit binary heap.
///
/// The children of slot `i` live at `2i + 1` and `2i + 2`. For every slot other than the
/// root, the element is never more extreme than its parent, so `first()` (and `peek(0)`)
/// is always the most extreme element, and `enqueue` / `dequeue` are O(log n).
#[derive(Clone)]
pub struct HeapPriorityQueue<T> {
    storage: Storage<T>,
    comparator: Comparator<T>,
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

impl<T> HeapPriorityQueue<T> {
    pub fn new() -> Self
    where
        T: NaturalOrder,
    {
        Self::with_comparator(Comparator::natural())
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error>
    where
        T: NaturalOrder,
    {
        Self::with_capacity_and_comparator(capacity, Comparator::natural())
    }

    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            storage: Storage::new(),
            comparator,
        }
    }

    pub fn with_capacity_and_comparator(
        capacity: usize,
        comparator: Comparator<T>,
    ) -> Result<Self, Error> {
        Ok(Self {
            storage: Storage::with_capacity(capacity)?,
            comparator,
        })
    }

    /// Heapifies `items` in place. O(n).
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: NaturalOrder,
    {
        Self::from_vec_with_comparator(items, Comparator::natural())
    }

    pub fn from_vec_with_comparator(items: Vec<T>, comparator: Comparator<T>) -> Self {
        Self::from_storage(Storage::from_vec(items), comparator)
    }

    /// Copies the first `size` elements of `array` and heapifies them.
    pub fn from_slice(array: &[T], size: usize) -> Result<Self, Error>
    where
        T: Clone + NaturalOrder,
    {
        Self::from_slice_with_comparator(array, size, Comparator::natural())
    }

    pub fn from_slice_with_comparator(
        array: &[T],
        size: usize,
        comparator: Comparator<T>,
    ) -> Result<Self, Error>
    where
        T: Clone,
    {
        Ok(Self::from_storage(Storage::from_slice(array, size)?, comparator))
    }

    pub fn from_source<S>(source: &S) -> Self
    where
        S: ArraySource<T> + ?Sized,
        T: NaturalOrder,
    {
        Self::from_source_with_comparator(source, Comparator::natural())
    }

    /// Copies the contents of `source` and heapifies them. Since every queue is an
    /// `ArraySource`, this is also how a queue is rebuilt under a new comparator.
    pub fn from_source_with_comparator<S>(source: &S, comparator: Comparator<T>) -> Self
    where
        S: ArraySource<T> + ?Sized,
    {
        Self::from_storage(Storage::from_source(source), comparator)
    }

    pub(crate) fn from_storage(storage: Storage<T>, comparator: Comparator<T>) -> Self {
        let mut heap = Self {
            storage,
            comparator,
        };
        heap.heapify();
        heap
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Consumes the heap, returning the backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Bottom-up heap construction: sift down every parent, last parent first.
    fn heapify(&mut self) {
        let len = self.storage.len();
        if len < 2 {
            return;
        }
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
        debug!("heap queue: heapified {} elements", len);
        self.check();
    }

    /// Moves the element at `i` toward the root until its parent is not less extreme.
    /// Returns the element's final index.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = parent(i);
            if !self
                .comparator
                .precedes(&self.storage[i], &self.storage[parent])
            {
                break;
            }
            self.storage.swap(i, parent);
            i = parent;
        }
        i
    }

    /// Moves the element at `i` away from the root, always swapping with the more extreme
    /// child, until neither child is more extreme. Returns the element's final index.
    fn sift_down(&mut self, mut i: usize) -> usize {
        let len = self.storage.len();
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            let right = right(i);
            let child = if right < len
                && self
                    .comparator
                    .precedes(&self.storage[right], &self.storage[left])
            {
                right
            } else {
                left
            };
            if !self
                .comparator
                .precedes(&self.storage[child], &self.storage[i])
            {
                break;
            }
            self.storage.swap(i, child);
            i = child;
        }
        i
    }

    /// Removes the element at `index`, filling the hole with the last element.
    fn remove_at(&mut self, index: usize) -> T {
        let value = self.storage.swap_remove(index);
        if index < self.storage.len() {
            // The element moved in from the tail may belong below the hole or, when it
            // came from another subtree, above it.
            if self.sift_down(index) == index {
                self.sift_up(index);
            }
        }
        self.check();
        value
    }

    /// Returns true if every element is no more extreme than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.storage.len()).all(|i| {
            !self
                .comparator
                .precedes(&self.storage[i], &self.storage[parent(i)])
        })
    }

    #[cfg(test)]
    fn check(&self) {
        assert!(self.is_heap(), "heap invariant violated");
    }

    #[cfg(not(test))]
    #[inline]
    fn check(&self) {}

    /// Applies `f` to the root element, then restores the heap, since `f` may have
    /// changed the element's ordering key.
    pub fn modify_first<R, F>(&mut self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut T) -> R,
    {
        if self.storage.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let result = f(&mut self.storage[0]);
        self.on_changed();
        Ok(result)
    }
}

impl<T> PriorityQueue<T> for HeapPriorityQueue<T> {
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn enqueue(&mut self, value: T) {
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
        self.check();
    }

    fn dequeue(&mut self) -> Result<T, Error> {
        if self.storage.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let result = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.sift_down(0);
        }
        self.check();
        Ok(result)
    }

    fn first(&self) -> Result<&T, Error> {
        self.storage.get(0).ok_or(Error::EmptyQueue)
    }

    fn peek(&self, index: usize) -> Result<&T, Error> {
        check_index(index, self.storage.len())?;
        Ok(&self.storage[index])
    }

    fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.storage.position_first(value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    fn remove_last(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.storage.position_last(value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Re-establishes the heap after the root element was changed in place.
    fn on_changed(&mut self) {
        if !self.storage.is_empty() {
            self.sift_down(0);
        }
    }

    fn clear(&mut self) {
        self.storage.clear();
    }

    fn comparator(&self) -> Option<&Comparator<T>> {
        self.comparator.as_custom()
    }

    fn to_array_into(&self, dest: &mut Vec<T>)
    where
        T: Clone,
    {
        dest.clear();
        self.storage.copy_into(dest);
    }
}

impl<T: NaturalOrder> Default for HeapPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NaturalOrder> FromIterator<T> for HeapPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for HeapPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

/// Consumes the heap, yielding elements in priority order.
impl<T> IntoIterator for HeapPriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T, Self>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Clone> ArraySource<T> for HeapPriorityQueue<T> {
    fn source_len(&self) -> usize {
        self.storage.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        self.storage.copy_into(dest);
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for HeapPriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for item in self.storage.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}

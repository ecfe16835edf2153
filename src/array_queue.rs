use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Error;
use crate::queue::{check_index, IntoIter, PriorityDequeue, PriorityQueue};
use crate::storage::{ArraySource, Storage};
use core::cmp::Ordering;
use core::iter::FromIterator;
use core::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use log::debug;

/// A priority queue over an unordered array.
///
/// `enqueue` is an O(1) append. Finding the most extreme element needs a scan of the
/// whole array, so the queue remembers where the last scan found it. Inserts that
/// cannot cheaply prove the remembered index still valid drop it, and the next
/// `first` or `dequeue` scans again.
///
/// The backing array is not kept in priority order: `peek(0)` is just the oldest
/// surviving element. Use `first` for the most extreme one.
#[derive(Clone)]
pub struct ArrayPriorityQueue<T> {
    storage: Storage<T>,

    /// Index of a most extreme element, or `None` if unknown.
    /// When `Some(i)`, always `i < storage.len()`.
    cached_extreme: ExtremeIndex,

    comparator: Comparator<T>,
}

/// The memoized extreme index. `first(&self)` updates it through a shared reference, so
/// it lives in an atomic; `usize::MAX` means unknown. The queue is not synchronized, so
/// relaxed ordering is enough.
struct ExtremeIndex(AtomicUsize);

const UNKNOWN: usize = usize::MAX;

impl ExtremeIndex {
    fn unknown() -> Self {
        ExtremeIndex(AtomicUsize::new(UNKNOWN))
    }

    fn get(&self) -> Option<usize> {
        match self.0.load(AtomicOrdering::Relaxed) {
            UNKNOWN => None,
            index => Some(index),
        }
    }

    fn set(&self, index: Option<usize>) {
        self.0
            .store(index.unwrap_or(UNKNOWN), AtomicOrdering::Relaxed);
    }
}

impl Clone for ExtremeIndex {
    fn clone(&self) -> Self {
        ExtremeIndex(AtomicUsize::new(self.0.load(AtomicOrdering::Relaxed)))
    }
}

impl<T> ArrayPriorityQueue<T> {
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
        Self::from_storage(Storage::new(), comparator)
    }

    pub fn with_capacity_and_comparator(
        capacity: usize,
        comparator: Comparator<T>,
    ) -> Result<Self, Error> {
        Ok(Self::from_storage(Storage::with_capacity(capacity)?, comparator))
    }

    /// Uses `items` as the backing array, without copying.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: NaturalOrder,
    {
        Self::from_vec_with_comparator(items, Comparator::natural())
    }

    pub fn from_vec_with_comparator(items: Vec<T>, comparator: Comparator<T>) -> Self {
        Self::from_storage(Storage::from_vec(items), comparator)
    }

    /// Copies the first `size` elements of `array`.
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

    pub fn from_source_with_comparator<S>(source: &S, comparator: Comparator<T>) -> Self
    where
        S: ArraySource<T> + ?Sized,
    {
        Self::from_storage(Storage::from_source(source), comparator)
    }

    pub(crate) fn from_storage(storage: Storage<T>, comparator: Comparator<T>) -> Self {
        if !storage.is_empty() {
            debug!("array queue: seeded with {} elements", storage.len());
        }
        Self {
            storage,
            cached_extreme: ExtremeIndex::unknown(),
            comparator,
        }
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Consumes the queue, returning the backing array in its current order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Returns the index of a most extreme element, scanning for it if it is not known.
    fn resolve_extreme(&self) -> Option<usize> {
        if let Some(index) = self.cached_extreme.get() {
            return Some(index);
        }
        let items = self.storage.as_slice();
        if items.is_empty() {
            return None;
        }
        // Right to left, so that among equals the rightmost one wins.
        let mut extreme = items.len() - 1;
        for i in (0..extreme).rev() {
            if self.comparator.precedes(&items[i], &items[extreme]) {
                extreme = i;
            }
        }
        self.cached_extreme.set(Some(extreme));
        Some(extreme)
    }

    fn remove_at(&mut self, index: usize) -> T {
        let value = self.storage.remove(index);
        self.cached_extreme.set(None);
        value
    }

    /// Applies `f` to the most extreme element, then drops the cached extreme index,
    /// since `f` may have changed the element's ordering key.
    pub fn modify_first<R, F>(&mut self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut T) -> R,
    {
        let index = self.resolve_extreme().ok_or(Error::EmptyQueue)?;
        let result = f(&mut self.storage[index]);
        self.on_changed();
        Ok(result)
    }
}

impl<T> PriorityQueue<T> for ArrayPriorityQueue<T> {
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn enqueue(&mut self, value: T) {
        if let Some(extreme) = self.cached_extreme.get() {
            match self.comparator.compare(&value, &self.storage[extreme]) {
                Ordering::Less => self.cached_extreme.set(Some(self.storage.len())),
                Ordering::Greater => self.cached_extreme.set(None),
                Ordering::Equal => {}
            }
        }
        self.storage.push(value);
    }

    fn dequeue(&mut self) -> Result<T, Error> {
        let index = self.resolve_extreme().ok_or(Error::EmptyQueue)?;
        Ok(self.remove_at(index))
    }

    fn first(&self) -> Result<&T, Error> {
        let index = self.resolve_extreme().ok_or(Error::EmptyQueue)?;
        Ok(&self.storage[index])
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

    fn on_changed(&mut self) {
        self.cached_extreme.set(None);
    }

    fn clear(&mut self) {
        self.storage.clear();
        self.cached_extreme.set(None);
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

impl<T> PriorityDequeue<T> for ArrayPriorityQueue<T> {
    /// Shifts every element one slot to the right; O(n).
    fn enqueue_first(&mut self, value: T) {
        self.storage.insert(0, value);
        self.cached_extreme.set(None);
    }

    fn dequeue_last(&mut self) -> Result<T, Error> {
        let value = self.storage.pop().ok_or(Error::EmptyQueue)?;
        if self.cached_extreme.get() == Some(self.storage.len()) {
            self.cached_extreme.set(None);
        }
        Ok(value)
    }

    fn last(&self) -> Result<&T, Error> {
        self.storage.as_slice().last().ok_or(Error::EmptyQueue)
    }
}

impl<T: NaturalOrder> Default for ArrayPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NaturalOrder> FromIterator<T> for ArrayPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ArrayPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

/// Consumes the queue, yielding elements in priority order.
impl<T> IntoIterator for ArrayPriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T, Self>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Clone> ArraySource<T> for ArrayPriorityQueue<T> {
    fn source_len(&self) -> usize {
        self.storage.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        self.storage.copy_into(dest);
    }
}

use core::fmt::{Debug, Formatter};
impl<T: Debug> Debug for ArrayPriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("ArrayPriorityQueue")
            .field("items", &self.storage)
            .field("cached_extreme", &self.cached_extreme.get())
            .field("comparator", &self.comparator)
            .finish()
    }
}

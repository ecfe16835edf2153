use crate::comparator::Comparator;
use crate::error::Error;
use crate::queue::{check_index, IntoIter, PriorityDequeue, PriorityQueue};
use crate::storage::{grown_capacity, ArraySource, MAX_ARRAY_SIZE};
use core::iter::FromIterator;
use log::trace;
use std::collections::VecDeque;

/// A first-in, first-out queue over a ring buffer.
///
/// This is the deque-shaped store for callers who mostly work both ends: `enqueue`,
/// `dequeue`, `enqueue_first` and `dequeue_last` are all O(1). It carries no ordering;
/// elements leave in insertion order and `comparator()` is always `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayFifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> ArrayFifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity > MAX_ARRAY_SIZE {
            return Err(Error::InvalidCapacity {
                requested: capacity,
                max: MAX_ARRAY_SIZE,
            });
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
        })
    }

    /// Uses `items` as the ring buffer; the front of the vector is the head of the queue.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: VecDeque::from(items),
        }
    }

    pub fn from_source<S>(source: &S) -> Self
    where
        S: ArraySource<T> + ?Sized,
    {
        let mut items = Vec::with_capacity(source.source_len());
        source.copy_into(&mut items);
        Self::from_vec(items)
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Grows the ring with the same policy as `Storage::ensure_capacity`.
    fn ensure_capacity(&mut self, min_size: usize) {
        let capacity = self.items.capacity();
        if min_size <= capacity {
            return;
        }
        let new_capacity = grown_capacity(capacity, min_size);
        trace!("fifo queue: growing from {} to {} slots", capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
    }

    fn remove_at(&mut self, index: usize) -> bool {
        self.items.remove(index).is_some()
    }
}

impl<T> PriorityQueue<T> for ArrayFifoQueue<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn enqueue(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push_back(value);
    }

    fn dequeue(&mut self) -> Result<T, Error> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }

    fn first(&self) -> Result<&T, Error> {
        self.items.front().ok_or(Error::EmptyQueue)
    }

    fn peek(&self, index: usize) -> Result<&T, Error> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|item| item == value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    fn remove_last(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().rposition(|item| item == value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Insertion order does not depend on element values, so there is nothing to redo.
    fn on_changed(&mut self) {}

    fn clear(&mut self) {
        self.items.clear();
    }

    fn comparator(&self) -> Option<&Comparator<T>> {
        None
    }

    fn to_array_into(&self, dest: &mut Vec<T>)
    where
        T: Clone,
    {
        dest.clear();
        self.items.copy_into(dest);
    }
}

impl<T> PriorityDequeue<T> for ArrayFifoQueue<T> {
    fn enqueue_first(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push_front(value);
    }

    fn dequeue_last(&mut self) -> Result<T, Error> {
        self.items.pop_back().ok_or(Error::EmptyQueue)
    }

    fn last(&self) -> Result<&T, Error> {
        self.items.back().ok_or(Error::EmptyQueue)
    }
}

impl<T> Default for ArrayFifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayFifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayFifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T> IntoIterator for ArrayFifoQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T, Self>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Clone> ArraySource<T> for ArrayFifoQueue<T> {
    fn source_len(&self) -> usize {
        self.items.len()
    }
    fn copy_into(&self, dest: &mut Vec<T>) {
        self.items.copy_into(dest);
    }
}

use core::fmt::{Debug, Formatter};
impl<T: Debug> Debug for ArrayFifoQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap_queue::HeapPriorityQueue;

    #[test]
    fn fifo_order() {
        let mut q = ArrayFifoQueue::new();
        q.enqueue_all(vec![5, 3, 8]);
        assert_eq!(q.first(), Ok(&5));
        assert_eq!(q.dequeue(), Ok(5));
        q.enqueue(1);
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![3, 8, 1]);
        assert_eq!(q.dequeue(), Err(Error::EmptyQueue));
        assert!(q.comparator().is_none());
    }

    #[test]
    fn both_ends() {
        let mut q: ArrayFifoQueue<char> = "bcd".chars().collect();
        q.enqueue_first('a');
        assert_eq!(q.last(), Ok(&'d'));
        assert_eq!(q.dequeue_last(), Ok('d'));
        assert_eq!(q.peek(0), Ok(&'a'));
        assert_eq!(q.peek(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(q.to_array(), vec!['a', 'b', 'c']);
        q.clear();
        assert_eq!(q.last(), Err(Error::EmptyQueue));
        assert_eq!(q.dequeue_last(), Err(Error::EmptyQueue));
    }

    #[test]
    fn remove_values() {
        let mut q = ArrayFifoQueue::from_vec(vec![1, 2, 1, 3]);
        assert!(q.remove_first(&1));
        assert_eq!(q.to_array(), vec![2, 1, 3]);
        assert!(q.remove_last(&3));
        assert!(!q.remove_last(&3));
        assert_eq!(q.to_array(), vec![2, 1]);
    }

    #[test]
    fn capacity_checks_and_growth() {
        assert_eq!(
            ArrayFifoQueue::<u8>::with_capacity(MAX_ARRAY_SIZE + 1).err(),
            Some(Error::InvalidCapacity {
                requested: MAX_ARRAY_SIZE + 1,
                max: MAX_ARRAY_SIZE,
            })
        );
        let mut q = ArrayFifoQueue::with_capacity(2).unwrap();
        for i in 0..50u32 {
            q.enqueue(i);
        }
        assert!(q.capacity() >= 50);
        assert_eq!(q.len(), 50);
    }

    #[test]
    fn feeds_a_heap() {
        let q: ArrayFifoQueue<i32> = vec![4, 9, 1].into_iter().collect();
        let heap = HeapPriorityQueue::from_source(&q);
        assert_eq!(heap.into_iter().collect::<Vec<_>>(), vec![1, 4, 9]);
        assert_eq!(q.len(), 3);
    }
}

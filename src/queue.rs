//! The contracts shared by every queue in the crate.

use crate::comparator::Comparator;
use crate::error::Error;
use core::marker::PhantomData;

/// An ordered multiset: elements go in with `enqueue` and come out, most extreme first,
/// with `dequeue`.
///
/// "Most extreme" means minimal under the queue's comparator. Duplicates are kept.
pub trait PriorityQueue<T> {
    /// The number of elements in the queue.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enqueue(&mut self, value: T);

    /// Enqueues every value, one at a time.
    fn enqueue_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for value in values {
            self.enqueue(value);
        }
    }

    /// Removes and returns the most extreme element.
    fn dequeue(&mut self) -> Result<T, Error>;

    /// Returns the most extreme element without removing it.
    fn first(&self) -> Result<&T, Error>;

    /// Reads the element at `index` of the backing array. Only the heap queue guarantees
    /// that `peek(0)` is the most extreme element.
    fn peek(&self, index: usize) -> Result<&T, Error>;

    /// Removes the first element, scanning from the front, that equals `value`.
    /// Returns `false` and leaves the queue untouched if there is none.
    fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes the last element, scanning from the back, that equals `value`.
    fn remove_last(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Tells the queue that an element's ordering key was changed in place, so that
    /// anything it knows about the order must be re-established.
    fn on_changed(&mut self);

    /// Removes every element. Capacity is kept.
    fn clear(&mut self);

    /// The explicit comparator, or `None` when the queue uses natural order.
    fn comparator(&self) -> Option<&Comparator<T>>;

    /// Copies the contents, in backing-array order, into `dest`, replacing whatever
    /// `dest` held. `dest`'s allocation is reused when it is large enough.
    fn to_array_into(&self, dest: &mut Vec<T>)
    where
        T: Clone;

    /// Copies the contents, in backing-array order, into a new vector. The queue is
    /// not drained.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut dest = Vec::with_capacity(self.len());
        self.to_array_into(&mut dest);
        dest
    }

    /// Returns an iterator that **dequeues** as it advances.
    ///
    /// Unlike most Rust iterators this one consumes the queue's contents: every call to
    /// `next` is a `dequeue`. Dropping the iterator early leaves the remaining elements
    /// in the queue.
    fn drain(&mut self) -> Drain<'_, T, Self>
    where
        Self: Sized,
    {
        Drain {
            queue: self,
            _marker: PhantomData,
        }
    }
}

/// A queue that can also be worked from its tail, and fed at its head.
///
/// Only array-shaped queues implement this; in a binary heap no position other than the
/// root has a meaning.
pub trait PriorityDequeue<T>: PriorityQueue<T> {
    /// Inserts `value` at the head of the backing array.
    fn enqueue_first(&mut self, value: T);

    /// Removes and returns the element at the tail of the backing array.
    fn dequeue_last(&mut self) -> Result<T, Error>;

    /// Reads the element at the tail of the backing array.
    fn last(&self) -> Result<&T, Error>;
}

/// Checks that `index` addresses an element of a queue holding `len` elements.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if len == 0 {
        Err(Error::EmptyQueue)
    } else if index >= len {
        Err(Error::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}

/// Destructive iterator returned by `PriorityQueue::drain`.
pub struct Drain<'a, T, Q: PriorityQueue<T>> {
    queue: &'a mut Q,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, Q: PriorityQueue<T>> Iterator for Drain<'a, T, Q> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<'a, T, Q: PriorityQueue<T>> ExactSizeIterator for Drain<'a, T, Q> {}

/// Owning iterator over a queue. Like `Drain`, every `next` is a `dequeue`, so elements
/// come out in priority order.
pub struct IntoIter<T, Q: PriorityQueue<T>> {
    queue: Q,
    _marker: PhantomData<fn() -> T>,
}

impl<T, Q: PriorityQueue<T>> IntoIter<T, Q> {
    pub(crate) fn new(queue: Q) -> Self {
        Self {
            queue,
            _marker: PhantomData,
        }
    }
}

impl<T, Q: PriorityQueue<T>> Iterator for IntoIter<T, Q> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, Q: PriorityQueue<T>> ExactSizeIterator for IntoIter<T, Q> {}

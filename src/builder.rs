use crate::array_queue::ArrayPriorityQueue;
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Error;
use crate::heap_queue::HeapPriorityQueue;
use crate::storage::{Storage, DEFAULT_CAPACITY};
use log::debug;

/// Collects the construction-time settings of a priority queue: initial capacity,
/// comparator and initial contents. The same settings can build either engine.
///
/// ```
/// use prioq::{Comparator, PriorityQueue, QueueBuilder};
///
/// let mut q = QueueBuilder::with_comparator(Comparator::<u32>::natural().reversed())
///     .capacity(32)
///     .contents(vec![4, 10, 7])
///     .build_heap()
///     .unwrap();
/// assert_eq!(q.dequeue(), Ok(10));
/// ```
#[derive(Clone, Debug)]
pub struct QueueBuilder<T> {
    capacity: usize,
    comparator: Comparator<T>,
    contents: Vec<T>,
}

impl<T> QueueBuilder<T> {
    /// Starts a builder that orders elements naturally.
    pub fn new() -> Self
    where
        T: NaturalOrder,
    {
        Self::with_comparator(Comparator::natural())
    }

    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            comparator,
            contents: Vec::new(),
        }
    }

    /// Minimum number of slots to allocate up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Elements to seed the queue with.
    pub fn contents(mut self, contents: Vec<T>) -> Self {
        self.contents = contents;
        self
    }

    fn into_storage(self) -> Result<(Storage<T>, Comparator<T>), Error> {
        let mut storage = Storage::with_capacity(self.capacity)?;
        storage.ensure_capacity(self.contents.len());
        for value in self.contents {
            storage.push(value);
        }
        debug!(
            "queue builder: {} elements, capacity {}, {:?}",
            storage.len(),
            storage.capacity(),
            self.comparator
        );
        Ok((storage, self.comparator))
    }

    pub fn build_heap(self) -> Result<HeapPriorityQueue<T>, Error> {
        let (storage, comparator) = self.into_storage()?;
        Ok(HeapPriorityQueue::from_storage(storage, comparator))
    }

    pub fn build_array(self) -> Result<ArrayPriorityQueue<T>, Error> {
        let (storage, comparator) = self.into_storage()?;
        Ok(ArrayPriorityQueue::from_storage(storage, comparator))
    }
}

impl<T: NaturalOrder> Default for QueueBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Priority queues over a dense backing array.
//!
//! * [`HeapPriorityQueue`] keeps a binary heap: O(log n) `enqueue` and `dequeue`, and
//!   `first()` is always the most extreme element.
//! * [`ArrayPriorityQueue`] keeps the array unordered: O(1) `enqueue`, and a scan on
//!   `dequeue` that is skipped when a cached extreme index is still valid.
//! * [`ArrayFifoQueue`] is a ring buffer that leaves elements in insertion order.
//!
//! All of them implement [`PriorityQueue`]; the array-shaped ones also implement
//! [`PriorityDequeue`]. Order comes from a [`Comparator`], which defaults to the
//! element type's [`NaturalOrder`].
//!
//! Iterating a queue, through `drain()` or `into_iter()`, dequeues as it goes.
//!
//! None of the queues are synchronized. Queues of `Send`/`Sync` elements are themselves
//! `Send` and `Sync`, so they can be shared behind an external lock.

pub mod array_queue;
pub mod builder;
pub mod comparator;
pub mod error;
pub mod fifo_queue;
pub mod heap_queue;
pub mod queue;
pub mod storage;

#[cfg(test)]
mod testing;

pub use crate::array_queue::ArrayPriorityQueue;
pub use crate::builder::QueueBuilder;
pub use crate::comparator::{Comparator, NaturalOrder};
pub use crate::error::Error;
pub use crate::fifo_queue::ArrayFifoQueue;
pub use crate::heap_queue::HeapPriorityQueue;
pub use crate::queue::{Drain, IntoIter, PriorityDequeue, PriorityQueue};
pub use crate::storage::{ArraySource, Storage};

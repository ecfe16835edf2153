use thiserror::Error;

/// Errors reported by the queues in this crate.
///
/// Every check happens before any mutation, so a call that returns one of
/// these leaves the queue exactly as it was.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The queue holds no elements.
    #[error("the queue is empty")]
    EmptyQueue,

    /// An index was outside `[0, len)`.
    #[error("index {index} is out of range for a queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A requested initial capacity exceeds `MAX_ARRAY_SIZE`.
    #[error("capacity {requested} exceeds the maximum array size {max}")]
    InvalidCapacity { requested: usize, max: usize },
}

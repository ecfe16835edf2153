use crate::queue::PriorityQueue;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Dequeues until the queue is empty, collecting the results.
pub fn drain_all<T, Q: PriorityQueue<T>>(mut queue: Q) -> Vec<T> {
    let mut out = Vec::with_capacity(queue.len());
    while let Ok(value) = queue.dequeue() {
        out.push(value);
    }
    assert!(queue.is_empty());
    out
}

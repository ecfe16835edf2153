//! Property-based tests for the priority queue engines.
//!
//! Each test drives a queue with a random operation sequence and checks it against a
//! plain sorted vector used as the model multiset.

use proptest::prelude::*;
use prioq::{
    ArrayFifoQueue, ArrayPriorityQueue, Comparator, Error, HeapPriorityQueue, PriorityDequeue,
    PriorityQueue,
};

#[derive(Debug, Clone)]
enum QueueOp {
    Enqueue(i16),
    Dequeue,
    RemoveFirst(i16),
    RemoveLast(i16),
    Clear,
}

// A narrow value range so that removals usually find something.
fn value_strategy() -> impl Strategy<Value = i16> {
    -20i16..20
}

fn queue_ops_strategy() -> impl Strategy<Value = Vec<QueueOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => value_strategy().prop_map(QueueOp::Enqueue),
            3 => Just(QueueOp::Dequeue),
            2 => value_strategy().prop_map(QueueOp::RemoveFirst),
            2 => value_strategy().prop_map(QueueOp::RemoveLast),
            1 => Just(QueueOp::Clear),
        ],
        0..300,
    )
}

/// Applies `op` to `queue` and to the sorted `model`, checking that they agree.
fn apply<Q: PriorityQueue<i16>>(queue: &mut Q, model: &mut Vec<i16>, op: &QueueOp) {
    match *op {
        QueueOp::Enqueue(v) => {
            queue.enqueue(v);
            let pos = model.binary_search(&v).unwrap_or_else(|p| p);
            model.insert(pos, v);
        }
        QueueOp::Dequeue => {
            if model.is_empty() {
                assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
            } else {
                assert_eq!(queue.dequeue(), Ok(model.remove(0)));
            }
        }
        QueueOp::RemoveFirst(v) | QueueOp::RemoveLast(v) => {
            let removed = match *op {
                QueueOp::RemoveFirst(_) => queue.remove_first(&v),
                _ => queue.remove_last(&v),
            };
            match model.binary_search(&v) {
                Ok(pos) => {
                    assert!(removed);
                    model.remove(pos);
                }
                Err(_) => assert!(!removed),
            }
        }
        QueueOp::Clear => {
            queue.clear();
            model.clear();
        }
    }
    assert_eq!(queue.len(), model.len());
    assert_eq!(queue.is_empty(), model.is_empty());
    match model.first() {
        Some(min) => assert_eq!(queue.first(), Ok(min)),
        None => assert_eq!(queue.first(), Err(Error::EmptyQueue)),
    }
}

fn sorted_contents<Q: PriorityQueue<i16>>(queue: &Q) -> Vec<i16> {
    let mut contents = queue.to_array();
    contents.sort();
    contents
}

proptest! {
    #[test]
    fn prop_heap_invariant_holds(ops in queue_ops_strategy()) {
        let mut heap = HeapPriorityQueue::new();
        let mut model = Vec::new();
        for op in ops.iter() {
            apply(&mut heap, &mut model, op);
            prop_assert!(heap.is_heap(), "after {:?}: {:?}", op, heap);
        }
        prop_assert_eq!(sorted_contents(&heap), model);
    }

    #[test]
    fn prop_array_queue_matches_model(ops in queue_ops_strategy()) {
        let mut queue = ArrayPriorityQueue::new();
        let mut model = Vec::new();
        for op in ops.iter() {
            apply(&mut queue, &mut model, op);
        }
        prop_assert_eq!(sorted_contents(&queue), model.clone());
        let drained: Vec<i16> = queue.drain().collect();
        prop_assert_eq!(drained, model);
    }

    #[test]
    fn prop_engines_drain_same_multiset(
        values in prop::collection::vec(any::<i32>(), 0..500)
    ) {
        let heap: HeapPriorityQueue<i32> = values.iter().cloned().collect();
        let mut array = ArrayPriorityQueue::new();
        array.enqueue_all(values.iter().cloned());

        let from_heap: Vec<i32> = heap.into_iter().collect();
        let from_array: Vec<i32> = array.into_iter().collect();
        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(&from_heap, &sorted);
        prop_assert_eq!(&from_array, &sorted);
    }

    #[test]
    fn prop_heapify_matches_sort_by(
        values in prop::collection::vec((0u8..16, any::<u32>()), 0..400)
    ) {
        // Order by the first field only; ties may come out in any order.
        let by_key = Comparator::from_fn(|a: &(u8, u32), b: &(u8, u32)| b.0.cmp(&a.0));
        let heap = HeapPriorityQueue::from_vec_with_comparator(values.clone(), by_key);
        prop_assert!(heap.is_heap());

        let drained: Vec<(u8, u32)> = heap.into_iter().collect();
        let keys: Vec<u8> = drained.iter().map(|e| e.0).collect();
        let mut expected_keys: Vec<u8> = values.iter().map(|e| e.0).collect();
        expected_keys.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(keys, expected_keys);

        let mut drained_sorted = drained;
        drained_sorted.sort();
        let mut values_sorted = values;
        values_sorted.sort();
        prop_assert_eq!(drained_sorted, values_sorted);
    }

    #[test]
    fn prop_copy_is_independent(
        values in prop::collection::vec(value_strategy(), 1..100),
        extra in value_strategy()
    ) {
        let original = HeapPriorityQueue::from_vec(values.clone());
        let before = original.to_array();
        let mut copy = original.clone();
        copy.enqueue(extra);
        copy.dequeue().unwrap();
        copy.remove_last(&values[0]);
        prop_assert_eq!(original.to_array(), before);

        let mut original = ArrayPriorityQueue::from_vec(values.clone());
        let copy = original.clone();
        original.dequeue().unwrap();
        prop_assert_eq!(copy.to_array(), values);
    }

    #[test]
    fn prop_fifo_preserves_order(
        values in prop::collection::vec(any::<u64>(), 0..200),
        front in any::<u64>()
    ) {
        let mut queue: ArrayFifoQueue<u64> = values.iter().cloned().collect();
        queue.enqueue_first(front);
        prop_assert_eq!(queue.first(), Ok(&front));
        let mut expected = vec![front];
        expected.extend(values.iter().cloned());
        prop_assert_eq!(queue.last(), Ok(expected.last().unwrap()));
        prop_assert_eq!(queue.drain().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn worked_scenarios() {
    let mut heap = HeapPriorityQueue::new();
    for &v in [5, 3, 8, 1, 9, 2].iter() {
        heap.enqueue(v);
    }
    let mut copy = heap.clone();
    assert!(copy.remove_first(&8));
    assert_eq!(copy.len(), 5);
    assert!(copy.is_heap());
    let before = copy.to_array();
    assert!(!copy.remove_first(&42));
    assert_eq!(copy.to_array(), before);
    assert_eq!(heap.drain().collect::<Vec<i32>>(), vec![1, 2, 3, 5, 8, 9]);

    let mut array = ArrayPriorityQueue::new();
    array.enqueue_all(vec![5, 3, 8, 1, 9, 2]);
    assert_eq!(array.first(), Ok(&1));
    assert_eq!(array.dequeue(), Ok(1));
    assert_eq!(array.first(), Ok(&2));
}

use CircularQueueMini::core::error::QueueError;
use CircularQueueMini::core::generalized::GeneralizedQueue;
use CircularQueueMini::core::ordered::OrderedQueue;
use CircularQueueMini::core::queue::{CircularDoubleLinkedQueue, Iter};

#[test]
fn test_initial_state_is_empty() {
    let q: CircularDoubleLinkedQueue<char> = CircularDoubleLinkedQueue::new();

    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert_eq!(q.to_string(), "[]");
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
    q.assert_ring_closed();
}

#[test]
fn test_single_value_round_trip_resets_queue() {
    let mut q = CircularDoubleLinkedQueue::new();

    q.enqueue('a');
    assert!(!q.is_empty());
    assert_eq!(q.len(), 1);
    assert_eq!(q.to_string(), "[a]");
    q.assert_ring_closed();

    assert_eq!(q.dequeue(), Ok('a'));
    assert!(q.is_empty());
    assert_eq!(q.to_string(), "[]");
    q.assert_ring_closed();
}

#[test]
fn test_dequeue_empty_fails() {
    let mut q: CircularDoubleLinkedQueue<u8> = CircularDoubleLinkedQueue::new();
    assert_eq!(q.dequeue(), Err(QueueError::EmptyContainer));

    q.enqueue(1);
    q.dequeue().unwrap();
    assert_eq!(q.dequeue(), Err(QueueError::EmptyContainer));
    assert_eq!(q.len(), 0);
}

#[test]
fn test_hello_dequeues_in_fifo_order() {
    let mut q = CircularDoubleLinkedQueue::new();
    for c in "hello".chars() {
        q.enqueue(c);
        q.assert_ring_closed();
    }
    assert_eq!(q.to_string(), "[h, e, l, l, o]");

    let mut out = Vec::new();
    for _ in 0..4 {
        out.push(q.dequeue().unwrap());
        q.assert_ring_closed();
    }

    assert_eq!(out, vec!['h', 'e', 'l', 'l']);
    assert_eq!(q.len(), 1);
    assert_eq!(q.front(), Some(&'o'));
    assert_eq!(q.back(), Some(&'o'));
}

#[test]
fn test_iteration_is_restartable_and_read_only() {
    let q: CircularDoubleLinkedQueue<i32> = (1..=4).collect();

    let first: Vec<i32> = q.iter().copied().collect();
    let second: Vec<i32> = (&q).into_iter().copied().collect();
    let reversed: Vec<i32> = q.iter().rev().copied().collect();

    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(second, first);
    assert_eq!(reversed, vec![4, 3, 2, 1]);
    assert_eq!(q.iter().len(), 4);
    assert_eq!(q.len(), 4);
}

#[test]
fn test_owned_iteration_drains_in_order() {
    let mut q = CircularDoubleLinkedQueue::with_capacity(3);
    q.extend(["x".to_string(), "y".to_string(), "z".to_string()]);

    let drained: Vec<String> = q.into_iter().collect();
    assert_eq!(drained, vec!["x", "y", "z"]);
}

#[test]
fn test_interleaved_operations_keep_ring_closed() {
    let mut q = CircularDoubleLinkedQueue::new();
    q.enqueue(1);
    q.enqueue(2);
    assert_eq!(q.dequeue(), Ok(1));
    q.enqueue(3);
    q.enqueue(4);
    assert_eq!(q.dequeue(), Ok(2));
    q.enqueue(5);
    q.assert_ring_closed();

    assert_eq!(q.to_string(), "[3, 4, 5]");
    assert_eq!(format!("{q:?}"), "[3, 4, 5]");
}

#[test]
fn test_clear_and_reuse() {
    let mut q: CircularDoubleLinkedQueue<u32> = (0..10).collect();
    q.clear();
    assert!(q.is_empty());
    q.assert_ring_closed();

    q.enqueue(42);
    assert_eq!(q.front(), Some(&42));
    q.assert_ring_closed();
}

#[test]
fn test_clone_is_independent() {
    let mut a: CircularDoubleLinkedQueue<u32> = (1..=3).collect();
    let b = a.clone();

    a.dequeue().unwrap();
    assert_ne!(a, b);
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    b.assert_ring_closed();
}

#[test]
fn test_end_insertions_and_slot_reuse_keep_ring_closed() {
    // Only the queue types can touch the ring, and each one moves the ends itself.
    let mut g: GeneralizedQueue<u32> = (1..=3).collect();
    assert_eq!(g.remove_at(2), Ok(2));
    g.enqueue(9);
    g.assert_ring_closed();
    assert_eq!(g.remove_at(3), Ok(9));
    g.enqueue(4);
    g.assert_ring_closed();
    assert_eq!(g.to_string(), "[1, 3, 4]");
    assert_eq!(g.back(), Some(&4));
    assert_eq!(g.get(3), Ok(&4));

    let mut o: OrderedQueue<u32> = [5, 6].into_iter().collect();
    o.dequeue().unwrap();
    o.enqueue(1);
    o.assert_ring_closed();
    o.enqueue(10);
    o.assert_ring_closed();
    assert_eq!(o.front(), Some(&1));
    assert_eq!(o.back(), Some(&10));

    let q: CircularDoubleLinkedQueue<u32> = o.into_iter().collect();
    let iter: Iter<'_, u32> = q.iter();
    assert_eq!(iter.rev().copied().collect::<Vec<_>>(), vec![10, 6, 1]);
    q.assert_ring_closed();
}

use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;

use CircularQueueMini::core::audit::{AuditedQueue, Op, Outcome, SharedQueue};
use CircularQueueMini::core::log::{LogEntry, append_logs};

#[test]
fn test_every_mutation_is_logged() {
    let mut q = AuditedQueue::new();
    q.enqueue('a');
    q.enqueue('b');
    q.enqueue('c');
    assert_eq!(q.remove_at(2), Ok('b'));
    assert_eq!(q.dequeue(), Ok('a'));

    let ops: Vec<Op> = q.logs().iter().map(|e| e.op).collect();
    assert_eq!(
        ops,
        vec![Op::Enqueue, Op::Enqueue, Op::Enqueue, Op::RemoveAt, Op::Dequeue]
    );

    let removal = &q.logs()[3];
    assert_eq!(removal.index, Some(2));
    assert_eq!(removal.item, Some('b'));
    assert_eq!(removal.outcome, Outcome::Applied);
    assert_eq!(removal.len_after, 2);

    // Ids are unique and increasing within one logger
    let ids: Vec<u64> = q.logs().iter().map(|e| e.log_id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_rejected_calls_are_logged_and_queue_unchanged() {
    let mut q = AuditedQueue::new();
    q.enqueue(10u32);

    assert!(q.remove_at(5).is_err());
    assert_eq!(q.dequeue(), Ok(10));
    assert!(q.dequeue().is_err());

    let logs = q.logs();
    assert_eq!(logs.len(), 4);
    assert_eq!(
        logs[1].outcome,
        Outcome::Rejected {
            reason: "index 5 out of range for queue of length 1".to_string()
        }
    );
    assert_eq!(logs[1].len_after, 1);
    assert_eq!(
        logs[3].outcome,
        Outcome::Rejected {
            reason: "queue is empty".to_string()
        }
    );
    assert_eq!(logs[3].item, None);
}

#[test]
fn test_logs_append_as_ndjson() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ops.ndjson");

    let mut q = AuditedQueue::new();
    q.enqueue("x".to_string());
    q.dequeue().unwrap();

    append_logs(q.logs(), &path).unwrap();
    append_logs(q.logs(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);

    let first: LogEntry<String> = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.op, Op::Enqueue);
    assert_eq!(first.item.as_deref(), Some("x"));
    assert_eq!(first.len_after, 1);

    let second: LogEntry<String> = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.op, Op::Dequeue);
    assert_eq!(second.len_after, 0);
}

#[test]
fn test_shared_queue_serializes_threads() {
    let shared: SharedQueue<u32> = Arc::new(Mutex::new(AuditedQueue::new()));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    shared.lock().unwrap().enqueue(worker * 100 + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let q = shared.lock().unwrap();
    assert_eq!(q.len(), 100);
    assert_eq!(q.logs().len(), 100);
    q.queue().assert_ring_closed();
}

#[test]
fn test_into_parts() {
    let mut q = AuditedQueue::with_capacity(2);
    q.enqueue(1);
    q.enqueue(2);

    let (queue, logger) = q.into_parts();
    assert_eq!(queue.to_string(), "[1, 2]");
    assert_eq!(logger.len(), 2);

    let first_id = logger.entries()[0].log_id;
    assert_eq!(logger.entries_since(first_id).count(), 1);
}

use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Mutating queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Enqueue,
    Dequeue,
    RemoveAt,
}

/// What happened to an operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Rejected { reason: String },
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub log_id: u64,
    pub op: Op,
    pub index: Option<usize>, // 1-based position for RemoveAt
    pub item: Option<T>,      // The item enqueued or removed
    pub outcome: Outcome,
    pub len_after: usize,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ log_id: {}, op: {:?}, index: {:?}, item: {:?}, outcome: {:?}, len_after: {} }}",
            self.log_id, self.op, self.index, self.item, self.outcome, self.len_after,
        )
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
}

impl<T> Logger<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Log an operation
    pub fn log(
        &mut self,
        op: Op,
        index: Option<usize>,
        item: Option<T>,
        outcome: Outcome,
        len_after: usize,
    ) -> u64 {
        // --- Negative-space assertion: only RemoveAt carries a position ---
        assert_eq!(
            index.is_some(),
            op == Op::RemoveAt,
            "Only RemoveAt entries carry an index"
        );

        // --- Negative-space assertion: outcome must match operation ---
        match (&outcome, op) {
            (Outcome::Rejected { .. }, Op::Enqueue) => {
                panic!("Enqueue cannot be rejected")
            }
            (Outcome::Applied, _) => {
                assert!(item.is_some(), "Applied {op:?} must carry its item");
            }
            (Outcome::Rejected { .. }, _) => {
                assert!(item.is_none(), "Rejected {op:?} cannot carry an item");
            }
        }

        let log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        let before = self.entries.len();
        self.entries.push(LogEntry {
            log_id,
            op,
            index,
            item,
            outcome,
            len_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
        log_id
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    /// Entries logged after `log_id`, oldest first
    pub fn entries_since(&self, log_id: u64) -> impl Iterator<Item = &LogEntry<T>> + '_ {
        self.entries.iter().filter(move |entry| entry.log_id > log_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends entries to `path` as NDJSON, one JSON object per line
pub fn append_logs<T: Serialize>(
    log: &[LogEntry<T>],
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        serde_json::to_writer(&mut file, entry)?;
        writeln!(file)?;
    }
    Ok(())
}

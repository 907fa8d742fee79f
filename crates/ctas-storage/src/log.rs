use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Records read back from a log, plus how many stored entries could not be
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSnapshot<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for LogSnapshot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// An append-only sequence of records. Records are never updated or removed.
pub trait RecordLog<T>: Send + Sync {
    /// Append one record at the end of the log.
    fn append<'a>(&'a self, record: &'a T) -> BoxFuture<'a, Result<(), StorageError>>;

    /// Read every complete record, in append order.
    fn read_all(&self) -> BoxFuture<'_, Result<LogSnapshot<T>, StorageError>>;
}

/// Parse JSON-lines content.
///
/// Blank lines are ignored. Lines that fail to parse are skipped and
/// counted. A final line with no terminating newline is an append still in
/// progress and is left out.
pub fn parse_lines<T: DeserializeOwned>(content: &str) -> LogSnapshot<T> {
    let complete = match content.rfind('\n') {
        Some(end) => &content[..end],
        None => "",
    };

    let mut snapshot = LogSnapshot::default();
    for (index, line) in complete.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => snapshot.records.push(record),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping malformed record");
                snapshot.skipped += 1;
            }
        }
    }
    snapshot
}

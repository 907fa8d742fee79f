use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::log::{BoxFuture, LogSnapshot, RecordLog};

/// A record log held in process memory.
#[derive(Debug)]
pub struct MemoryLog<T> {
    records: Mutex<Vec<T>>,
}

impl<T> MemoryLog<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl<T> Default for MemoryLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordLog<T> for MemoryLog<T>
where
    T: Clone + Send + Sync,
{
    fn append<'a>(&'a self, record: &'a T) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.records.lock().await.push(record.clone());
            Ok(())
        })
    }

    fn read_all(&self) -> BoxFuture<'_, Result<LogSnapshot<T>, StorageError>> {
        Box::pin(async move {
            Ok(LogSnapshot {
                records: self.records.lock().await.clone(),
                skipped: 0,
            })
        })
    }
}

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::log::{BoxFuture, LogSnapshot, RecordLog, parse_lines};

/// A record log stored as one JSON document per line.
///
/// Appends within this process are serialized, and each record is written
/// with a single write so readers never see half of a line followed by
/// another record.
pub struct JsonlLog<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonlLog<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> RecordLog<T> for JsonlLog<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn append<'a>(&'a self, record: &'a T) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let mut line = serde_json::to_string(record)?;
            line.push('\n');

            let _guard = self.write_lock.lock().await;
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }

            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await
                .map_err(|e| StorageError::io(&self.path, e))?;
            file.write_all(line.as_bytes())
                .await
                .map_err(|e| StorageError::io(&self.path, e))?;
            file.flush()
                .await
                .map_err(|e| StorageError::io(&self.path, e))?;

            tracing::debug!(path = %self.path.display(), bytes = line.len(), "appended record");
            Ok(())
        })
    }

    fn read_all(&self) -> BoxFuture<'_, Result<LogSnapshot<T>, StorageError>> {
        Box::pin(async move {
            let bytes = match tokio::fs::read(&self.path).await {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(LogSnapshot::default());
                }
                Err(e) => return Err(StorageError::io(&self.path, e)),
            };

            let snapshot = parse_lines(&String::from_utf8_lossy(&bytes));
            tracing::debug!(
                path = %self.path.display(),
                records = snapshot.records.len(),
                skipped = snapshot.skipped,
                "read record log"
            );
            Ok(snapshot)
        })
    }
}

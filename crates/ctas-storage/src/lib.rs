//! ctas-storage
//!
//! Append-only persistence for decision and feedback records.

pub mod error;
pub mod journal;
pub mod jsonl;
pub mod log;
pub mod memory;

pub use journal::{History, TriageJournal};
pub use jsonl::JsonlLog;
pub use log::{LogSnapshot, RecordLog};
pub use memory::MemoryLog;

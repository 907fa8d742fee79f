//! ctas-core
//!
//! Pure domain types for CTAS triage: patient state, vitals, decisions,
//! persisted decision/feedback records and analytics reports.
//! No I/O here. This is the shared vocabulary of the triage workspace.

pub mod error;
pub mod lenient;
pub mod level;
pub mod models;
pub mod timestamp;

pub use level::CtasLevel;

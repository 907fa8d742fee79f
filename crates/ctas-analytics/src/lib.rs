//! ctas-analytics
//!
//! Read-only aggregation over decision and feedback history: per-level
//! confidence, recent entries per level and the level distribution of a
//! reason string.

pub mod distribution;
pub mod linkage;
pub mod listing;
pub mod summary;

pub use distribution::level_distribution;
pub use linkage::{feedback_level, first_level_mention};
pub use listing::{DEFAULT_LIST_LIMIT, list_by_level};
pub use summary::{confidence_percent, summarize};

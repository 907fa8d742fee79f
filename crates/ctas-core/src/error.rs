use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid CTAS level: {0} (expected 1-5)")]
    InvalidLevel(i64),

    #[error("unrecognized {field} value: {value:?}")]
    UnknownCategory { field: &'static str, value: String },
}

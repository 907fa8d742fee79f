use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("no reference range for vital: {0}")]
    UnknownVital(String),

    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

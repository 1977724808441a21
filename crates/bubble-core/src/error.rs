use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SortError {
    #[error("elements at {index} and {} are not comparable", .index + 1)]
    Incomparable { index: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type SortResult<T> = Result<T, SortError>;

use std::io;
use thiserror::Error;

/// Failures the examples can actually hit. Outcomes that are part of a
/// pattern's story ("Access Denied", an unknown currency) stay plain values.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("variable '{0}' has no value in this context")]
    UnknownVariable(char),

    #[error("builder is missing the '{field}' coordinate")]
    IncompleteBuilder { field: &'static str },

    #[error("adding {lhs} and {rhs} overflows")]
    Overflow { lhs: i64, rhs: i64 },

    #[error("failed to parse expression at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl PatternError {
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

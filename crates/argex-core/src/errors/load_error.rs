//! Debate file loading errors.

use super::error_code::{self, ArgexErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed debate JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("cannot resolve a target for {unit}")]
    TargetUnresolved { unit: String },
}

impl ArgexErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Parse { .. } => error_code::PARSE_ERROR,
            Self::TargetUnresolved { .. } => error_code::TARGET_UNRESOLVED,
        }
    }
}

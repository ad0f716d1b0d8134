//! Branch extraction and explanation search errors.

use super::error_code::{self, ArgexErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("target {target_id} is not an argument of the debate")]
    TargetNotFound { target_id: String },

    #[error("explanation search exceeded {limit} propagation steps")]
    StepLimitExceeded { limit: usize },
}

impl ArgexErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetNotFound { .. } => error_code::TARGET_NOT_FOUND,
            Self::StepLimitExceeded { .. } => error_code::STEP_LIMIT_EXCEEDED,
        }
    }
}

//! Weight errors.

use std::fmt;

use super::error_code::{self, ArgexErrorCode};

/// Which of an argument's two weights an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    Initial,
    Final,
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Final => f.write_str("final"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("argument {node_id} has no {kind} weight")]
    MissingWeight { node_id: String, kind: WeightKind },

    #[error("{kind} weight of argument {node_id} is outside [0, 1]: {value}")]
    OutOfRange {
        node_id: String,
        kind: WeightKind,
        value: f64,
    },
}

impl ArgexErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingWeight { .. } => error_code::MISSING_WEIGHT,
            Self::OutOfRange { .. } => error_code::WEIGHT_OUT_OF_RANGE,
        }
    }
}

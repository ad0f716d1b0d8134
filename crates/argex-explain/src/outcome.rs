use serde::{Deserialize, Serialize};

use crate::explanation::Explanation;

/// Result of one search. Exhausting every branch and searching a target that
/// did not move are outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Explanation),
    NoExplanationFound { steps: usize },
    /// The target's final weight equals its initial weight.
    NotApplicable,
}

impl SearchOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NoExplanationFound { .. } => "no_explanation_found",
            Self::NotApplicable => "not_applicable",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn explanation(&self) -> Option<&Explanation> {
        match self {
            Self::Found(explanation) => Some(explanation),
            _ => None,
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            Self::Found(explanation) => explanation.steps,
            Self::NoExplanationFound { steps } => *steps,
            Self::NotApplicable => 0,
        }
    }
}

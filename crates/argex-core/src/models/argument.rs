//! A single argument of a debate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{WeightError, WeightKind};

/// Anonymized vote counts keyed by bucket `"0"`..`"4"`.
pub type VoteTally = BTreeMap<String, u64>;

/// An argument node.
///
/// `id` is the key the argument is stored under in the debate record and is
/// not repeated in the serialized body. Fields the system does not interpret
/// (text, author metadata) are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Argument {
    #[serde(skip)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<VoteTally>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Argument {
    pub fn new(id: impl Into<String>, initial_weight: f64) -> Self {
        Self {
            id: id.into(),
            initial_weight: Some(initial_weight),
            ..Self::default()
        }
    }

    pub fn with_final_weight(mut self, final_weight: f64) -> Self {
        self.final_weight = Some(final_weight);
        self
    }

    pub fn with_votes(mut self, votes: VoteTally) -> Self {
        self.votes = Some(votes);
        self
    }

    /// The initial weight, or `MissingWeight`.
    pub fn require_initial(&self) -> Result<f64, WeightError> {
        self.initial_weight.ok_or_else(|| WeightError::MissingWeight {
            node_id: self.id.clone(),
            kind: WeightKind::Initial,
        })
    }

    /// The final weight, or `MissingWeight`.
    pub fn require_final(&self) -> Result<f64, WeightError> {
        self.final_weight.ok_or_else(|| WeightError::MissingWeight {
            node_id: self.id.clone(),
            kind: WeightKind::Final,
        })
    }
}

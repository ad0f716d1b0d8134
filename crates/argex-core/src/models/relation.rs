//! Directed relation edges between arguments.

use serde::{Deserialize, Serialize};

/// Sign class of a relation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationSign {
    Attack,
    Neutral,
    Support,
}

impl RelationSign {
    pub fn of(relation: f64) -> Self {
        if relation > 0.0 {
            Self::Support
        } else if relation < 0.0 {
            Self::Attack
        } else {
            Self::Neutral
        }
    }

    /// `+1`, `0` or `-1`.
    pub fn signum(self) -> i8 {
        match self {
            Self::Support => 1,
            Self::Neutral => 0,
            Self::Attack => -1,
        }
    }
}

/// An edge `source_id -> successor_id`. The magnitude of `relation` is kept
/// as declared; only its sign matters to the semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(skip)]
    pub source_id: String,
    pub successor_id: String,
    #[serde(default)]
    pub relation: f64,
    /// Edge fields the system does not interpret, written back untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Relation {
    pub fn new(source_id: impl Into<String>, successor_id: impl Into<String>, relation: f64) -> Self {
        Self {
            source_id: source_id.into(),
            successor_id: successor_id.into(),
            relation,
            extra: serde_json::Map::new(),
        }
    }

    pub fn sign(&self) -> RelationSign {
        RelationSign::of(self.relation)
    }

    pub fn is_support(&self) -> bool {
        self.relation > 0.0
    }

    pub fn is_attack(&self) -> bool {
        self.relation < 0.0
    }

    pub fn is_neutral(&self) -> bool {
        self.relation == 0.0
    }
}

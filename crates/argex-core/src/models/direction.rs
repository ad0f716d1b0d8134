use serde::{Deserialize, Serialize};

/// Which way propagation moved the target away from its initial weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Strengthening,
    Weakening,
    Unchanged,
}

impl Direction {
    /// Exact comparison; equal weights are `Unchanged`.
    pub fn from_weights(initial: f64, final_weight: f64) -> Self {
        if final_weight > initial {
            Self::Strengthening
        } else if final_weight < initial {
            Self::Weakening
        } else {
            Self::Unchanged
        }
    }

    /// Whether `final_weight` moved away from `initial` the way `self` claims.
    pub fn holds(self, initial: f64, final_weight: f64) -> bool {
        match self {
            Self::Strengthening => final_weight > initial,
            Self::Weakening => final_weight < initial,
            Self::Unchanged => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strengthening => "strengthening",
            Self::Weakening => "weakening",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

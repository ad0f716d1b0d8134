//! Weight propagation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropagationConfig {
    /// Derive absent initial weights from vote tallies. Default: true.
    pub derive_missing_initial_weights: Option<bool>,
    /// Weight of an argument with no votes. Default: 0.5.
    pub neutral_weight: Option<f64>,
    /// Reject initial weights outside [0, 1]. Default: true.
    pub validate_weight_range: Option<bool>,
}

impl PropagationConfig {
    pub fn effective_derive_missing_initial_weights(&self) -> bool {
        self.derive_missing_initial_weights
            .unwrap_or(defaults::DEFAULT_DERIVE_MISSING_INITIAL_WEIGHTS)
    }

    pub fn effective_neutral_weight(&self) -> f64 {
        self.neutral_weight.unwrap_or(defaults::DEFAULT_NEUTRAL_WEIGHT)
    }

    pub fn effective_validate_weight_range(&self) -> bool {
        self.validate_weight_range
            .unwrap_or(defaults::DEFAULT_VALIDATE_WEIGHT_RANGE)
    }
}

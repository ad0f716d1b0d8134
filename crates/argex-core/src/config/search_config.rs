//! Branch ranking and explanation search configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{ExplanationStrategy, RankingHeuristic};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Heuristics to run. Empty means all three.
    pub heuristics: Vec<RankingHeuristic>,
    /// Strategies to run. Empty means both.
    pub strategies: Vec<ExplanationStrategy>,
    /// Propagation retests allowed per search. Default: 10 000.
    pub max_steps: Option<usize>,
    /// Re-propagate each found explanation to confirm it. Default: true.
    pub verify_explanations: Option<bool>,
}

impl SearchConfig {
    pub fn effective_heuristics(&self) -> Vec<RankingHeuristic> {
        if self.heuristics.is_empty() {
            RankingHeuristic::ALL.to_vec()
        } else {
            self.heuristics.clone()
        }
    }

    pub fn effective_strategies(&self) -> Vec<ExplanationStrategy> {
        if self.strategies.is_empty() {
            ExplanationStrategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    pub fn effective_max_steps(&self) -> usize {
        self.max_steps.unwrap_or(defaults::DEFAULT_MAX_STEPS)
    }

    pub fn effective_verify_explanations(&self) -> bool {
        self.verify_explanations
            .unwrap_or(defaults::DEFAULT_VERIFY_EXPLANATIONS)
    }
}

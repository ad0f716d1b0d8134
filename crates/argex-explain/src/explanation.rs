//! Found explanations and their stages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use argex_branches::Branch;
use argex_core::errors::ArgexResult;
use argex_core::models::{BranchCategory, Direction, ExplanationStrategy, RankingHeuristic};
use argex_gradual::{ArgumentGraph, Restriction, WeightPropagator};

/// Branches consumed from one category, in the order they were added.
/// `node_ids` concatenates their node lists and may repeat an argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationStage {
    pub category: BranchCategory,
    pub branch_ids: Vec<String>,
    pub node_ids: Vec<String>,
}

impl ExplanationStage {
    pub fn empty(category: BranchCategory) -> Self {
        Self {
            category,
            branch_ids: Vec::new(),
            node_ids: Vec::new(),
        }
    }

    /// A stage holding all of `branches` at once.
    pub fn with_branches(category: BranchCategory, branches: &[Branch]) -> Self {
        let mut stage = Self::empty(category);
        for branch in branches {
            stage.push(branch);
        }
        stage
    }

    pub fn push(&mut self, branch: &Branch) {
        self.branch_ids.push(branch.id.clone());
        self.node_ids.extend(branch.nodes.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.branch_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub target_id: String,
    pub strategy: ExplanationStrategy,
    pub direction: Direction,
    pub heuristic: RankingHeuristic,
    /// Constructive: base, added supporting branches, and (only when reached)
    /// added weakeners of the opposition. Destructive: opposing unweakened
    /// branches, their weakeners, added supporting branches.
    pub stages: Vec<ExplanationStage>,
    /// Distinct arguments of every stage in first-seen order, then the target.
    pub final_nodes: Vec<String>,
    /// Propagation retests run, the base test included.
    pub steps: usize,
}

impl Explanation {
    pub(crate) fn new(
        target_id: &str,
        strategy: ExplanationStrategy,
        direction: Direction,
        heuristic: RankingHeuristic,
        stages: Vec<ExplanationStage>,
        steps: usize,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut final_nodes: Vec<String> = stages
            .iter()
            .flat_map(|s| s.node_ids.iter())
            .filter(|id| id.as_str() != target_id && seen.insert(id.as_str()))
            .cloned()
            .collect();
        final_nodes.push(target_id.to_string());
        Self {
            target_id: target_id.to_string(),
            strategy,
            direction,
            heuristic,
            stages,
            final_nodes,
            steps,
        }
    }

    pub fn branch_ids(&self) -> Vec<Vec<String>> {
        self.stages.iter().map(|s| s.branch_ids.clone()).collect()
    }

    pub fn node_ids(&self) -> Vec<Vec<String>> {
        self.stages.iter().map(|s| s.node_ids.clone()).collect()
    }

    /// Stages holding branches the search added on top of its base.
    pub fn added_stages(&self) -> &[ExplanationStage] {
        match self.strategy {
            ExplanationStrategy::Constructive => self.stages.get(1..).unwrap_or(&[]),
            ExplanationStrategy::Destructive => match self.stages.len() {
                0 => &[],
                n => &self.stages[n - 1..],
            },
        }
    }

    /// Re-propagate `final_nodes` on `graph` and check that the target still
    /// moves in the claimed direction.
    pub fn verify(&self, graph: &ArgumentGraph) -> ArgexResult<bool> {
        let target = graph.target(&self.target_id)?;
        let restriction = Restriction::from_ids(graph, &self.final_nodes)?;
        let weights = WeightPropagator::new().propagate(graph, &restriction);
        let initial = graph.initial_weight(target);
        let value = weights.get(target).unwrap_or(initial);
        Ok(self.direction.holds(initial, value))
    }
}

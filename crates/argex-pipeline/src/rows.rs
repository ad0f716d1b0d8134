//! Interchange rows written as JSON lines.

use serde::{Deserialize, Serialize};

use argex_branches::RankedBranchSet;
use argex_core::models::{
    BranchCategory, Direction, ExplanationStrategy, RankingHeuristic,
};
use argex_explain::{SearchOutcome, SizeMetrics};

/// One non-empty branch category under one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRankingRow {
    pub debate_id: String,
    pub target_id: String,
    pub direction: Direction,
    pub heuristic: RankingHeuristic,
    pub category: BranchCategory,
    pub branch_ids_before_ranking: Vec<String>,
    pub branch_node_lists_before_ranking: Vec<Vec<String>>,
    pub branch_ids_after_ranking: Vec<String>,
    pub branch_node_lists_after_ranking: Vec<Vec<String>>,
}

impl BranchRankingRow {
    pub fn from_ranked(
        debate_id: &str,
        direction: Direction,
        ranked: &RankedBranchSet,
    ) -> Vec<Self> {
        ranked
            .categories
            .iter()
            .map(|c| Self {
                debate_id: debate_id.to_string(),
                target_id: ranked.target_id.clone(),
                direction,
                heuristic: ranked.heuristic,
                category: c.category,
                branch_ids_before_ranking: c.before.iter().map(|b| b.id.clone()).collect(),
                branch_node_lists_before_ranking: c.before.iter().map(|b| b.nodes.clone()).collect(),
                branch_ids_after_ranking: c.after.iter().map(|b| b.id.clone()).collect(),
                branch_node_lists_after_ranking: c.after.iter().map(|b| b.nodes.clone()).collect(),
            })
            .collect()
    }
}

/// One strategy's result inside an explanation row. Stage lists are empty
/// unless an explanation was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyColumns {
    pub status: String,
    pub success: bool,
    #[serde(rename = "explanation_branch_ids")]
    pub branch_ids: Vec<Vec<String>>,
    #[serde(rename = "explanation_node_ids")]
    pub node_ids: Vec<Vec<String>>,
}

impl StrategyColumns {
    /// `None` for a strategy the configuration did not run.
    pub fn from_outcome(outcome: Option<&SearchOutcome>) -> Self {
        let Some(outcome) = outcome else {
            return Self {
                status: "not_run".to_string(),
                success: false,
                branch_ids: Vec::new(),
                node_ids: Vec::new(),
            };
        };
        let (branch_ids, node_ids) = outcome
            .explanation()
            .map(|e| (e.branch_ids(), e.node_ids()))
            .unwrap_or_default();
        Self {
            status: outcome.status().to_string(),
            success: outcome.is_found(),
            branch_ids,
            node_ids,
        }
    }
}

/// Both strategies for one target under one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRow {
    pub debate_id: String,
    pub target_id: String,
    pub direction: Direction,
    pub heuristic: RankingHeuristic,
    pub constructive: StrategyColumns,
    pub destructive: StrategyColumns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    pub debate_id: String,
    pub target_id: String,
    pub direction: Direction,
    pub strategy: ExplanationStrategy,
    pub heuristic: RankingHeuristic,
    #[serde(flatten)]
    pub metrics: SizeMetrics,
}

/// A unit that could not be processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRow {
    pub unit: String,
    pub debate_id: Option<String>,
    pub target_id: Option<String>,
    pub error_code: String,
    pub message: String,
}

//! Explanation size relative to the debate and to the searched branches.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use argex_branches::BranchSet;
use argex_core::models::{BranchCategory, Direction, ExplanationStrategy, Polarity};

use crate::outcome::SearchOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMetrics {
    pub total_graph_args: usize,
    /// Size of the categories the search draws added branches from.
    pub total_branches: usize,
    /// Distinct arguments over every stage, plus the target.
    pub count_args_returned: usize,
    pub pct_args_of_graph: f64,
    pub count_branches_returned: usize,
    pub pct_branches_returned: f64,
}

impl SizeMetrics {
    /// `None` for an unchanged target. A search that found nothing returns
    /// only the target and no branches.
    pub fn measure(
        outcome: &SearchOutcome,
        strategy: ExplanationStrategy,
        direction: Direction,
        set: &BranchSet,
        total_graph_args: usize,
    ) -> Option<Self> {
        let total_branches = searched_categories(strategy, direction)?
            .iter()
            .map(|c| set.get(*c).len())
            .sum();

        let (count_args_returned, count_branches_returned) = match outcome.explanation() {
            Some(explanation) => {
                let distinct: HashSet<&str> = explanation
                    .stages
                    .iter()
                    .flat_map(|s| s.node_ids.iter().map(String::as_str))
                    .collect();
                let added = explanation
                    .added_stages()
                    .iter()
                    .map(|s| s.branch_ids.len())
                    .sum();
                (distinct.len() + 1, added)
            }
            None => (1, 0),
        };

        Some(Self {
            total_graph_args,
            total_branches,
            count_args_returned,
            pct_args_of_graph: percentage(count_args_returned, total_graph_args),
            count_branches_returned,
            pct_branches_returned: percentage(count_branches_returned, total_branches),
        })
    }
}

/// Categories whose branches a search adds on top of its base.
pub fn searched_categories(
    strategy: ExplanationStrategy,
    direction: Direction,
) -> Option<Vec<BranchCategory>> {
    let supporting = match direction {
        Direction::Strengthening => Polarity::Pro,
        Direction::Weakening => Polarity::Con,
        Direction::Unchanged => return None,
    };
    Some(match strategy {
        ExplanationStrategy::Constructive => vec![
            BranchCategory::full(supporting),
            BranchCategory::weakening(supporting.opposite()),
        ],
        ExplanationStrategy::Destructive => vec![BranchCategory::full(supporting)],
    })
}

/// `part / whole * 100` to two decimals; 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}

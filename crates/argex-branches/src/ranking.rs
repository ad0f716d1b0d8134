//! BranchRanker: heuristic orderings of a branch category.

use serde::{Deserialize, Serialize};

use argex_core::models::{BranchCategory, RankingHeuristic};
use argex_core::traits::WeightLookup;

use crate::branch::{Branch, BranchSet};

/// One category before and after ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: BranchCategory,
    pub before: Vec<Branch>,
    pub after: Vec<Branch>,
}

/// Every non-empty category of a `BranchSet` ranked under one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBranchSet {
    pub target_id: String,
    pub heuristic: RankingHeuristic,
    pub categories: Vec<RankedCategory>,
}

impl RankedBranchSet {
    /// Ranked branches of `category`; empty when the category was empty.
    pub fn ranked(&self, category: BranchCategory) -> &[Branch] {
        self.entry(category).map_or(&[], |c| c.after.as_slice())
    }

    pub fn original(&self, category: BranchCategory) -> &[Branch] {
        self.entry(category).map_or(&[], |c| c.before.as_slice())
    }

    fn entry(&self, category: BranchCategory) -> Option<&RankedCategory> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Stable sorts keyed on root final weight or branch length. Ties keep
/// discovery order under every heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchRanker;

impl BranchRanker {
    /// Create a ranker. It holds no state.
    pub fn new() -> Self {
        Self
    }

    pub fn rank<W>(&self, branches: &[Branch], weights: &W, heuristic: RankingHeuristic) -> Vec<Branch>
    where
        W: WeightLookup + ?Sized,
    {
        let mut ranked = branches.to_vec();
        match heuristic {
            RankingHeuristic::WeakToStrong => {
                ranked.sort_by(|a, b| root_weight(a, weights).total_cmp(&root_weight(b, weights)))
            }
            RankingHeuristic::StrongToWeak => {
                ranked.sort_by(|a, b| root_weight(b, weights).total_cmp(&root_weight(a, weights)))
            }
            RankingHeuristic::SmallToLarge => ranked.sort_by_key(Branch::len),
        }
        ranked
    }

    pub fn rank_set<W>(&self, set: &BranchSet, weights: &W, heuristic: RankingHeuristic) -> RankedBranchSet
    where
        W: WeightLookup + ?Sized,
    {
        let categories = set
            .iter()
            .filter(|(_, branches)| !branches.is_empty())
            .map(|(category, branches)| RankedCategory {
                category,
                before: branches.to_vec(),
                after: self.rank(branches, weights, heuristic),
            })
            .collect();
        RankedBranchSet {
            target_id: set.target_id.clone(),
            heuristic,
            categories,
        }
    }
}

/// Root final weight; a missing weight ranks as 0.
fn root_weight<W>(branch: &Branch, weights: &W) -> f64
where
    W: WeightLookup + ?Sized,
{
    branch
        .root()
        .and_then(|root| weights.final_weight(root))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn branch(index: usize, nodes: &[&str]) -> Branch {
        Branch::new(
            BranchCategory::Pro,
            index,
            nodes.iter().map(|n| n.to_string()).collect(),
        )
    }

    fn ids(branches: &[Branch]) -> Vec<&str> {
        branches.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn ties_keep_discovery_order() {
        let weights: HashMap<String, f64> =
            [("a", 0.5), ("b", 0.5), ("c", 0.2)].map(|(k, v)| (k.to_string(), v)).into();
        let branches = vec![branch(1, &["a"]), branch(2, &["b"]), branch(3, &["c"])];
        let ranker = BranchRanker::new();

        assert_eq!(
            ids(&ranker.rank(&branches, &weights, RankingHeuristic::WeakToStrong)),
            ["Pb3", "Pb1", "Pb2"]
        );
        assert_eq!(
            ids(&ranker.rank(&branches, &weights, RankingHeuristic::StrongToWeak)),
            ["Pb1", "Pb2", "Pb3"]
        );
        assert_eq!(
            ids(&ranker.rank(&branches, &weights, RankingHeuristic::SmallToLarge)),
            ["Pb1", "Pb2", "Pb3"]
        );
    }

    #[test]
    fn missing_root_weight_ranks_as_zero() {
        let weights: HashMap<String, f64> = [("a".to_string(), 0.1)].into();
        let branches = vec![branch(1, &["a"]), branch(2, &["ghost"])];
        let ranked = BranchRanker::new().rank(&branches, &weights, RankingHeuristic::WeakToStrong);
        assert_eq!(ids(&ranked), ["Pb2", "Pb1"]);
    }
}

//! BranchExtractor: six branch categories relative to a target.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use tracing::debug;

use argex_core::errors::SearchError;
use argex_core::models::{BranchCategory, Polarity};
use argex_gradual::{ArgumentGraph, FinalWeights};

use crate::branch::{Branch, BranchSet};
use crate::polarity::PolarityMap;

/// Pure extraction over a validated graph and its full-graph final weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchExtractor;

impl BranchExtractor {
    /// Create an extractor. It holds no state.
    pub fn new() -> Self {
        Self
    }

    pub fn extract(
        &self,
        graph: &ArgumentGraph,
        weights: &FinalWeights,
        target_id: &str,
    ) -> Result<BranchSet, SearchError> {
        let target = graph.target(target_id)?;
        let polarity = PolarityMap::new(graph, weights, target);

        let mut supporters = Vec::new();
        let mut attackers = Vec::new();
        for &(child, relation) in graph.children(target) {
            if !polarity.is_significant(child) {
                continue;
            }
            if relation > 0.0 {
                supporters.push(child);
            } else if relation < 0.0 {
                attackers.push(child);
            }
        }

        let mut set = BranchSet::empty(target_id);
        set.pro = collect(graph, BranchCategory::Pro, supporters.iter().map(|&r| full_branch(graph, r)));
        set.con = collect(graph, BranchCategory::Con, attackers.iter().map(|&r| full_branch(graph, r)));

        for (roots, side) in [(&supporters, Polarity::Pro), (&attackers, Polarity::Con)] {
            let unweakened: Vec<Vec<NodeIndex>> = roots
                .iter()
                .filter_map(|&root| unweakened_branch(graph, &polarity, root, side))
                .collect();

            let members: HashSet<NodeIndex> = unweakened.iter().flatten().copied().collect();
            let weakening = graph
                .relations()
                .filter(|&(source, successor, relation)| {
                    relation < 0.0 && members.contains(&successor) && polarity.is_significant(source)
                })
                .map(|(source, _, _)| full_branch(graph, source));

            *set.get_mut(BranchCategory::weakening(side)) =
                collect(graph, BranchCategory::weakening(side), weakening);
            *set.get_mut(BranchCategory::unweakened(side)) =
                collect(graph, BranchCategory::unweakened(side), unweakened);
        }

        debug!(
            target_id,
            pro = set.pro.len(),
            con = set.con.len(),
            unweakened_pro = set.unweakened_pro.len(),
            unweakened_con = set.unweakened_con.len(),
            pro_weakening = set.pro_weakening.len(),
            con_weakening = set.con_weakening.len(),
            "branches extracted"
        );
        Ok(set)
    }
}

fn collect<I>(graph: &ArgumentGraph, category: BranchCategory, branches: I) -> Vec<Branch>
where
    I: IntoIterator<Item = Vec<NodeIndex>>,
{
    branches
        .into_iter()
        .enumerate()
        .map(|(i, nodes)| {
            let ids = nodes.into_iter().map(|n| graph.node_id(n).to_string()).collect();
            Branch::new(category, i + 1, ids)
        })
        .collect()
}

/// Depth-first backward traversal from `root` over every non-neutral edge.
/// Children are pushed in declaration order and popped last-in first-out.
pub fn full_branch(graph: &ArgumentGraph, root: NodeIndex) -> Vec<NodeIndex> {
    let mut branch = Vec::new();
    let mut stack = vec![root];
    let mut visited = HashSet::new();
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        branch.push(current);
        stack.extend(
            graph
                .children(current)
                .iter()
                .filter(|(_, relation)| *relation != 0.0)
                .map(|(child, _)| *child),
        );
    }
    branch
}

/// The part of `root`'s sub-tree reachable through arguments of polarity
/// `side` only. Arguments of another polarity are neither collected nor
/// descended into. `None` when the root itself does not match.
pub fn unweakened_branch(
    graph: &ArgumentGraph,
    polarity: &PolarityMap,
    root: NodeIndex,
    side: Polarity,
) -> Option<Vec<NodeIndex>> {
    if !polarity.matches(root, side) {
        return None;
    }
    let mut branch = Vec::new();
    let mut stack = vec![root];
    let mut visited = HashSet::new();
    while let Some(current) = stack.pop() {
        if !visited.insert(current) || !polarity.matches(current, side) {
            continue;
        }
        branch.push(current);
        stack.extend(
            graph
                .children(current)
                .iter()
                .filter(|(_, relation)| *relation != 0.0)
                .map(|(child, _)| *child),
        );
    }
    Some(branch)
}

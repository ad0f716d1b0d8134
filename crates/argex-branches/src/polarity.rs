//! Significance and path sign of every argument relative to a target.
//!
//! An argument is significant when its full-graph final weight is non-zero.
//! Its path sign is the product of relation signs along its successor chain
//! up to the target, walking only non-neutral edges into significant
//! successors. A chain that stops short of the target has sign 0; the target
//! itself has sign +1.

use petgraph::stable_graph::NodeIndex;

use argex_core::models::{Polarity, RelationSign};
use argex_gradual::{ArgumentGraph, FinalWeights};

#[derive(Debug, Clone)]
pub struct PolarityMap {
    significant: Vec<bool>,
    signs: Vec<i8>,
}

impl PolarityMap {
    pub fn new(graph: &ArgumentGraph, weights: &FinalWeights, target: NodeIndex) -> Self {
        let mut significant = vec![false; graph.node_count()];
        for idx in graph.node_indices() {
            significant[idx.index()] = weights.get(idx).is_some_and(|w| w != 0.0);
        }

        let signs = graph
            .node_indices()
            .map(|idx| path_sign(graph, &significant, idx, target))
            .collect();

        Self { significant, signs }
    }

    pub fn is_significant(&self, idx: NodeIndex) -> bool {
        self.significant.get(idx.index()).copied().unwrap_or(false)
    }

    /// `+1`, `-1`, or `0` when no significant path reaches the target.
    pub fn sign(&self, idx: NodeIndex) -> i8 {
        self.signs.get(idx.index()).copied().unwrap_or(0)
    }

    pub fn polarity(&self, idx: NodeIndex) -> Option<Polarity> {
        match self.sign(idx) {
            1 => Some(Polarity::Pro),
            -1 => Some(Polarity::Con),
            _ => None,
        }
    }

    pub fn matches(&self, idx: NodeIndex, polarity: Polarity) -> bool {
        self.sign(idx) == polarity.sign()
    }
}

fn path_sign(graph: &ArgumentGraph, significant: &[bool], start: NodeIndex, target: NodeIndex) -> i8 {
    if start == target {
        return 1;
    }
    if !significant[start.index()] {
        return 0;
    }
    let mut sign = 1i8;
    let mut current = start;
    // Out-degree is at most one and the graph is acyclic, so the chain ends.
    while let Some((successor, relation)) = graph.successor(current) {
        let step = RelationSign::of(relation).signum();
        if step == 0 || !significant[successor.index()] {
            return 0;
        }
        sign *= step;
        if successor == target {
            return sign;
        }
        current = successor;
    }
    0
}

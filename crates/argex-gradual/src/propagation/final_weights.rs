//! Propagation output indexed by graph node.

use std::collections::HashMap;

use petgraph::stable_graph::NodeIndex;

use argex_core::models::Debate;
use argex_core::traits::WeightLookup;

use crate::graph::ArgumentGraph;

/// Final weights of the members of one restriction. Non-members are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalWeights {
    values: Vec<Option<f64>>,
}

impl FinalWeights {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    pub(crate) fn set(&mut self, idx: NodeIndex, value: f64) {
        if let Some(slot) = self.values.get_mut(idx.index()) {
            *slot = Some(value);
        }
    }

    /// Weight of `idx`, `None` when it was outside the restriction.
    pub fn get(&self, idx: NodeIndex) -> Option<f64> {
        self.values.get(idx.index()).copied().flatten()
    }

    /// Number of nodes with a computed weight.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computed weights in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|w| (NodeIndex::new(i), w)))
    }

    /// Weights keyed by argument id.
    pub fn to_map(&self, graph: &ArgumentGraph) -> HashMap<String, f64> {
        self.iter()
            .map(|(idx, w)| (graph.node_id(idx).to_string(), w))
            .collect()
    }

    /// Record resolved initial weights and these final weights on the
    /// matching arguments of `debate`.
    pub fn write_into(&self, graph: &ArgumentGraph, debate: &mut Debate) {
        for argument in debate.arguments.iter_mut() {
            if let Some(idx) = graph.get_node(&argument.id) {
                argument.initial_weight = Some(graph.initial_weight(idx));
                argument.final_weight = self.get(idx);
            }
        }
    }

    /// Id-based view for consumers that work on argument ids.
    pub fn view<'a>(&'a self, graph: &'a ArgumentGraph) -> WeightView<'a> {
        WeightView {
            graph,
            weights: self,
        }
    }
}

/// Borrowed id-keyed access to `FinalWeights`.
#[derive(Debug, Clone, Copy)]
pub struct WeightView<'a> {
    graph: &'a ArgumentGraph,
    weights: &'a FinalWeights,
}

impl WeightLookup for WeightView<'_> {
    fn final_weight(&self, id: &str) -> Option<f64> {
        self.graph.get_node(id).and_then(|idx| self.weights.get(idx))
    }
}

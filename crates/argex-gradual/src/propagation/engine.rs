//! WeightPropagator: QEM over a restriction of a validated graph.

use std::collections::HashMap;

use tracing::{debug, trace};

use argex_core::config::PropagationConfig;
use argex_core::errors::ArgexResult;
use argex_core::models::Debate;

use super::final_weights::FinalWeights;
use super::saturation::qem_update;
use crate::graph::{ArgumentGraph, Restriction};

/// Stateless propagation engine shared by extraction and every search retest.
#[derive(Debug, Clone, Default)]
pub struct WeightPropagator {
    config: PropagationConfig,
}

impl WeightPropagator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PropagationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    /// Final weights of every member of `restriction`.
    ///
    /// Supporters and attackers of a node are the members with an edge into
    /// it of positive and negative relation. Nodes are processed children
    /// first, so every contributor is final before it is read.
    pub fn propagate(&self, graph: &ArgumentGraph, restriction: &Restriction) -> FinalWeights {
        let mut weights = FinalWeights::with_len(graph.node_count());

        if restriction.internal_edge_count(graph) == 0 {
            for idx in restriction.members() {
                weights.set(idx, graph.initial_weight(idx));
            }
            trace!(nodes = restriction.len(), "restriction without edges, weights unchanged");
            return weights;
        }

        let mut members: Vec<_> = restriction.members().collect();
        members.sort_by_key(|&idx| graph.topo_rank(idx));

        for idx in members {
            let w0 = graph.initial_weight(idx);
            let mut energy = 0.0;
            let mut contributors = 0usize;
            for &(child, relation) in graph.children(idx) {
                if relation == 0.0 || !restriction.contains(child) {
                    continue;
                }
                let Some(child_weight) = weights.get(child) else {
                    continue;
                };
                contributors += 1;
                if relation > 0.0 {
                    energy += child_weight;
                } else {
                    energy -= child_weight;
                }
            }
            let value = if contributors == 0 {
                w0
            } else {
                qem_update(w0, energy)
            };
            weights.set(idx, value);
        }

        trace!(nodes = restriction.len(), "restriction propagated");
        weights
    }

    /// Propagate over the whole graph.
    pub fn propagate_full(&self, graph: &ArgumentGraph) -> FinalWeights {
        self.propagate(graph, &Restriction::full(graph))
    }

    /// Validate `debate`, propagate over all of it, and key the result by id.
    pub fn propagate_debate(&self, debate: &Debate) -> ArgexResult<HashMap<String, f64>> {
        let graph = ArgumentGraph::from_debate_with(debate, &self.config)?;
        Ok(self.propagate_full(&graph).to_map(&graph))
    }

    /// Write resolved initial weights and propagated final weights back onto
    /// the record.
    pub fn enrich_debate(&self, debate: &mut Debate) -> ArgexResult<()> {
        let graph = ArgumentGraph::from_debate_with(debate, &self.config)?;
        let weights = self.propagate_full(&graph);
        weights.write_into(&graph, debate);
        debug!(
            arguments = graph.node_count(),
            relations = graph.edge_count(),
            "debate enriched with final weights"
        );
        Ok(())
    }
}

//! petgraph::StableGraph wrapper holding a validated argument in-tree.
//!
//! Edges run from an argument to the argument it supports or attacks
//! (child -> parent). Nodes are never removed, so `NodeIndex::index()` is a
//! dense position usable for side tables.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use argex_core::config::PropagationConfig;
use argex_core::errors::{ArgexResult, SearchError, WeightError, WeightKind};
use argex_core::models::{Argument, Debate, RelationSign};
use argex_core::votes::aggregate_votes;

use super::validation;

/// A node in the argument graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentNode {
    pub id: String,
    /// Resolved initial weight (recorded or derived from votes).
    pub initial_weight: f64,
}

/// Weight on a relation edge. Only the sign is semantically relevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub relation: f64,
}

impl RelationEdge {
    pub fn sign(&self) -> RelationSign {
        RelationSign::of(self.relation)
    }
}

pub type ArgumentStableGraph = StableGraph<ArgumentNode, RelationEdge, Directed>;

/// Indexed, validated argument graph.
#[derive(Debug, Clone)]
pub struct ArgumentGraph {
    /// The petgraph stable graph.
    pub graph: ArgumentStableGraph,
    /// Map from argument id to NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
    topo_order: Vec<NodeIndex>,
    topo_rank: Vec<usize>,
    children: Vec<Vec<(NodeIndex, f64)>>,
}

impl ArgumentGraph {
    /// Build with default propagation settings.
    pub fn from_debate(debate: &Debate) -> ArgexResult<Self> {
        Self::from_debate_with(debate, &PropagationConfig::default())
    }

    /// Build and validate the graph once. Structure errors (duplicates,
    /// dangling edges, self loops, second successors, cycles) and weight
    /// errors are reported here and never during propagation.
    pub fn from_debate_with(debate: &Debate, config: &PropagationConfig) -> ArgexResult<Self> {
        let mut graph =
            ArgumentStableGraph::with_capacity(debate.arguments.len(), debate.relations.len());
        let mut node_index = HashMap::with_capacity(debate.arguments.len());

        for argument in &debate.arguments {
            if node_index.contains_key(&argument.id) {
                return Err(validation::duplicate(&argument.id).into());
            }
            let initial_weight = resolve_initial_weight(argument, config)?;
            let idx = graph.add_node(ArgumentNode {
                id: argument.id.clone(),
                initial_weight,
            });
            node_index.insert(argument.id.clone(), idx);
        }

        for (source, successor, relation) in validation::resolve_relations(&debate.relations, &node_index)? {
            graph.add_edge(source, successor, RelationEdge { relation });
        }

        let topo_order = validation::topological_order(&graph)?;
        let mut topo_rank = vec![0; graph.node_count()];
        for (rank, idx) in topo_order.iter().enumerate() {
            topo_rank[idx.index()] = rank;
        }

        // Incoming edges in declaration order (edge indices grow with insertion).
        let mut children = vec![Vec::new(); graph.node_count()];
        for idx in graph.node_indices() {
            let mut incoming: Vec<_> = graph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .map(|e| (e.id(), e.source(), e.weight().relation))
                .collect();
            incoming.sort_by_key(|(edge, _, _)| edge.index());
            children[idx.index()] = incoming
                .into_iter()
                .map(|(_, source, relation)| (source, relation))
                .collect();
        }

        Ok(Self {
            graph,
            node_index,
            topo_order,
            topo_rank,
            children,
        })
    }

    /// Look up a node index by argument id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Look up the node a search or extraction is centred on.
    pub fn target(&self, id: &str) -> Result<NodeIndex, SearchError> {
        self.get_node(id).ok_or_else(|| SearchError::TargetNotFound {
            target_id: id.to_string(),
        })
    }

    pub fn node_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    pub fn initial_weight(&self, idx: NodeIndex) -> f64 {
        self.graph[idx].initial_weight
    }

    /// Node indices in declaration order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Children before parents.
    pub fn topological_order(&self) -> &[NodeIndex] {
        &self.topo_order
    }

    pub fn topo_rank(&self, idx: NodeIndex) -> usize {
        self.topo_rank[idx.index()]
    }

    /// Sources of edges into `idx` with their relation values, in edge
    /// declaration order. Neutral edges are included.
    pub fn children(&self, idx: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.children[idx.index()]
    }

    /// The single outgoing edge of `idx`, if any.
    pub fn successor(&self, idx: NodeIndex) -> Option<(NodeIndex, f64)> {
        self.graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .next()
            .map(|e| (e.target(), e.weight().relation))
    }

    /// Every edge as `(source, successor, relation)` in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, f64)> + '_ {
        self.graph.edge_indices().filter_map(|e| {
            let (source, successor) = self.graph.edge_endpoints(e)?;
            Some((source, successor, self.graph[e].relation))
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn resolve_initial_weight(argument: &Argument, config: &PropagationConfig) -> Result<f64, WeightError> {
    let weight = match argument.initial_weight {
        Some(w) => w,
        None if config.effective_derive_missing_initial_weights() => {
            let neutral = config.effective_neutral_weight();
            argument
                .votes
                .as_ref()
                .map_or(neutral, |votes| aggregate_votes(votes, neutral))
        }
        None => {
            return Err(WeightError::MissingWeight {
                node_id: argument.id.clone(),
                kind: WeightKind::Initial,
            })
        }
    };
    if config.effective_validate_weight_range() && !(0.0..=1.0).contains(&weight) {
        return Err(WeightError::OutOfRange {
            node_id: argument.id.clone(),
            kind: WeightKind::Initial,
            value: weight,
        });
    }
    Ok(weight)
}

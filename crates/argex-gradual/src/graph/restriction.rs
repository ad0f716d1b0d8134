//! Node-subset restrictions of a validated graph.
//!
//! A restriction keeps a subset of arguments; its edges are exactly the
//! graph edges with both endpoints inside. Restrictions are cheap to build and
//! are rebuilt from scratch for every retest during explanation search.

use petgraph::stable_graph::NodeIndex;

use argex_core::errors::StructureError;

use super::stable_graph::ArgumentGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    members: Vec<bool>,
    len: usize,
}

impl Restriction {
    /// Every argument of the graph.
    pub fn full(graph: &ArgumentGraph) -> Self {
        Self {
            members: vec![true; graph.node_count()],
            len: graph.node_count(),
        }
    }

    /// No arguments; members are added with `insert`.
    pub fn empty(graph: &ArgumentGraph) -> Self {
        Self {
            members: vec![false; graph.node_count()],
            len: 0,
        }
    }

    pub fn from_indices<I>(graph: &ArgumentGraph, indices: I) -> Self
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let mut restriction = Self::empty(graph);
        for idx in indices {
            restriction.insert(idx);
        }
        restriction
    }

    /// Restriction over argument ids; an id outside the graph is an error.
    pub fn from_ids<I, S>(graph: &ArgumentGraph, ids: I) -> Result<Self, StructureError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restriction = Self::empty(graph);
        for id in ids {
            let id = id.as_ref();
            let idx = graph
                .get_node(id)
                .ok_or_else(|| StructureError::UnknownArgument {
                    node_id: id.to_string(),
                })?;
            restriction.insert(idx);
        }
        Ok(restriction)
    }

    /// Add `idx`. Indices outside the graph are ignored.
    pub fn insert(&mut self, idx: NodeIndex) {
        if let Some(slot) = self.members.get_mut(idx.index()) {
            if !*slot {
                *slot = true;
                self.len += 1;
            }
        }
    }

    /// Whether `idx` is a member.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.members.get(idx.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(|(i, _)| NodeIndex::new(i))
    }

    /// Number of graph edges with both endpoints inside.
    pub fn internal_edge_count(&self, graph: &ArgumentGraph) -> usize {
        self.members()
            .filter(|&idx| {
                graph
                    .successor(idx)
                    .is_some_and(|(successor, _)| self.contains(successor))
            })
            .count()
    }
}

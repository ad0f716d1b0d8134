//! Forest-of-in-trees checks run once at graph construction.

use std::collections::HashMap;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::stable_graph::NodeIndex;

use argex_core::errors::StructureError;
use argex_core::models::Relation;

use super::stable_graph::ArgumentStableGraph;

pub(crate) fn duplicate(id: &str) -> StructureError {
    StructureError::DuplicateArgument {
        node_id: id.to_string(),
    }
}

/// Resolve declared relations to node pairs, rejecting self loops, edges to
/// or from undeclared arguments, and arguments with a second successor.
pub fn resolve_relations(
    relations: &[Relation],
    node_index: &HashMap<String, NodeIndex>,
) -> Result<Vec<(NodeIndex, NodeIndex, f64)>, StructureError> {
    let mut successors: HashMap<&str, Vec<String>> = HashMap::new();
    for relation in relations {
        successors
            .entry(relation.source_id.as_str())
            .or_default()
            .push(relation.successor_id.clone());
    }

    let mut resolved = Vec::with_capacity(relations.len());
    for relation in relations {
        if relation.source_id == relation.successor_id {
            return Err(StructureError::SelfLoop {
                node_id: relation.source_id.clone(),
            });
        }
        let (Some(&source), Some(&successor)) = (
            node_index.get(&relation.source_id),
            node_index.get(&relation.successor_id),
        ) else {
            return Err(StructureError::DanglingEdge {
                source_id: relation.source_id.clone(),
                successor_id: relation.successor_id.clone(),
            });
        };
        if let Some(all) = successors.get(relation.source_id.as_str()) {
            if all.len() > 1 {
                return Err(StructureError::MultipleSuccessors {
                    node_id: relation.source_id.clone(),
                    successors: all.clone(),
                });
            }
        }
        resolved.push((source, successor, relation.relation));
    }
    Ok(resolved)
}

/// Children-before-parents order, or `CyclicStructure` naming the cycle.
pub fn topological_order(graph: &ArgumentStableGraph) -> Result<Vec<NodeIndex>, StructureError> {
    toposort(graph, None).map_err(|cycle| StructureError::CyclicStructure {
        path: describe_cycle(graph, cycle.node_id()),
    })
}

/// Strongly connected components with more than one node.
pub fn find_cycles(graph: &ArgumentStableGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}

/// Follow successors from `start` until a node repeats: `a -> b -> a`.
fn describe_cycle(graph: &ArgumentStableGraph, start: NodeIndex) -> String {
    let cycle = find_cycles(graph)
        .into_iter()
        .find(|scc| scc.contains(&start))
        .unwrap_or_else(|| vec![start]);

    let mut path = vec![graph[start].id.clone()];
    let mut current = start;
    for _ in 0..cycle.len() {
        let next = graph
            .neighbors_directed(current, petgraph::Direction::Outgoing)
            .find(|n| cycle.contains(n));
        match next {
            Some(n) => {
                path.push(graph[n].id.clone());
                if n == start {
                    break;
                }
                current = n;
            }
            None => break,
        }
    }
    path.join(" -> ")
}

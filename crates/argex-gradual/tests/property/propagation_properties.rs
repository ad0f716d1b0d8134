//! Property tests for QEM propagation.

use proptest::prelude::*;

use argex_core::models::{Argument, Debate, Relation};
use argex_gradual::{saturation, ArgumentGraph, Restriction, WeightPropagator};

/// Random in-tree: node `i > 0` points at a parent `< i` with a random sign.
fn tree_strategy(max_nodes: usize) -> impl Strategy<Value = Debate> {
    (2..max_nodes).prop_flat_map(|n| {
        (
            prop::collection::vec(0.0_f64..=1.0, n),
            prop::collection::vec((any::<prop::sample::Index>(), -1i8..=1), n - 1),
        )
            .prop_map(move |(weights, links)| {
                let arguments = weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| Argument::new(format!("n{i}"), *w))
                    .collect();
                let relations = links
                    .iter()
                    .enumerate()
                    .map(|(k, (parent, sign))| {
                        let child = k + 1;
                        Relation::new(
                            format!("n{child}"),
                            format!("n{}", parent.index(child)),
                            f64::from(*sign),
                        )
                    })
                    .collect();
                Debate::new(arguments, relations)
            })
    })
}

proptest! {
    #[test]
    fn final_weights_stay_in_unit_interval(debate in tree_strategy(30)) {
        let weights = WeightPropagator::new().propagate_debate(&debate).unwrap();
        for (id, w) in &weights {
            prop_assert!((0.0..=1.0).contains(w), "{} out of range: {}", id, w);
        }
    }

    #[test]
    fn leaves_keep_initial_weight(debate in tree_strategy(30)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        for idx in graph.node_indices() {
            let contributes = graph.children(idx).iter().any(|(_, r)| *r != 0.0);
            if !contributes {
                prop_assert_eq!(weights.get(idx), Some(graph.initial_weight(idx)));
            }
        }
    }

    #[test]
    fn singleton_restrictions_are_identity(debate in tree_strategy(20)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        for idx in graph.node_indices() {
            let weights = WeightPropagator::new()
                .propagate(&graph, &Restriction::from_indices(&graph, [idx]));
            prop_assert_eq!(weights.get(idx), Some(graph.initial_weight(idx)));
        }
    }

    #[test]
    fn restriction_over_every_id_matches_full_graph(debate in tree_strategy(25)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let ids: Vec<&str> = debate.arguments.iter().rev().map(|a| a.id.as_str()).collect();
        let restriction = Restriction::from_ids(&graph, ids).unwrap();
        prop_assert_eq!(restriction.len(), graph.node_count());

        let propagator = WeightPropagator::new();
        let restricted = propagator.propagate(&graph, &restriction);
        prop_assert_eq!(restricted, propagator.propagate_full(&graph));
    }

    #[test]
    fn propagation_is_deterministic(debate in tree_strategy(25)) {
        let a = WeightPropagator::new().propagate_debate(&debate).unwrap();
        let b = WeightPropagator::new().propagate_debate(&debate).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn saturation_is_monotone_and_bounded(x in -10.0_f64..10.0, dx in 0.0_f64..5.0) {
        let hx = saturation(x);
        prop_assert!((0.0..1.0).contains(&hx));
        prop_assert!(saturation(x + dx) >= hx);
    }
}

//! Property tests for explanation search.

use proptest::prelude::*;

use argex_branches::BranchExtractor;
use argex_core::models::{Argument, Debate, ExplanationStrategy, RankingHeuristic, Relation};
use argex_explain::{ExplanationSearch, SearchOutcome, SizeMetrics};
use argex_gradual::{ArgumentGraph, WeightPropagator};

/// Random in-tree rooted at `n0`: node `i > 0` points at a parent `< i`.
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
    fn found_explanations_verify(debate in tree_strategy(20)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();
        let search = ExplanationSearch::new();

        for strategy in ExplanationStrategy::ALL {
            for heuristic in RankingHeuristic::ALL {
                let outcome = search.explain_with(&graph, &weights, &set, heuristic, strategy).unwrap();
                if let SearchOutcome::Found(explanation) = &outcome {
                    prop_assert!(explanation.verify(&graph).unwrap());
                    match strategy {
                        ExplanationStrategy::Constructive => {
                            prop_assert!((2..=3).contains(&explanation.stages.len()));
                        }
                        ExplanationStrategy::Destructive => {
                            prop_assert_eq!(explanation.stages.len(), 3);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn steps_are_bounded_by_searched_branches(debate in tree_strategy(20)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();
        let search = ExplanationSearch::new();
        let direction = search.direction(&graph, &weights, "n0").unwrap();

        for strategy in ExplanationStrategy::ALL {
            let outcome = search
                .explain_with(&graph, &weights, &set, RankingHeuristic::SmallToLarge, strategy)
                .unwrap();
            match SizeMetrics::measure(&outcome, strategy, direction, &set, graph.node_count()) {
                Some(metrics) => {
                    prop_assert!(outcome.steps() >= 1);
                    prop_assert!(outcome.steps() <= metrics.total_branches + 1);
                    prop_assert!(metrics.count_branches_returned <= metrics.total_branches);
                    prop_assert!(metrics.count_args_returned <= metrics.total_graph_args);
                }
                None => {
                    prop_assert_eq!(outcome, SearchOutcome::NotApplicable);
                }
            }
        }
    }
}

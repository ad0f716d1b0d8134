//! Property tests for branch extraction and ranking.

use std::collections::HashSet;

use proptest::prelude::*;

use argex_branches::{BranchExtractor, BranchRanker, PolarityMap};
use argex_core::models::{Argument, BranchCategory, Debate, Polarity, RankingHeuristic, Relation};
use argex_gradual::{ArgumentGraph, WeightPropagator};

/// Random in-tree rooted at `n0`: node `i > 0` points at a parent `< i`.
fn tree_strategy(max_nodes: usize) -> impl Strategy<Value = Debate> {
    (2..max_nodes).prop_flat_map(|n| {
        (
            prop::collection::vec(prop_oneof![Just(0.0), 0.0_f64..=1.0], n),
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
    fn unweakened_branches_hold_one_polarity(debate in tree_strategy(25)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let target = graph.get_node("n0").unwrap();
        let map = PolarityMap::new(&graph, &weights, target);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();

        for (category, side) in [
            (BranchCategory::UnweakenedPro, Polarity::Pro),
            (BranchCategory::UnweakenedCon, Polarity::Con),
        ] {
            for branch in set.get(category) {
                for id in &branch.nodes {
                    let idx = graph.get_node(id).unwrap();
                    prop_assert!(map.matches(idx, side), "{} in {} has sign {}", id, branch.id, map.sign(idx));
                }
            }
        }
    }

    #[test]
    fn branch_roots_are_significant_and_never_the_target(debate in tree_strategy(25)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();

        for (_, branches) in set.iter() {
            for branch in branches {
                let root = branch.root().unwrap();
                prop_assert_ne!(root, "n0");
                let w = weights.get(graph.get_node(root).unwrap()).unwrap();
                prop_assert!(w != 0.0);
                let unique: HashSet<_> = branch.nodes.iter().collect();
                prop_assert_eq!(unique.len(), branch.nodes.len());
            }
        }
    }

    #[test]
    fn unweakened_branches_are_subsets_of_full_branches(debate in tree_strategy(25)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();

        for (unweakened, full) in [
            (&set.unweakened_pro, &set.pro),
            (&set.unweakened_con, &set.con),
        ] {
            for branch in unweakened {
                let owner = full.iter().find(|b| b.root() == branch.root());
                prop_assert!(owner.is_some());
                let owner: HashSet<_> = owner.unwrap().nodes.iter().collect();
                prop_assert!(branch.nodes.iter().all(|n| owner.contains(n)));
            }
        }
    }

    #[test]
    fn ranking_is_a_permutation(debate in tree_strategy(25)) {
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let set = BranchExtractor::new().extract(&graph, &weights, "n0").unwrap();
        let view = weights.view(&graph);

        for heuristic in RankingHeuristic::ALL {
            let ranked = BranchRanker::new().rank_set(&set, &view, heuristic);
            for category in &ranked.categories {
                let mut before: Vec<_> = category.before.iter().map(|b| b.id.clone()).collect();
                let mut after: Vec<_> = category.after.iter().map(|b| b.id.clone()).collect();
                before.sort();
                after.sort();
                prop_assert_eq!(before, after);
            }
        }
    }
}

//! Golden dataset tests for argex-gradual.
//!
//! Loads every golden debate, propagates over the whole graph, and compares
//! each final weight with the recorded expectation.

use argex_core::models::{Debate, Direction};
use argex_gradual::{ArgumentGraph, WeightPropagator};
use test_fixtures::{load_golden_case, GOLDEN_CASES};

#[test]
fn golden_final_weights_match() {
    for name in GOLDEN_CASES {
        let case = load_golden_case(name);
        let debate: Debate = serde_json::from_value(case.debate.clone()).unwrap();
        let weights = WeightPropagator::new().propagate_debate(&debate).unwrap();

        assert_eq!(weights.len(), case.expected.final_weights.len(), "{name}: node count");
        for (id, expected) in &case.expected.final_weights {
            let actual = weights[id];
            assert!(
                (actual - expected).abs() < 1e-9,
                "{name}: {id} expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn golden_directions_match() {
    for name in GOLDEN_CASES {
        let case = load_golden_case(name);
        let debate: Debate = serde_json::from_value(case.debate.clone()).unwrap();
        let graph = ArgumentGraph::from_debate(&debate).unwrap();
        let weights = WeightPropagator::new().propagate_full(&graph);
        let t = graph.get_node(&case.target).unwrap();
        let direction = Direction::from_weights(graph.initial_weight(t), weights.get(t).unwrap());
        assert_eq!(direction.as_str(), case.expected.direction, "{name}");
    }
}

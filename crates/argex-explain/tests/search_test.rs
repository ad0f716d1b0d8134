//! Explanation search outcomes, errors, and size metrics.

use argex_branches::{BranchExtractor, BranchRanker, BranchSet};
use argex_core::config::SearchConfig;
use argex_core::errors::{ArgexError, SearchError};
use argex_core::models::{
    Argument, BranchCategory, Debate, Direction, ExplanationStrategy, RankingHeuristic, Relation,
};
use argex_explain::{ExplanationSearch, SearchOutcome, SizeMetrics};
use argex_gradual::{ArgumentGraph, FinalWeights, WeightPropagator};
use test_fixtures::load_golden_case;

fn prepare(debate: &Debate, target: &str) -> (ArgumentGraph, FinalWeights, BranchSet) {
    let graph = ArgumentGraph::from_debate(debate).unwrap();
    let weights = WeightPropagator::new().propagate_full(&graph);
    let set = BranchExtractor::new().extract(&graph, &weights, target).unwrap();
    (graph, weights, set)
}

fn chain() -> Debate {
    Debate::new(
        vec![
            Argument::new("T", 0.5),
            Argument::new("B", 0.5),
            Argument::new("A", 0.5),
        ],
        vec![Relation::new("B", "T", 1.0), Relation::new("A", "B", 1.0)],
    )
}

fn mixed_tree() -> Debate {
    serde_json::from_value(load_golden_case("mixed_tree").debate).unwrap()
}

#[test]
fn chain_constructive_adds_the_single_pro_branch() {
    let (graph, weights, set) = prepare(&chain(), "T");
    let outcome = ExplanationSearch::new()
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::WeakToStrong,
            ExplanationStrategy::Constructive,
        )
        .unwrap();

    let explanation = outcome.explanation().unwrap();
    assert_eq!(explanation.direction, Direction::Strengthening);
    assert_eq!(
        explanation.branch_ids(),
        vec![Vec::<String>::new(), vec!["Pb1".to_string()]]
    );
    assert_eq!(explanation.node_ids()[1], ["B", "A"]);
    assert_eq!(explanation.final_nodes, ["B", "A", "T"]);
    assert_eq!(explanation.steps, 2);
    assert_eq!(explanation.stages[0].category, BranchCategory::UnweakenedCon);
    assert_eq!(explanation.stages[1].category, BranchCategory::Pro);
}

#[test]
fn unchanged_target_is_not_applicable() {
    let debate = Debate::new(
        vec![
            Argument::new("t", 0.42),
            Argument::new("s", 0.7),
            Argument::new("a", 0.7),
        ],
        vec![Relation::new("s", "t", 1.0), Relation::new("a", "t", -1.0)],
    );
    let (graph, weights, set) = prepare(&debate, "t");
    let search = ExplanationSearch::new();
    assert_eq!(search.direction(&graph, &weights, "t").unwrap(), Direction::Unchanged);

    for strategy in ExplanationStrategy::ALL {
        let outcome = search
            .explain_with(&graph, &weights, &set, RankingHeuristic::SmallToLarge, strategy)
            .unwrap();
        assert_eq!(outcome, SearchOutcome::NotApplicable);
        assert_eq!(outcome.status(), "not_applicable");
        assert_eq!(outcome.steps(), 0);
    }
}

#[test]
fn exhausted_branches_are_an_outcome() {
    let (graph, weights, _) = prepare(&chain(), "T");
    let empty = BranchSet::empty("T");
    let search = ExplanationSearch::new();

    for strategy in ExplanationStrategy::ALL {
        let outcome = search
            .explain_with(&graph, &weights, &empty, RankingHeuristic::WeakToStrong, strategy)
            .unwrap();
        assert_eq!(outcome, SearchOutcome::NoExplanationFound { steps: 1 });
        assert_eq!(outcome.status(), "no_explanation_found");
        assert!(outcome.explanation().is_none());
    }
}

#[test]
fn step_limit_aborts_the_search() {
    let (graph, weights, set) = prepare(&mixed_tree(), "d.0");
    let search = ExplanationSearch::with_config(SearchConfig {
        max_steps: Some(2),
        ..SearchConfig::default()
    });

    // Weak to strong needs three retests on this tree.
    let err = search
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::WeakToStrong,
            ExplanationStrategy::Constructive,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ArgexError::Search(SearchError::StepLimitExceeded { limit: 2 })
    ));

    // Strong to weak fits in two.
    let outcome = search
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::StrongToWeak,
            ExplanationStrategy::Constructive,
        )
        .unwrap();
    assert!(outcome.is_found());
}

#[test]
fn unknown_target_is_an_error() {
    let (graph, weights, _) = prepare(&chain(), "T");
    let ranked = BranchRanker::new().rank_set(
        &BranchSet::empty("missing"),
        &weights.view(&graph),
        RankingHeuristic::WeakToStrong,
    );
    let err = ExplanationSearch::new()
        .explain(&graph, &weights, &ranked, ExplanationStrategy::Destructive)
        .unwrap_err();
    assert!(matches!(
        err,
        ArgexError::Search(SearchError::TargetNotFound { .. })
    ));
}

#[test]
fn destructive_always_reports_three_stages() {
    let (graph, weights, set) = prepare(&chain(), "T");
    let outcome = ExplanationSearch::new()
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::SmallToLarge,
            ExplanationStrategy::Destructive,
        )
        .unwrap();
    let explanation = outcome.explanation().unwrap();
    assert_eq!(explanation.stages.len(), 3);
    assert_eq!(explanation.stages[1].category, BranchCategory::ConWeakening);
    assert_eq!(explanation.added_stages().len(), 1);
    assert_eq!(explanation.added_stages()[0].branch_ids, ["Pb1"]);
}

#[test]
fn outcome_serializes_with_status_tag() {
    let value = serde_json::to_value(SearchOutcome::NoExplanationFound { steps: 4 }).unwrap();
    assert_eq!(value["status"], "no_explanation_found");
    assert_eq!(value["steps"], 4);
    let value = serde_json::to_value(SearchOutcome::NotApplicable).unwrap();
    assert_eq!(value["status"], "not_applicable");
}

#[test]
fn size_metrics_on_mixed_tree() {
    let (graph, weights, set) = prepare(&mixed_tree(), "d.0");
    let search = ExplanationSearch::new();

    let constructive = search
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::WeakToStrong,
            ExplanationStrategy::Constructive,
        )
        .unwrap();
    let metrics = SizeMetrics::measure(
        &constructive,
        ExplanationStrategy::Constructive,
        Direction::Strengthening,
        &set,
        graph.node_count(),
    )
    .unwrap();
    assert_eq!(metrics.total_graph_args, 12);
    assert_eq!(metrics.total_branches, 3, "two pro plus one con-weakening");
    assert_eq!(metrics.count_args_returned, 8);
    assert_eq!(metrics.pct_args_of_graph, 66.67);
    assert_eq!(metrics.count_branches_returned, 2);
    assert_eq!(metrics.pct_branches_returned, 66.67);

    let destructive = search
        .explain_with(
            &graph,
            &weights,
            &set,
            RankingHeuristic::StrongToWeak,
            ExplanationStrategy::Destructive,
        )
        .unwrap();
    let metrics = SizeMetrics::measure(
        &destructive,
        ExplanationStrategy::Destructive,
        Direction::Strengthening,
        &set,
        graph.node_count(),
    )
    .unwrap();
    assert_eq!(metrics.total_branches, 2);
    assert_eq!(metrics.count_args_returned, 8);
    assert_eq!(metrics.count_branches_returned, 1);
    assert_eq!(metrics.pct_branches_returned, 50.0);
}

#[test]
fn size_metrics_of_a_failed_search_count_only_the_target() {
    let (_, _, set) = prepare(&chain(), "T");
    let metrics = SizeMetrics::measure(
        &SearchOutcome::NoExplanationFound { steps: 3 },
        ExplanationStrategy::Constructive,
        Direction::Strengthening,
        &set,
        3,
    )
    .unwrap();
    assert_eq!(metrics.count_args_returned, 1);
    assert_eq!(metrics.count_branches_returned, 0);
    assert_eq!(metrics.pct_args_of_graph, 33.33);
    assert_eq!(metrics.total_branches, 1);

    assert!(SizeMetrics::measure(
        &SearchOutcome::NotApplicable,
        ExplanationStrategy::Destructive,
        Direction::Unchanged,
        &set,
        3,
    )
    .is_none());
}

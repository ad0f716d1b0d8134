//! One (debate, target) unit from weights to rows.

use serde::Serialize;
use tracing::info;

use argex_branches::{BranchExtractor, BranchRanker, BranchSet};
use argex_core::config::ArgexConfig;
use argex_core::errors::ArgexResult;
use argex_core::models::{Debate, Direction, ExplanationStrategy};
use argex_explain::{ExplanationSearch, SizeMetrics};
use argex_gradual::{ArgumentGraph, WeightPropagator};

use crate::filter::FilterReason;
use crate::rows::{BranchRankingRow, ExplanationRow, SizeRow, StrategyColumns};

/// A debate (usually a sub-debate) with the argument to explain.
#[derive(Debug, Clone, PartialEq)]
pub struct DebateUnit {
    /// Sub-debate name, e.g. `1563_T2of3_1563.2`.
    pub name: String,
    pub debate_id: String,
    pub target_id: String,
    pub debate: Debate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitReport {
    pub unit: String,
    pub debate_id: String,
    pub target_id: String,
    pub direction: Direction,
    /// Classification of the enriched record.
    pub weight_change: FilterReason,
    pub total_graph_args: usize,
    pub branches: BranchSet,
    pub rankings: Vec<BranchRankingRow>,
    pub explanations: Vec<ExplanationRow>,
    pub sizes: Vec<SizeRow>,
    /// The unit's debate with resolved initial and propagated final weights.
    pub enriched: Debate,
}

/// Propagate, extract, rank under every configured heuristic, and run every
/// configured strategy. An unchanged target yields `not_applicable`
/// explanation rows and no size rows.
pub fn process_unit(unit: &DebateUnit, config: &ArgexConfig) -> ArgexResult<UnitReport> {
    let graph = ArgumentGraph::from_debate_with(&unit.debate, &config.propagation)?;
    let propagator = WeightPropagator::with_config(config.propagation.clone());
    let weights = propagator.propagate_full(&graph);

    let mut enriched = unit.debate.clone();
    weights.write_into(&graph, &mut enriched);

    let search = ExplanationSearch::with_config(config.search.clone()).with_propagator(propagator);
    let direction = search.direction(&graph, &weights, &unit.target_id)?;
    let branches = BranchExtractor::new().extract(&graph, &weights, &unit.target_id)?;

    let strategies = config.search.effective_strategies();
    let view = weights.view(&graph);
    let mut rankings = Vec::new();
    let mut explanations = Vec::new();
    let mut sizes = Vec::new();

    for heuristic in config.search.effective_heuristics() {
        let ranked = BranchRanker::new().rank_set(&branches, &view, heuristic);
        rankings.extend(BranchRankingRow::from_ranked(&unit.debate_id, direction, &ranked));

        let mut constructive = None;
        let mut destructive = None;
        for &strategy in &strategies {
            let outcome = search.explain(&graph, &weights, &ranked, strategy)?;
            if let Some(metrics) =
                SizeMetrics::measure(&outcome, strategy, direction, &branches, graph.node_count())
            {
                sizes.push(SizeRow {
                    debate_id: unit.debate_id.clone(),
                    target_id: unit.target_id.clone(),
                    direction,
                    strategy,
                    heuristic,
                    metrics,
                });
            }
            match strategy {
                ExplanationStrategy::Constructive => constructive = Some(outcome),
                ExplanationStrategy::Destructive => destructive = Some(outcome),
            }
        }

        explanations.push(ExplanationRow {
            debate_id: unit.debate_id.clone(),
            target_id: unit.target_id.clone(),
            direction,
            heuristic,
            constructive: StrategyColumns::from_outcome(constructive.as_ref()),
            destructive: StrategyColumns::from_outcome(destructive.as_ref()),
        });
    }

    let found = explanations
        .iter()
        .flat_map(|row| [&row.constructive, &row.destructive])
        .filter(|columns| columns.success)
        .count();
    info!(
        unit = %unit.name,
        %direction,
        arguments = graph.node_count(),
        branches = branches.total_branches(),
        found,
        "unit processed"
    );

    Ok(UnitReport {
        unit: unit.name.clone(),
        debate_id: unit.debate_id.clone(),
        target_id: unit.target_id.clone(),
        direction,
        weight_change: FilterReason::of(&enriched, &unit.target_id),
        total_graph_args: graph.node_count(),
        branches,
        rankings,
        explanations,
        sizes,
        enriched,
    })
}

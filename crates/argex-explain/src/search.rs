//! ExplanationSearch: entry point for both strategies.

use tracing::{debug, warn};

use argex_branches::{BranchRanker, BranchSet, RankedBranchSet};
use argex_core::config::SearchConfig;
use argex_core::errors::{ArgexResult, SearchError};
use argex_core::models::{Direction, ExplanationStrategy, Polarity, RankingHeuristic};
use argex_gradual::{ArgumentGraph, FinalWeights, WeightPropagator};

use crate::explanation::Explanation;
use crate::outcome::SearchOutcome;
use crate::probe::RestrictionProbe;
use crate::{constructive, destructive};

#[derive(Debug, Clone, Default)]
pub struct ExplanationSearch {
    config: SearchConfig,
    propagator: WeightPropagator,
}

impl ExplanationSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            propagator: WeightPropagator::new(),
        }
    }

    pub fn with_propagator(mut self, propagator: WeightPropagator) -> Self {
        self.propagator = propagator;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// How the target moved on the full graph. `weights` must be the
    /// full-graph propagation.
    pub fn direction(
        &self,
        graph: &ArgumentGraph,
        weights: &FinalWeights,
        target_id: &str,
    ) -> Result<Direction, SearchError> {
        let target = graph.target(target_id)?;
        let initial = graph.initial_weight(target);
        Ok(Direction::from_weights(initial, weights.get(target).unwrap_or(initial)))
    }

    /// Run `strategy` over branches already ranked under one heuristic.
    pub fn explain(
        &self,
        graph: &ArgumentGraph,
        weights: &FinalWeights,
        ranked: &RankedBranchSet,
        strategy: ExplanationStrategy,
    ) -> ArgexResult<SearchOutcome> {
        let target = graph.target(&ranked.target_id)?;
        let direction = self.direction(graph, weights, &ranked.target_id)?;
        let supporting = match direction {
            Direction::Strengthening => Polarity::Pro,
            Direction::Weakening => Polarity::Con,
            Direction::Unchanged => {
                debug!(target_id = %ranked.target_id, %strategy, "target unchanged, nothing to explain");
                return Ok(SearchOutcome::NotApplicable);
            }
        };

        let limit = self.config.effective_max_steps();
        let mut probe = RestrictionProbe::new(graph, &self.propagator, target, direction, limit);
        let stages = match strategy {
            ExplanationStrategy::Constructive => constructive::search(&mut probe, ranked, supporting)?,
            ExplanationStrategy::Destructive => destructive::search(&mut probe, ranked, supporting)?,
        };
        let steps = probe.steps();

        let Some(stages) = stages else {
            debug!(
                target_id = %ranked.target_id,
                %strategy,
                heuristic = %ranked.heuristic,
                steps,
                "no explanation found"
            );
            return Ok(SearchOutcome::NoExplanationFound { steps });
        };

        let explanation = Explanation::new(
            &ranked.target_id,
            strategy,
            direction,
            ranked.heuristic,
            stages,
            steps,
        );
        if self.config.effective_verify_explanations() && !explanation.verify(graph)? {
            warn!(
                target_id = %ranked.target_id,
                %strategy,
                heuristic = %ranked.heuristic,
                "explanation does not reproduce the target's direction"
            );
        }
        debug!(
            target_id = %ranked.target_id,
            %strategy,
            heuristic = %ranked.heuristic,
            steps,
            arguments = explanation.final_nodes.len(),
            "explanation found"
        );
        Ok(SearchOutcome::Found(explanation))
    }

    /// Rank `set` under `heuristic` by full-graph final weight, then explain.
    pub fn explain_with(
        &self,
        graph: &ArgumentGraph,
        weights: &FinalWeights,
        set: &BranchSet,
        heuristic: RankingHeuristic,
        strategy: ExplanationStrategy,
    ) -> ArgexResult<SearchOutcome> {
        let ranked = BranchRanker::new().rank_set(set, &weights.view(graph), heuristic);
        self.explain(graph, weights, &ranked, strategy)
    }
}

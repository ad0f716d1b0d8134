//! Step-bounded retests of the target on a node-subset restriction.

use petgraph::stable_graph::NodeIndex;
use tracing::debug;

use argex_core::errors::{ArgexResult, SearchError};
use argex_core::models::Direction;
use argex_gradual::{ArgumentGraph, Restriction, WeightPropagator};

pub(crate) struct RestrictionProbe<'a> {
    graph: &'a ArgumentGraph,
    propagator: &'a WeightPropagator,
    target: NodeIndex,
    initial: f64,
    direction: Direction,
    steps: usize,
    limit: usize,
}

impl<'a> RestrictionProbe<'a> {
    pub(crate) fn new(
        graph: &'a ArgumentGraph,
        propagator: &'a WeightPropagator,
        target: NodeIndex,
        direction: Direction,
        limit: usize,
    ) -> Self {
        Self {
            graph,
            propagator,
            target,
            initial: graph.initial_weight(target),
            direction,
            steps: 0,
            limit,
        }
    }

    /// Rebuild the restriction `nodes ∪ {target}` and report whether the
    /// target moves in the observed direction on it.
    pub(crate) fn holds(&mut self, nodes: &[String]) -> ArgexResult<bool> {
        if self.steps >= self.limit {
            return Err(SearchError::StepLimitExceeded { limit: self.limit }.into());
        }
        self.steps += 1;

        let mut restriction = Restriction::from_ids(self.graph, nodes)?;
        restriction.insert(self.target);
        let weights = self.propagator.propagate(self.graph, &restriction);
        let value = weights.get(self.target).unwrap_or(self.initial);
        let held = self.direction.holds(self.initial, value);

        debug!(
            step = self.steps,
            nodes = restriction.len(),
            weight = value,
            held,
            "restriction retested"
        );
        Ok(held)
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }
}

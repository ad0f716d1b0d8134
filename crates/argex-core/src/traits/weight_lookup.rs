//! Read access to final weights by argument id.

use std::collections::{BTreeMap, HashMap};

use crate::models::Debate;

/// Anything that can answer "what is the final weight of argument `id`".
///
/// Propagation results, recorded debate files, and plain maps all implement
/// it, so ranking works the same over fresh and persisted weights.
pub trait WeightLookup {
    fn final_weight(&self, id: &str) -> Option<f64>;
}

impl WeightLookup for HashMap<String, f64> {
    fn final_weight(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl WeightLookup for BTreeMap<String, f64> {
    fn final_weight(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl WeightLookup for Debate {
    fn final_weight(&self, id: &str) -> Option<f64> {
        self.argument(id).and_then(|a| a.final_weight)
    }
}

impl<T: WeightLookup + ?Sized> WeightLookup for &T {
    fn final_weight(&self, id: &str) -> Option<f64> {
        (**self).final_weight(id)
    }
}

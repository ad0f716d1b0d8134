//! QEM gradual semantics.

pub mod engine;
pub mod final_weights;
pub mod saturation;

pub use engine::WeightPropagator;
pub use final_weights::{FinalWeights, WeightView};
pub use saturation::saturation;

//! # argex-explain
//!
//! Minimal explanations of a target's weight change. Both searches grow a
//! node set from ranked branches and retest propagation on the induced
//! restriction until the target moves the way it did on the full graph.
//!
//! * constructive: start from the opposing unweakened branches, add
//!   supporting branches, then the branches weakening the opposition;
//! * destructive: start from all of the opposition (unweakened plus its
//!   weakeners), add supporting branches.

mod constructive;
mod destructive;
pub mod explanation;
pub mod metrics;
pub mod outcome;
mod probe;
pub mod search;

pub use explanation::{Explanation, ExplanationStage};
pub use metrics::SizeMetrics;
pub use outcome::SearchOutcome;
pub use search::ExplanationSearch;

//! # argex-gradual
//!
//! Turns a debate record into a validated in-tree (`petgraph`) and propagates
//! vote-derived initial weights to final weights under the QEM semantics, on
//! the whole graph or on any node-subset restriction of it.

pub mod graph;
pub mod propagation;

pub use graph::{ArgumentGraph, Restriction};
pub use propagation::{saturation, FinalWeights, WeightPropagator};
